//! Callback Demo CLI Application
//!
//! This is the command-line demonstration driver for the callback library.
//! It uses callback-core and adds:
//! - The demonstration callees (function, closure, function-like object)
//! - Configuration loading (config.toml) with command-line overrides
//! - Text or JSON transcripts of every triggered callback

use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

mod config;
mod demos;
mod runner;

use config::{AppConfig, OutputFormat, Variant};

/// Callback Demo - connect callbacks to a caller and trigger them
#[derive(Parser, Debug)]
#[command(name = "callback-demo")]
#[command(about = "Demonstrate closure and function-pointer callbacks", long_about = None)]
#[command(version)]
struct Args {
    /// Which caller variant to run
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Argument passed to every callback (default: 10)
    #[arg(short, long, allow_negative_numbers = true)]
    argument: Option<i32>,

    /// Output format for the transcript
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Path to configuration file (config.toml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize logging
    init_logging(args.verbose, args.quiet);

    log::debug!("Callback Demo CLI v{}", env!("CARGO_PKG_VERSION"));
    log::debug!("Using callback library v{}", callback_core::VERSION);

    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };
    config
        .demo
        .apply_overrides(args.argument, args.variant, args.format);

    match config.demo.format {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            runner::run(&config.demo, &mut out)?;
            out.flush()?;
        }
        OutputFormat::Json => {
            let transcript = runner::run(&config.demo, &mut io::sink())?;
            println!("{}", serde_json::to_string_pretty(&transcript)?);
        }
    }

    Ok(())
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}
