//! Configuration loading and parsing

use anyhow::{Context, Result};
use callback_core::DEMO_ARGUMENT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub demo: DemoConfig,
}

/// Which caller variant(s) to demonstrate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Generic slot: functions, closures and function-like objects
    Closure,
    /// Restricted slot: plain function pointers only
    FnPointer,
    /// Both variants, generic slot first
    #[default]
    All,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Console transcript, as the callbacks run
    #[default]
    Text,
    /// JSON array of (label, argument, result) records after the run
    Json,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DemoConfig {
    #[serde(default = "default_argument")]
    pub argument: i32,
    #[serde(default)]
    pub variant: Variant,
    #[serde(default)]
    pub format: OutputFormat,
    /// Internal state of the function-like callee
    #[serde(default = "default_callee_factor")]
    pub callee_factor: i32,
}

fn default_argument() -> i32 {
    DEMO_ARGUMENT
}

fn default_callee_factor() -> i32 {
    30
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            argument: default_argument(),
            variant: Variant::default(),
            format: OutputFormat::default(),
            callee_factor: default_callee_factor(),
        }
    }
}

impl DemoConfig {
    /// Command-line values take precedence over the file
    pub fn apply_overrides(
        &mut self,
        argument: Option<i32>,
        variant: Option<Variant>,
        format: Option<OutputFormat>,
    ) {
        if let Some(argument) = argument {
            self.argument = argument;
        }
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if let Some(format) = format {
            self.format = format;
        }
    }
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    Ok(config)
}
