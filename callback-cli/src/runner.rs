//! Demonstration runs
//!
//! Connects each demo callee to a caller, triggers it, and collects the
//! ordered (label, result) transcript. Caller output goes to `out`.

use crate::config::{DemoConfig, Variant};
use crate::demos::{self, Callee};
use anyhow::{Context, Result};
use callback_core::{ClosureCaller, FnCaller, Invocation, Transcript};
use std::io::Write;

/// Run the generic-slot examples: named function, closure, function-like object
///
/// One caller is reused; every example replaces the previous callback.
pub fn run_closure_demo<W: Write + ?Sized>(
    argument: i32,
    callee_factor: i32,
    out: &mut W,
) -> Result<Transcript> {
    let mut caller = ClosureCaller::new().with_argument(argument);
    let mut transcript = Transcript::new();

    writeln!(out, "Example 1, with a plain function")?;
    caller.connect_callback(demos::callee1);
    let result = caller.test(out).context("Example 1 failed")?;
    transcript.record(Invocation::new("function", argument, result));

    writeln!(out, "\nExample 2, with a closure")?;
    caller.connect_callback(demos::closure());
    let result = caller.test(out).context("Example 2 failed")?;
    transcript.record(Invocation::new("closure", argument, result));

    writeln!(out, "\nExample 3, with a function-like object")?;
    caller.connect_callback(Callee::new(callee_factor));
    let result = caller.test(out).context("Example 3 failed")?;
    transcript.record(Invocation::new("object", argument, result));

    Ok(transcript)
}

/// Run the restricted-slot example with a plain function pointer
pub fn run_fn_pointer_demo<W: Write + ?Sized>(argument: i32, out: &mut W) -> Result<Transcript> {
    let mut caller = FnCaller::new().with_argument(argument);
    let mut transcript = Transcript::new();

    writeln!(out, "C-style example, with a function pointer")?;
    caller.connect_callback(demos::callee);
    let result = caller.test(out).context("C-style example failed")?;
    transcript.record(Invocation::new("fn-pointer", argument, result));

    Ok(transcript)
}

/// Run whichever variant(s) the configuration selects
pub fn run<W: Write + ?Sized>(demo: &DemoConfig, out: &mut W) -> Result<Transcript> {
    log::debug!("Running {:?} demo with argument {}", demo.variant, demo.argument);

    match demo.variant {
        Variant::Closure => run_closure_demo(demo.argument, demo.callee_factor, out),
        Variant::FnPointer => run_fn_pointer_demo(demo.argument, out),
        Variant::All => {
            let mut transcript = run_closure_demo(demo.argument, demo.callee_factor, out)?;
            writeln!(out)?;
            transcript.extend(run_fn_pointer_demo(demo.argument, out)?);
            Ok(transcript)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_demo_results() {
        let mut out = Vec::new();
        let transcript = run_closure_demo(10, 30, &mut out).unwrap();

        assert_eq!(transcript.results(), vec![100, 200, 300]);
        let labels: Vec<&str> = transcript.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["function", "closure", "object"]);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Example 1, with a plain function\n"));
        assert!(text.contains("\nExample 3, with a function-like object\n"));
        assert_eq!(text.matches("Caller::test(): calling the callback...").count(), 3);
        assert!(text.ends_with("Result: 300\n"));
    }

    #[test]
    fn test_fn_pointer_demo_results() {
        let mut out = Vec::new();
        let transcript = run_fn_pointer_demo(10, &mut out).unwrap();

        assert_eq!(transcript.entries(), &[Invocation::new("fn-pointer", 10, 100)]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Result: 100"));
    }

    #[test]
    fn test_run_all_variants_in_order() {
        let demo = DemoConfig::default();
        let transcript = run(&demo, &mut std::io::sink()).unwrap();
        assert_eq!(transcript.results(), vec![100, 200, 300, 100]);
    }

    #[test]
    fn test_run_uses_configured_values() {
        let demo = DemoConfig {
            argument: 2,
            variant: Variant::Closure,
            callee_factor: 7,
            ..DemoConfig::default()
        };
        let transcript = run(&demo, &mut std::io::sink()).unwrap();
        assert_eq!(transcript.results(), vec![20, 40, 14]);
    }

    #[test]
    fn test_run_large_argument_does_not_panic() {
        let argument = 300_000_000;
        let demo = DemoConfig {
            argument,
            ..DemoConfig::default()
        };
        let transcript = run(&demo, &mut std::io::sink()).unwrap();
        assert_eq!(
            transcript.results(),
            vec![
                argument.wrapping_mul(10),
                argument.wrapping_mul(20),
                argument.wrapping_mul(30),
                argument.wrapping_mul(10),
            ]
        );
        assert!(transcript.iter().all(|i| i.argument == argument));
    }
}
