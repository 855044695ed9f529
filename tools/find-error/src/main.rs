mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::Args;
use selector_core::{
    setup_logger, Keccak256, LineReporter, RunOutcome, SelectorResolver, SelectorRunner,
};
use std::process::ExitCode;
use tracing::error;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if let Err(io_err) = e.print() {
                eprintln!("{io_err}");
            }
            // clap exits with 2 on usage errors; this tool reports 1.
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let _guard = match setup_logger(&args.to_log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{e:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = run(&args);
    if let Err(e) = &result {
        error!("{e:#}");
    }
    ExitCode::from(exit_status(&result))
}

fn run(args: &Args) -> Result<RunOutcome> {
    let config = args.to_resolver_config()?;
    let resolver = SelectorResolver::new(Keccak256);
    let mut reporter = LineReporter::stdout();

    SelectorRunner::run(&config, &resolver, &mut reporter).context("Error processing ABI file")
}

/// Success for a completed listing or a match; failure for no match and
/// for any usage or input error.
fn exit_status(result: &Result<RunOutcome>) -> u8 {
    match result {
        Ok(outcome) if outcome.is_success() => 0,
        _ => 1,
    }
}
