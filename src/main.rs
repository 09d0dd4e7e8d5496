//! wtm: Git worktree manager.
//!
//! This is the main entry point for the `wtm` CLI. It parses arguments,
//! sets up logging, dispatches to the appropriate command handler, and
//! handles errors with proper exit codes.

mod cli;
mod commands;
mod config;
mod context;
mod error;
mod exec;
mod exit_codes;
mod git;
mod worktree;

#[cfg(test)]
mod test_support;

use cli::Cli;
use error::WtmError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `WTM_LOG=wtm=debug`).
const LOG_ENV: &str = "WTM_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_logging();

    let result = std::env::current_dir()
        .map_err(|e| WtmError::UserError(format!("cannot read the current directory: {}", e)))
        .and_then(|cwd| commands::dispatch(cli.command, &cwd));

    match result {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
