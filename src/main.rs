use anyhow::{Context, Result};
use clap::Parser;
use quality_enforcer::cli::{execute, exit_status, Cli};
use std::process::ExitCode;

/// Main entry point of the application.
///
/// Parses the arguments, runs the checker and maps the number of findings to
/// the exit code (non-zero when anything was found, for CI use).
fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let total = execute(&cli).context("quality check failed")?;

    Ok(ExitCode::from(exit_status(total)))
}
