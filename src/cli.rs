use crate::checker::QualityChecker;
use crate::errors::Result;
use crate::reporters::json::DEFAULT_OUTPUT;
use crate::reporters::{ConsoleReporter, JsonFileReporter, Reporter};
use crate::rules::default_rules;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which sink receives the findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReporterKind {
    /// Readable report on standard output.
    Console,
    /// JSON array written to `--output`.
    Json,
}

/// Command line interface configuration using `clap`.
#[derive(Debug, Parser)]
#[command(
    name = "quality-enforcer",
    author,
    version,
    about = "Checks Python sources against line-based code quality standards",
    long_about = None
)]
pub struct Cli {
    /// Files or directories to check (directories are scanned recursively).
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Maximum allowed characters per line.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_length: u32,

    /// Kind of report to produce.
    #[arg(long, value_enum, default_value_t = ReporterKind::Console)]
    pub reporter: ReporterKind,

    /// Output file for the JSON report (only used with `--reporter json`).
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Increase log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the reporter selected on the command line.
    pub fn build_reporter(&self) -> Box<dyn Reporter> {
        match self.reporter {
            ReporterKind::Console => Box::new(ConsoleReporter::new()),
            ReporterKind::Json => Box::new(JsonFileReporter::new(&self.output)),
        }
    }

    /// Log level implied by `--verbose` when `RUST_LOG` is not set.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

/// Runs the checker as configured by `cli` and returns the number of findings.
pub fn execute(cli: &Cli) -> Result<usize> {
    log::debug!("using {:?} reporter", cli.reporter);
    let mut checker = QualityChecker::new(
        default_rules(cli.max_length as usize),
        cli.build_reporter(),
    );
    checker.run(cli.paths.as_slice())
}

/// Process exit status for a run: 0 when clean, 1 when anything was found.
pub fn exit_status(total: usize) -> u8 {
    if total > 0 {
        1
    } else {
        0
    }
}
