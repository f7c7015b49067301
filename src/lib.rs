// Lib file to expose modules for testing and external usage.
// This file serves as the root for the library crate.

/// Module containing the `QualityChecker` and file discovery.
pub mod checker;

/// Module defining the command line surface and its wiring.
pub mod cli;

/// Module defining the error type shared by readers and reporters.
pub mod errors;

/// Module defining the `Finding` record and its `Severity`.
pub mod finding;

/// Module containing the reporters (console and JSON file).
pub mod reporters;

/// Module containing the `Rule` trait and the concrete rules.
pub mod rules;

/// Module containing line splitting and source reading helpers.
pub mod utils;

pub use checker::QualityChecker;
pub use finding::{Finding, Severity};
pub use reporters::Reporter;
pub use rules::Rule;
