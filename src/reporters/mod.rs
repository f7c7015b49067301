// Reporters module
// Sinks that render the findings collected by a run.

use crate::errors::Result;
use crate::finding::Finding;

/// Human-readable report on standard output.
pub mod console;

/// JSON report written to a file.
pub mod json;

pub use console::ConsoleReporter;
pub use json::JsonFileReporter;

/// Renders the findings of a run.
///
/// The checker calls `report` exactly once per run with every finding, in order.
/// Output failures are returned to the caller and end the run.
pub trait Reporter {
    fn report(&mut self, findings: &[Finding]) -> Result<()>;
}
