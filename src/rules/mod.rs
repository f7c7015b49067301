// Rules module
// Every rule scans the raw text of one file and returns its findings.

use crate::finding::Finding;

/// Rule that flags lines longer than a configured maximum.
pub mod line_length;

/// Rule that flags TODO/FIXME markers.
pub mod todo;

pub use line_length::MaxLineLengthRule;
pub use todo::NoTodoCommentsRule;

/// A text-based quality check.
///
/// One instance is shared by every file of a run (and across rayon workers), so
/// `check` must only read the rule's configuration and must not do any I/O.
pub trait Rule: Send + Sync {
    /// Short identifier, used as `rule_name` on every finding the rule emits.
    fn name(&self) -> &'static str;

    /// Scans `content` (the text of `file_path`) and returns the findings in line order.
    fn check(&self, file_path: &str, content: &str) -> Vec<Finding>;
}

/// The rule set the command line runs, in application order.
pub fn default_rules(max_length: usize) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(MaxLineLengthRule::new(max_length)),
        Box::new(NoTodoCommentsRule),
    ]
}
