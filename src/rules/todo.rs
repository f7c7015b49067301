use crate::finding::{Finding, Severity};
use crate::rules::Rule;
use crate::utils::split_lines;

const MARKERS: [&str; 2] = ["todo", "fixme"];

const MESSAGE: &str = "Avoid TODO/FIXME in code; track pending work in the issue tracker.";

/// Flags lines containing a `TODO` or `FIXME` marker, in any case.
///
/// This is a plain substring scan over the whole line, so a marker inside a
/// string literal or an identifier (`todo_list`) is reported as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTodoCommentsRule;

impl NoTodoCommentsRule {
    /// 1-based column of the first marker in `line`, checking `todo` before `fixme`.
    fn marker_column(line: &str) -> Option<usize> {
        let lowered = line.to_lowercase();
        MARKERS.iter().find_map(|marker| {
            lowered
                .find(*marker)
                .map(|byte_idx| lowered[..byte_idx].chars().count() + 1)
        })
    }
}

impl Rule for NoTodoCommentsRule {
    fn name(&self) -> &'static str {
        "NoTodoComments"
    }

    fn check(&self, file_path: &str, content: &str) -> Vec<Finding> {
        split_lines(content)
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let column = Self::marker_column(line)?;
                Some(
                    Finding::new(file_path, idx + 1, MESSAGE, self.name())
                        .with_column(column)
                        .with_severity(Severity::Low),
                )
            })
            .collect()
    }
}
