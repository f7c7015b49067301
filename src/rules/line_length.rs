use crate::finding::{Finding, Severity};
use crate::rules::Rule;
use crate::utils::split_lines;

/// Default maximum number of characters per line.
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// Flags every line whose length exceeds `max_length`.
///
/// Length is counted in characters, not bytes, and only the line terminator
/// is excluded: trailing whitespace counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxLineLengthRule {
    /// Maximum allowed characters per line.
    pub max_length: usize,
}

impl MaxLineLengthRule {
    pub fn new(max_length: usize) -> Self {
        Self { max_length }
    }
}

impl Default for MaxLineLengthRule {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LENGTH)
    }
}

impl Rule for MaxLineLengthRule {
    fn name(&self) -> &'static str {
        "MaxLineLength"
    }

    fn check(&self, file_path: &str, content: &str) -> Vec<Finding> {
        split_lines(content)
            .into_iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let length = line.chars().count();
                if length <= self.max_length {
                    return None;
                }
                Some(
                    Finding::new(
                        file_path,
                        idx + 1,
                        format!(
                            "Line exceeds the maximum of {} characters (has {}).",
                            self.max_length, length
                        ),
                        self.name(),
                    )
                    // The first offending character.
                    .with_column(self.max_length + 1)
                    .with_severity(Severity::Medium),
                )
            })
            .collect()
    }
}
