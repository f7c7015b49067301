use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single quality issue found in a file.
///
/// Findings are plain values: two findings are equal when all their fields are.
/// Fields are public for reading; the checker and reporters never modify a
/// finding once a rule has built it, and the builder methods take `self` by
/// value and return a new finding.
/// The serialized form is the JSON report schema, so `rule_name` is written as `rule`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Path of the file the issue was found in.
    pub file_path: String,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column (1-indexed), when the rule can point at one.
    pub column: Option<usize>,
    /// Human-readable description.
    pub message: String,
    /// Name of the rule that produced the finding.
    #[serde(rename = "rule")]
    pub rule_name: String,
    pub severity: Severity,
}

impl Finding {
    /// Creates a finding without a column and with the default severity.
    pub fn new(
        file_path: impl Into<String>,
        line: usize,
        message: impl Into<String>,
        rule_name: impl Into<String>,
    ) -> Self {
        debug_assert!(line >= 1, "line numbers are 1-indexed");
        Self {
            file_path: file_path.into(),
            line,
            column: None,
            message: message.into(),
            rule_name: rule_name.into(),
            severity: Severity::default(),
        }
    }

    pub fn with_column(mut self, column: usize) -> Self {
        debug_assert!(column >= 1, "columns are 1-indexed");
        self.column = Some(column);
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// `file_path:line[:column]`
    pub fn location(&self) -> String {
        match self.column {
            Some(column) => format!("{}:{}:{}", self.file_path, self.line, column),
            None => format!("{}:{}", self.file_path, self.line),
        }
    }
}
