use crate::errors::{QualityError, Result};
use crate::finding::{Finding, Severity};
use crate::reporters::Reporter;
use colored::*;
use std::io::{self, IsTerminal, Stdout, Write};

/// Writes findings as readable text, one line per finding.
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
    /// Whether severity tags are colored.
    color: bool,
}

impl ConsoleReporter<Stdout> {
    /// Reports to stdout, coloring only when stdout is a terminal.
    pub fn new() -> Self {
        let color = io::stdout().is_terminal();
        Self {
            out: io::stdout(),
            color,
        }
    }
}

impl Default for ConsoleReporter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Reports to an arbitrary writer without colors.
    pub fn with_writer(out: W) -> Self {
        Self { out, color: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn severity_tag(&self, severity: Severity) -> String {
        let tag = format!("[{}]", severity);
        if !self.color {
            return tag;
        }
        match severity {
            Severity::High => tag.red().bold().to_string(),
            Severity::Medium => tag.yellow().to_string(),
            Severity::Low => tag.blue().to_string(),
        }
    }

    fn write_report(&mut self, findings: &[Finding]) -> io::Result<()> {
        if findings.is_empty() {
            writeln!(self.out, "✅ No findings. Nice work!")?;
            return self.out.flush();
        }

        let header = "❌ Findings:";
        if self.color {
            writeln!(self.out, "{}", header.bold())?;
        } else {
            writeln!(self.out, "{}", header)?;
        }
        for finding in findings {
            let line = self.format_finding(finding);
            writeln!(self.out, "{}", line)?;
        }
        writeln!(self.out, "\nTotal: {} findings", findings.len())?;
        self.out.flush()
    }

    /// `[SEVERITY] file_path:line[:column] - rule_name: message`
    pub fn format_finding(&self, finding: &Finding) -> String {
        format!(
            "{} {} - {}: {}",
            self.severity_tag(finding.severity),
            finding.location(),
            finding.rule_name,
            finding.message
        )
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, findings: &[Finding]) -> Result<()> {
        self.write_report(findings).map_err(QualityError::Console)
    }
}
