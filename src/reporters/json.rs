use crate::errors::{QualityError, Result};
use crate::finding::Finding;
use crate::reporters::Reporter;
use std::fs;
use std::io::{self, Stdout, Write};
use std::path::{Path, PathBuf};

/// Default file the JSON report is written to.
pub const DEFAULT_OUTPUT: &str = "quality_report.json";

/// Writes the findings as a pretty-printed JSON array.
///
/// The file is overwritten on every run and missing parent directories are
/// created first. A confirmation line naming the file goes to `notice`.
#[derive(Debug)]
pub struct JsonFileReporter<W: Write = Stdout> {
    pub output_path: PathBuf,
    notice: W,
}

impl JsonFileReporter<Stdout> {
    /// Confirms on stdout.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self::with_writer(output_path, io::stdout())
    }
}

impl<W: Write> JsonFileReporter<W> {
    pub fn with_writer(output_path: impl Into<PathBuf>, notice: W) -> Self {
        Self {
            output_path: output_path.into(),
            notice,
        }
    }

    pub fn into_inner(self) -> W {
        self.notice
    }

    fn ensure_parent(path: &Path) -> Result<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent).map_err(|source| QualityError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })
            }
            _ => Ok(()),
        }
    }
}

impl<W: Write> Reporter for JsonFileReporter<W> {
    fn report(&mut self, findings: &[Finding]) -> Result<()> {
        // serde_json pretty output uses 2-space indentation and leaves non-ASCII unescaped.
        let mut json = serde_json::to_string_pretty(findings)?;
        json.push('\n');

        Self::ensure_parent(&self.output_path)?;
        fs::write(&self.output_path, json).map_err(|source| QualityError::Write {
            path: self.output_path.clone(),
            source,
        })?;

        log::debug!("wrote {} findings as JSON", findings.len());
        writeln!(
            self.notice,
            "JSON report written to: {}",
            self.output_path.display()
        )
        .and_then(|()| self.notice.flush())
        .map_err(QualityError::Console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;

    #[test]
    fn test_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("reports").join("nested").join("out.json");
        let mut reporter = JsonFileReporter::new(&output);

        reporter.report(&[]).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "[]\n");
    }

    #[test]
    fn test_two_space_indentation_and_unescaped_text() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.json");
        let finding = Finding::new("señal.py", 1, "línea", "NoTodoComments")
            .with_column(3)
            .with_severity(Severity::Low);

        JsonFileReporter::new(&output).report(&[finding]).unwrap();

        let expected = r#"[
  {
    "file_path": "señal.py",
    "line": 1,
    "column": 3,
    "message": "línea",
    "rule": "NoTodoComments",
    "severity": "LOW"
  }
]
"#;
        assert_eq!(fs::read_to_string(&output).unwrap(), expected);
    }

    #[test]
    fn test_overwrites_previous_report() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.json");
        fs::write(&output, "stale content that is much longer than an empty array").unwrap();

        JsonFileReporter::new(&output).report(&[]).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "[]\n");
    }

    #[test]
    fn test_unwritable_parent_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let err = JsonFileReporter::new(blocker.join("out.json"))
            .report(&[])
            .unwrap_err();
        assert!(matches!(err, QualityError::CreateDir { .. }));
    }

    /// Writer whose every write fails, like a closed stdout.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_confirmation_names_written_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.json");
        let mut reporter = JsonFileReporter::with_writer(&output, Vec::new());

        reporter.report(&[]).unwrap();

        let notice = String::from_utf8(reporter.into_inner()).unwrap();
        assert_eq!(
            notice,
            format!("JSON report written to: {}\n", output.display())
        );
    }

    #[test]
    fn test_closed_stdout_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.json");

        let err = JsonFileReporter::with_writer(&output, ClosedPipe)
            .report(&[])
            .unwrap_err();

        assert!(matches!(err, QualityError::Console(_)));
        // The report itself is still on disk.
        assert_eq!(fs::read_to_string(&output).unwrap(), "[]\n");
    }
}
