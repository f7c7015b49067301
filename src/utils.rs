use crate::errors::{QualityError, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Extension of the files the checker scans (compared case-insensitively).
pub const SOURCE_EXTENSION: &str = "py";

lazy_static::lazy_static! {
    /// Every sequence treated as a line boundary: CRLF first so it is consumed as one terminator,
    /// then the single-character separators (LF, CR, VT, FF, FS, GS, RS, NEL, LS, PS).
    static ref LINE_TERMINATOR: Regex =
        Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]").unwrap();
}

/// Splits `content` into lines with their terminators removed.
///
/// A terminator at the very end does not start an extra empty line, so
/// `"a\nb\n"` has two lines and `""` has none. Trailing whitespace is kept.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_TERMINATOR.split(content).collect();
    if lines.last().map_or(false, |last| last.is_empty()) {
        lines.pop();
    }
    lines
}

/// Returns true when `path` carries the source extension, ignoring case.
pub fn has_source_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case(SOURCE_EXTENSION))
}

/// Reads a whole file as text.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than reported, so the only
/// error left is a genuine I/O failure. The handle is closed before returning.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| QualityError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_split_lines_drops_final_terminator() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_split_lines_handles_every_terminator() {
        let source = "a\r\nb\rc\x0bd\x0ce\x1cf\u{85}g\u{2028}h\u{2029}i";
        assert_eq!(
            split_lines(source),
            vec!["a", "b", "c", "d", "e", "f", "g", "h", "i"]
        );
    }

    #[test]
    fn test_split_lines_keeps_trailing_whitespace() {
        assert_eq!(split_lines("x  \n\ty\t\r\n"), vec!["x  ", "\ty\t"]);
    }

    #[test]
    fn test_source_extension_is_case_insensitive() {
        assert!(has_source_extension(&PathBuf::from("pkg/mod.py")));
        assert!(has_source_extension(&PathBuf::from("SCRIPT.PY")));
        assert!(!has_source_extension(&PathBuf::from("notes.txt")));
        assert!(!has_source_extension(&PathBuf::from("py")));
        assert!(!has_source_extension(&PathBuf::from("archive.pyc")));
    }

    #[test]
    fn test_read_source_replaces_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.py");
        fs::write(&path, b"ok = 1\nname = '\xff\xfe'\n").unwrap();

        let text = read_source(&path).unwrap();
        assert_eq!(text, "ok = 1\nname = '\u{FFFD}\u{FFFD}'\n");
    }

    #[test]
    fn test_read_source_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_source(&dir.path().join("gone.py")).unwrap_err();
        assert!(matches!(err, QualityError::Read { .. }));
    }
}
