use crate::errors::{QualityError, Result};
use crate::finding::{Finding, Severity};
use crate::reporters::Reporter;
use crate::rules::Rule;
use crate::utils::{has_source_extension, read_source};
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Rule name used for files that could not be read.
pub const IO_ERROR_RULE: &str = "IOError";

/// Resolves targets into the ordered list of source files to scan.
///
/// Files are kept when they have the source extension; directories are walked
/// recursively in file-name order so the result is stable for a given tree.
/// Missing paths and anything else are skipped without error. Symlinked
/// directories inside a walk are not descended into.
pub fn discover_files<P: AsRef<Path>>(targets: &[P]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for target in targets {
        let target = target.as_ref();
        if target.is_file() {
            if has_source_extension(target) {
                files.push(target.to_path_buf());
            } else {
                debug!("skipping {}: not a source file", target.display());
            }
        } else if target.is_dir() {
            let walker = WalkDir::new(target)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|entry| match entry {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        warn!("skipping unreadable entry under {}: {}", target.display(), err);
                        None
                    }
                });
            files.extend(
                walker
                    .filter(|e| is_walked_source(e))
                    .map(|e| e.into_path()),
            );
        } else {
            debug!("skipping {}: no such file or directory", target.display());
        }
    }
    files
}

/// Keeps source files met during a walk.
///
/// Symlinked files are kept like regular ones, and so are dangling links so
/// that reading them surfaces as an `IOError` finding. Links to directories
/// are neither kept nor walked.
fn is_walked_source(entry: &DirEntry) -> bool {
    if !has_source_extension(entry.path()) {
        return false;
    }
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir())
}

/// Runs a fixed set of rules over files and hands the findings to a reporter.
///
/// The checker holds no state between runs besides its configuration.
pub struct QualityChecker {
    rules: Vec<Box<dyn Rule>>,
    reporter: Box<dyn Reporter>,
}

impl QualityChecker {
    /// Creates a checker. Rules are applied in the given order.
    pub fn new(rules: Vec<Box<dyn Rule>>, reporter: Box<dyn Reporter>) -> Self {
        Self { rules, reporter }
    }

    /// Checks every source file under `targets`, reports the findings once
    /// and returns how many there were.
    ///
    /// Files are read and checked in parallel with `rayon`; results are
    /// collected in discovery order, so findings are grouped by file, then
    /// by rule, then by line.
    pub fn run<P: AsRef<Path>>(&mut self, targets: &[P]) -> Result<usize> {
        let files = discover_files(targets);
        info!(
            "checking {} files with {} rules",
            files.len(),
            self.rules.len()
        );

        let rules = &self.rules;
        let findings: Vec<Finding> = files
            .par_iter()
            .map(|path| check_file(rules, path))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect();

        self.reporter.report(&findings)?;
        Ok(findings.len())
    }
}

/// Reads one file and applies every rule to it.
///
/// A file that cannot be read yields a single `IOError` finding instead.
fn check_file(rules: &[Box<dyn Rule>], path: &Path) -> Vec<Finding> {
    let file_path = path.display().to_string();
    debug!("checking {}", file_path);

    let content = match read_source(path) {
        Ok(content) => content,
        Err(err) => {
            warn!("{}", err);
            let reason = match err {
                QualityError::Read { source, .. } => source.to_string(),
                other => other.to_string(),
            };
            return vec![Finding::new(
                file_path,
                1,
                format!("Could not read file: {}", reason),
                IO_ERROR_RULE,
            )
            .with_severity(Severity::High)];
        }
    };

    rules
        .iter()
        .flat_map(|rule| rule.check(&file_path, &content))
        .collect()
}
