use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading sources or emitting a report.
#[derive(Debug, Error)]
pub enum QualityError {
    /// A source file could not be read. The checker turns this into an `IOError` finding.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create report directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write report output")]
    Console(#[source] io::Error),

    #[error("failed to serialize findings")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T, E = QualityError> = std::result::Result<T, E>;
