use std::io;
use thiserror::Error;

/// Error type for the I/O-facing edges of the crate.
///
/// The pure ingestion core never fails: malformed input yields best-effort
/// partial results. Errors only arise when reading files, writing CSV
/// output, or recovering serialized bytes.
#[derive(Error, Debug)]
pub enum WrangleError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV serialization error.
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// Serialized output was not valid UTF-8.
    #[error("invalid UTF-8 in serialized output: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for ingestion I/O operations.
pub type Result<T> = std::result::Result<T, WrangleError>;
