//! Error types for structure scanning.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while generating a structure rendering.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The source path is missing, not a directory, or unreadable.
    /// Raised before any output is produced.
    #[error("Source path {path} is not a readable directory: {message}")]
    InvalidSource { path: PathBuf, message: String },

    /// The output file could not be created or written.
    #[error("Failed to write output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create an invalid-source error for the given path.
    pub fn invalid_source(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::InvalidSource {
            path: path.into(),
            message: message.into(),
        }
    }
}
