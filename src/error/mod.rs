//! Error handling for `ed-synth`.

use std::io;
use std::path::{Path, PathBuf};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;

pub mod util;

/// Specialized error type for generation, persistence and filtering
#[derive(Debug, thiserror::Error)]
pub enum EdSynthError {
    /// Error opening, creating or writing a file
    #[error("IO error{}: {message}", path_suffix(.path))]
    Io {
        /// What was being attempted
        message: String,
        /// The file or directory involved, when known
        path: Option<PathBuf>,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },

    /// Error building or slicing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Error reading or writing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error converting records to or from a serialized form
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid input such as a malformed month key or day range
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid generator configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid sampling parameters (weights, distribution parameters)
    #[error("Sampling error: {0}")]
    Sampling(String),

    /// Anything else
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn path_suffix(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" ({})", p.display()))
        .unwrap_or_default()
}

impl EdSynthError {
    /// Wrap an IO error with a message and the path it concerns
    pub fn io(message: impl Into<String>, path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn sampling(message: impl Into<String>) -> Self {
        Self::Sampling(message.into())
    }
}

impl From<io::Error> for EdSynthError {
    fn from(error: io::Error) -> Self {
        Self::Io {
            message: "unexpected IO failure".to_string(),
            path: None,
            source: error,
        }
    }
}

impl From<serde_arrow::Error> for EdSynthError {
    fn from(error: serde_arrow::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

impl From<serde_json::Error> for EdSynthError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Result type for `ed-synth` operations
pub type Result<T> = std::result::Result<T, EdSynthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display_includes_path() {
        let err = EdSynthError::io(
            "Failed to create output file",
            "/tmp/out/visits.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let text = err.to_string();
        assert!(text.contains("/tmp/out/visits.csv"));
        assert!(text.contains("Failed to create output file"));
    }

    #[test]
    fn bare_io_error_has_no_path() {
        let err: EdSynthError = io::Error::other("boom").into();
        assert_eq!(err.to_string(), "IO error: unexpected IO failure");
    }
}
