//! Error types for STL I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for STL I/O.
pub type StlResult<T> = Result<T, StlError>;

/// Errors that can occur reading or writing STL files.
#[derive(Debug, Error)]
pub enum StlError {
    /// The file does not exist.
    #[error("STL file not found: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// An underlying I/O failure.
    #[error("STL I/O failure on {path}: {source}")]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// The OS error.
        source: std::io::Error,
    },

    /// The file content is not valid STL.
    #[error("malformed STL in {path}: {reason}")]
    Malformed {
        /// Offending file.
        path: PathBuf,
        /// What was wrong.
        reason: String,
    },
}

impl StlError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
