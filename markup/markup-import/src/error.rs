//! Error types for annotation import.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for annotation import.
pub type ImportResult<T> = Result<T, ImportError>;

/// Errors that can occur while loading a participant's annotations.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The annotation base directory does not exist.
    #[error("annotation base path does not exist: {path}")]
    BasePathMissing {
        /// The missing base path.
        path: PathBuf,
    },

    /// No directory under the base matches the participant id.
    #[error("no annotation directory named {participant:?} under {base}")]
    ParticipantNotFound {
        /// Participant id searched for.
        participant: String,
        /// Base path searched.
        base: PathBuf,
    },

    /// A file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// Offending file.
        path: PathBuf,
        /// The OS error.
        source: std::io::Error,
    },

    /// A markup file is not valid JSON.
    #[error("malformed markup JSON in {path}: {source}")]
    Json {
        /// Offending file.
        path: PathBuf,
        /// Parser error.
        source: serde_json::Error,
    },

    /// A markup file carries no markup entries.
    #[error("markup file {path} contains no markups")]
    NoMarkups {
        /// Offending file.
        path: PathBuf,
    },

    /// A ganglion file does not reduce to exactly one exit point.
    #[error("ganglion file {path} yields {count} exit points, expected exactly 1")]
    MalformedGanglion {
        /// Offending file.
        path: PathBuf,
        /// Exit points left after dropping the leading marker.
        count: usize,
    },
}

impl ImportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
