//! Error types for sealing operations.

use thiserror::Error;

/// Result type for sealing operations.
pub type SealResult<T> = Result<T, SealError>;

/// Errors that can occur while closing mesh boundaries.
#[derive(Debug, Error)]
pub enum SealError {
    /// Mesh has no faces to seal.
    #[error("mesh is empty")]
    EmptyMesh,

    /// A boundary loop could not be triangulated.
    #[error("failed to fill boundary loop with {edges} edges: {reason}")]
    FillFailed {
        /// Edge count of the offending loop.
        edges: usize,
        /// Why triangulation failed.
        reason: String,
    },

    /// A boundary edge chain never closed back on itself.
    #[error("open boundary chain starting at vertex {start} does not close")]
    UnclosedBoundary {
        /// Vertex index where the trace started.
        start: u32,
    },
}
