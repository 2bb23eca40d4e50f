//! Error types for nerve-root anchoring.

use thiserror::Error;

/// Result type for nerve-root anchoring.
pub type AnchorResult<T> = Result<T, AnchorError>;

/// Errors that can occur while relocating nerve-root entry points.
#[derive(Debug, Error)]
pub enum AnchorError {
    /// The cord surface file could not be read.
    #[error("cord surface: {0}")]
    Surface(#[from] mesh_stl::StlError),

    /// The cord surface cannot answer queries (empty or malformed mesh).
    #[error("cord surface is degenerate: {0}")]
    DegenerateSurface(#[from] mesh_query::QueryError),

    /// A nerve line has no points to anchor.
    #[error("nerve line {line} has no entry point")]
    EmptyLine {
        /// Segment/side label of the offending line.
        line: String,
    },

    /// A per-line query failed (e.g. the axial slice missed the cord).
    #[error("relocating nerve line {line}: {source}")]
    Relocate {
        /// Segment/side label of the offending line.
        line: String,
        /// The underlying query failure.
        source: mesh_query::QueryError,
    },
}
