//! Error types for surface queries.

use thiserror::Error;

/// Result type for surface queries.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur while querying a surface.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The surface has no vertices to query.
    #[error("surface mesh is empty")]
    EmptyMesh,

    /// A slicing plane missed the surface entirely.
    #[error("planar slice along {axis} at {origin:?} intersects no triangles")]
    EmptySlice {
        /// Slice plane normal axis.
        axis: crate::Axis,
        /// Plane origin coordinates.
        origin: [f64; 3],
    },
}
