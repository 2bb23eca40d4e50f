//! Error types for tube lofting.

use thiserror::Error;

/// Result type for tube lofting.
pub type TubeResult<T> = Result<T, TubeError>;

/// Errors that can occur while sweeping a tube.
#[derive(Debug, Error)]
pub enum TubeError {
    /// A centerline needs at least two points.
    #[error("centerline needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// Radius must be positive and finite.
    #[error("invalid tube radius: {0}")]
    InvalidRadius(f64),

    /// A ring needs at least three sides.
    #[error("ring needs at least 3 segments, got {0}")]
    TooFewSegments(usize),
}
