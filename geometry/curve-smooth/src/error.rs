//! Error types for spline smoothing.

use thiserror::Error;

/// Result type for spline smoothing.
pub type SmoothResult<T> = Result<T, SmoothError>;

/// Errors that can occur while fitting or sampling a smoothing spline.
#[derive(Debug, Error)]
pub enum SmoothError {
    /// A cubic fit needs at least degree + 1 points.
    #[error("spline fit needs at least {required} points, got {actual}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        actual: usize,
    },

    /// A coordinate was NaN or infinite.
    #[error("line contains a non-finite coordinate at point {index}")]
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
    },

    /// The smoothing factor must be non-negative and finite.
    #[error("invalid smoothing factor: {0}")]
    InvalidSmoothing(f64),

    /// Resampling needs at least two output points.
    #[error("resample count must be at least 2, got {0}")]
    InvalidSampleCount(usize),

    /// Consecutive points coincide, so no chord parameterization exists.
    #[error("degenerate line: {reason}")]
    Degenerate {
        /// Description of the degeneracy.
        reason: String,
    },

    /// The fitting system could not be solved.
    #[error("spline system is singular: {reason}")]
    Singular {
        /// Description of the numerical failure.
        reason: String,
    },
}
