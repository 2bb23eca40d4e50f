//! Error types for loft operations.

use thiserror::Error;

/// Result type for loft operations.
pub type LoftResult<T> = Result<T, LoftError>;

/// Errors that can occur while lofting a loop stack.
#[derive(Debug, Error)]
pub enum LoftError {
    /// A stack needs at least two loops to bridge.
    #[error("loop stack needs at least 2 loops, got {0}")]
    TooFewLoops(usize),

    /// A loop has too few points to form a closed section.
    #[error("loop {index} has {points} points, need at least 3")]
    DegenerateLoop {
        /// Index of the loop within the stack.
        index: usize,
        /// Number of points it has.
        points: usize,
    },

    /// Adjacent loops disagree on ring point count.
    #[error("loop {index} samples to {actual} ring points, expected {expected} like the first loop")]
    RingCountMismatch {
        /// Index of the offending loop.
        index: usize,
        /// Ring size of the first loop.
        expected: usize,
        /// Ring size of the offending loop.
        actual: usize,
    },

    /// A loop winds the opposite way from the first loop.
    #[error("loop {index} winds opposite to the first loop; bridge correspondence would twist")]
    WindingMismatch {
        /// Index of the offending loop.
        index: usize,
    },

    /// Capping the lofted walls failed.
    #[error("failed to cap lofted surface: {0}")]
    Seal(#[from] mesh_seal::SealError),
}
