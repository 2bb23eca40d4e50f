//! Domain value types for spinal annotation markups.
//!
//! One participant's annotation set breaks down into:
//!
//! - [`SectionLoop`] / [`LoopStack`] - closed cross-section curves of the
//!   dura or cord, stacked by descending height
//! - [`RootLine`] / [`RootLineSet`] - nerve-root centerlines, one per
//!   segment and [`Side`], ending in the ganglion exit point
//!
//! Sides are explicit tags rather than an index parity convention, but the
//! flattened ordering `2 * segment_index + side` is still an invariant of
//! [`RootLineSet`]: the tube builder pairs names and radii by walking the
//! set in that order.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod loops;
mod roots;
mod side;

pub use loops::{LoopStack, SectionLoop};
pub use roots::{RootLine, RootLineSet};
pub use side::Side;
