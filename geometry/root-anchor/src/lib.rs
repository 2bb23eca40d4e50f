//! Nerve-root entry-point relocation.
//!
//! Annotated nerve-root lines start near, but not on, the cord: the first
//! markup floats wherever the annotator clicked. Lofting a tube from there
//! leaves the root visually detached from the cord surface. This crate
//! anchors each line:
//!
//! 1. the cord surface is read back from its exported STL and probed at
//!    subdivision depth 3,
//! 2. the line's entry point is projected to the closest surface vertex,
//! 3. the cord's axial cross-section through that vertex gives a centroid,
//! 4. an *inner point* is placed 75% of the way from the closest vertex
//!    toward the centroid,
//! 5. `[inner, closest]` are prepended to the line.
//!
//! The prepended pair makes the lofted tube emerge from inside the cord and
//! pass through the true surface point, instead of hovering at the markup.
//!
//! Reading the cord from disk rather than reusing the in-memory mesh is
//! deliberate: the pipeline hands surfaces between stages as files, and the
//! relocation must see exactly what was exported.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod anchor;
mod error;

pub use anchor::{anchor_line, anchor_lines, CORD_SUBDIVISION_DEPTH, INNER_POINT_FRACTION};
pub use error::{AnchorError, AnchorResult};
