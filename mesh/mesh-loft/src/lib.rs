//! Closed surface lofting from stacked cross-section loops.
//!
//! The dura and the cord are annotated as stacks of closed cross-section
//! curves, one per axial level, ordered top to bottom. This crate turns such
//! a stack into one watertight surface:
//!
//! 1. each loop becomes a closed ring sampled from a cyclic cardinal spline
//!    through its control points (a smooth basis, so bridged walls carry no
//!    creases),
//! 2. consecutive rings are bridged with interpolated intermediate
//!    cross-sections (six cuts in the pipeline),
//! 3. the two remaining open rims (top and bottom) are capped by
//!    [`mesh_seal`].
//!
//! Ring compatibility is validated up front: every ring must share one point
//! count and one winding orientation, otherwise lofting fails fast with the
//! offending loop index instead of producing a tangled bridge.
//!
//! # Example
//!
//! ```
//! use mesh_loft::{loft_loop_stack, LoftParams};
//! use nalgebra::Point3;
//!
//! // Two square cross-sections stacked along Z.
//! let square = |z: f64| -> Vec<Point3<f64>> {
//!     vec![
//!         Point3::new(1.0, 1.0, z),
//!         Point3::new(-1.0, 1.0, z),
//!         Point3::new(-1.0, -1.0, z),
//!         Point3::new(1.0, -1.0, z),
//!     ]
//! };
//!
//! let mesh = loft_loop_stack(&[square(1.0), square(0.0)], &LoftParams::default()).unwrap();
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod loft;
mod ring;

pub use error::{LoftError, LoftResult};
pub use loft::{loft_loop_stack, LoftParams};
pub use ring::{ring_winding, sample_ring};
