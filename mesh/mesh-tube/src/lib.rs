//! Bevel tube meshes along centerline curves.
//!
//! Nerve roots are annotated as centerlines; after smoothing they are lofted
//! into circular tubes of a per-segment radius. This crate sweeps a ring of
//! vertices along the centerline using rotation-minimizing frames, producing
//! an *open* tube; the pipeline closes the two end rims with the same cap
//! filling it uses for the dura and cord surfaces.
//!
//! - [`Frame`], [`transport_frames`] - twist-free moving frames
//! - [`sweep_tube`] - the tube loft itself
//!
//! # Example
//!
//! ```
//! use mesh_tube::sweep_tube;
//! use nalgebra::Point3;
//!
//! let centerline = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(0.0, 0.0, 5.0),
//!     Point3::new(0.0, 1.0, 10.0),
//! ];
//!
//! let tube = sweep_tube(&centerline, 0.5, 16).unwrap();
//! assert_eq!(tube.vertex_count(), 3 * 16);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod frame;
mod tube;

pub use error::{TubeError, TubeResult};
pub use frame::{transport_frames, Frame};
pub use tube::sweep_tube;
