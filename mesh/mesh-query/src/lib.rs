//! Geometric queries against a reconstructed surface.
//!
//! The nerve-root repositioner needs two questions answered about the cord
//! surface: which surface point is closest to a given annotation point, and
//! what the cord's cross-section looks like at that height. [`SurfaceProbe`]
//! wraps a mesh for both:
//!
//! - the mesh is upsampled by positional midpoint subdivision so vertex
//!   queries resolve finer than the lofted resolution,
//! - every vertex goes into a KD-tree for nearest-point lookup,
//! - planar slices intersect the plane with every triangle and average the
//!   crossing points into a centroid.
//!
//! # Example
//!
//! ```
//! use mesh_core::{TriMesh, Vertex};
//! use mesh_query::{Axis, SurfaceProbe};
//! use nalgebra::Point3;
//!
//! let mut mesh = TriMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! let probe = SurfaceProbe::from_mesh(&mesh, 0).unwrap();
//! let nearest = probe.nearest_vertex(&Point3::new(1.1, -0.1, 0.0));
//! assert!((nearest.x - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod probe;
mod refine;
mod slice;

pub use error::{QueryError, QueryResult};
pub use probe::SurfaceProbe;
pub use refine::subdivide_midpoint;
pub use slice::{Axis, PlanarSlice};
