//! Core triangle mesh types for spinemesh.
//!
//! Everything downstream of the annotation loader works on one mesh
//! representation:
//!
//! - [`Vertex`] - a point in 3D space with an optional normal
//! - [`TriMesh`] - an indexed triangle mesh value object
//! - [`Triangle`] - a concrete triangle with vertex positions
//! - [`Bounds`] - axis-aligned bounding box
//!
//! # Units
//!
//! All coordinates are `f64` millimeters, matching the annotation markups.
//! The types themselves are unit-agnostic; a run must keep one scale.
//!
//! # Coordinate System
//!
//! Right-handed, Z up (superior). Cross-section loops lie roughly in XY
//! planes stacked along Z. Face winding is counter-clockwise when viewed
//! from outside; normals point outward by the right-hand rule.
//!
//! # Value Semantics
//!
//! A [`TriMesh`] is an explicit value passed between pipeline stages. No
//! stage mutates a shared scene; builders return new meshes and only the
//! export step touches the filesystem.
//!
//! # Example
//!
//! ```
//! use mesh_core::{TriMesh, Vertex, Point3};
//!
//! let mut mesh = TriMesh::new();
//! mesh.vertices.push(Vertex::new(Point3::new(0.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(1.0, 0.0, 0.0)));
//! mesh.vertices.push(Vertex::new(Point3::new(0.5, 1.0, 0.0)));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(!mesh.is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod mesh;
mod triangle;
mod vertex;

pub use mesh::{Bounds, TriMesh};
pub use triangle::Triangle;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
