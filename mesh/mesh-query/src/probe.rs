//! The surface probe.

use kiddo::{KdTree, SquaredEuclidean};
use mesh_core::{Point3, TriMesh};
use tracing::debug;

use crate::error::{QueryError, QueryResult};
use crate::refine::subdivide_midpoint;
use crate::slice::{Axis, PlanarSlice};

/// A read-only geometric index over a surface mesh.
///
/// Construction upsamples the mesh by midpoint subdivision and indexes every
/// vertex in a KD-tree; the probe then answers nearest-vertex and planar
/// slice queries without touching the original mesh again.
pub struct SurfaceProbe {
    mesh: TriMesh,
    tree: KdTree<f64, 3>,
}

impl SurfaceProbe {
    /// Build a probe over `mesh`, upsampled `subdivision_depth` times.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyMesh`] when the mesh has no vertices; a
    /// nearest-point query over nothing has no answer.
    pub fn from_mesh(mesh: &TriMesh, subdivision_depth: usize) -> QueryResult<Self> {
        if mesh.vertices.is_empty() {
            return Err(QueryError::EmptyMesh);
        }

        let refined = subdivide_midpoint(mesh, subdivision_depth);

        let mut tree: KdTree<f64, 3> = KdTree::new();
        for (i, v) in refined.vertices.iter().enumerate() {
            let p = &v.position;
            tree.add(&[p.x, p.y, p.z], i as u64);
        }

        debug!(
            vertices = refined.vertex_count(),
            subdivision_depth,
            "surface probe ready"
        );

        Ok(Self {
            mesh: refined,
            tree,
        })
    }

    /// The upsampled mesh the probe indexes.
    #[must_use]
    pub fn mesh(&self) -> &TriMesh {
        &self.mesh
    }

    /// The indexed vertex geometrically closest to `query`.
    #[must_use]
    pub fn nearest_vertex(&self, query: &Point3<f64>) -> Point3<f64> {
        let found = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y, query.z]);
        self.mesh.vertices[found.item as usize].position
    }

    /// Distance from `query` to the nearest indexed vertex.
    #[must_use]
    pub fn nearest_distance(&self, query: &Point3<f64>) -> f64 {
        let found = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[query.x, query.y, query.z]);
        found.distance.sqrt()
    }

    /// Slice the surface with an axis-aligned plane through `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptySlice`] when the plane misses the surface.
    pub fn axis_slice(&self, axis: Axis, origin: Point3<f64>) -> QueryResult<PlanarSlice> {
        PlanarSlice::of_mesh(&self.mesh, axis, origin).ok_or(QueryError::EmptySlice {
            axis,
            origin: [origin.x, origin.y, origin.z],
        })
    }
}

impl std::fmt::Debug for SurfaceProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SurfaceProbe")
            .field("vertices", &self.mesh.vertex_count())
            .field("faces", &self.mesh.face_count())
            .finish()
    }
}
