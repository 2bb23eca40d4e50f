//! Positional midpoint subdivision.

use hashbrown::HashMap;
use mesh_core::{TriMesh, Vertex};
use tracing::debug;

/// Subdivide each triangle into four by splitting every edge at its
/// midpoint, `depth` times.
///
/// Purely positional: existing vertices stay where they are, so queries
/// against the refined mesh land on the original surface. Shared edges get
/// one shared midpoint, keeping the refined mesh manifold.
///
/// # Example
///
/// ```
/// use mesh_core::{TriMesh, Vertex};
/// use mesh_query::subdivide_midpoint;
///
/// let mut mesh = TriMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.5, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// let refined = subdivide_midpoint(&mesh, 2);
/// assert_eq!(refined.face_count(), 16);
/// ```
#[must_use]
pub fn subdivide_midpoint(mesh: &TriMesh, depth: usize) -> TriMesh {
    let mut current = mesh.clone();
    for _ in 0..depth {
        current = split_once(&current);
    }
    if depth > 0 {
        debug!(
            from_faces = mesh.face_count(),
            to_faces = current.face_count(),
            depth,
            "midpoint subdivision"
        );
    }
    current
}

fn split_once(mesh: &TriMesh) -> TriMesh {
    let mut vertices = mesh.vertices.clone();
    let mut faces = Vec::with_capacity(mesh.faces.len() * 4);
    let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();

    for &[v0, v1, v2] in &mesh.faces {
        let m01 = midpoint(v0, v1, &mut vertices, &mut midpoints);
        let m12 = midpoint(v1, v2, &mut vertices, &mut midpoints);
        let m20 = midpoint(v2, v0, &mut vertices, &mut midpoints);

        faces.push([v0, m01, m20]);
        faces.push([v1, m12, m01]);
        faces.push([v2, m20, m12]);
        faces.push([m01, m12, m20]);
    }

    TriMesh::from_parts(vertices, faces)
}

#[allow(clippy::cast_possible_truncation)]
// Mesh indices are u32; subdivision depth is fixed and small
fn midpoint(
    a: u32,
    b: u32,
    vertices: &mut Vec<Vertex>,
    midpoints: &mut HashMap<(u32, u32), u32>,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    if let Some(&idx) = midpoints.get(&key) {
        return idx;
    }

    let pa = vertices[a as usize].position;
    let pb = vertices[b as usize].position;
    let idx = vertices.len() as u32;
    vertices.push(Vertex::from_coords(
        (pa.x + pb.x) * 0.5,
        (pa.y + pb.y) * 0.5,
        (pa.z + pb.z) * 0.5,
    ));
    midpoints.insert(key, idx);
    idx
}
