//! Boundary loop tracing and cap filling.

use hashbrown::{HashMap, HashSet};
use mesh_core::{Point3, TriMesh, Vector3};
use tracing::{debug, warn};

use crate::adjacency::EdgeMap;
use crate::error::{SealError, SealResult};

/// A closed chain of boundary vertices.
///
/// Vertices are ordered along the directed boundary (the direction the
/// adjacent faces wind), so a cap built on the *reversed* loop faces outward.
#[derive(Debug, Clone)]
pub struct BoundaryLoop {
    /// Ordered vertex indices around the loop.
    pub vertices: Vec<u32>,
}

impl BoundaryLoop {
    /// Number of edges (equal to the number of vertices).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.len()
    }
}

/// Trace all boundary edges of `mesh` into closed loops.
///
/// Boundary edges are kept directed as they appear in the face windings; a
/// manifold-with-boundary mesh gives every boundary vertex exactly one
/// outgoing edge, so each chain closes into a loop.
///
/// # Errors
///
/// Returns [`SealError::UnclosedBoundary`] when a chain dead-ends, which
/// means the surface is non-manifold along its rim.
pub fn trace_boundary_loops(mesh: &TriMesh) -> SealResult<Vec<BoundaryLoop>> {
    let edges = EdgeMap::build(&mesh.faces);

    // Directed boundary edges, keyed by their start vertex.
    let mut successor: HashMap<u32, u32> = HashMap::new();
    for face in &mesh.faces {
        for (a, b) in [
            (face[0], face[1]),
            (face[1], face[2]),
            (face[2], face[0]),
        ] {
            if edges.face_count(a, b) == 1 {
                successor.insert(a, b);
            }
        }
    }

    if successor.is_empty() {
        return Ok(Vec::new());
    }

    debug!("tracing {} directed boundary edges", successor.len());

    let mut loops = Vec::new();
    let mut visited: HashSet<u32> = HashSet::new();

    let mut starts: Vec<u32> = successor.keys().copied().collect();
    starts.sort_unstable();
    for start in starts {
        if visited.contains(&start) {
            continue;
        }

        let mut chain = Vec::new();
        let mut current = start;
        loop {
            visited.insert(current);
            chain.push(current);

            let Some(&next) = successor.get(&current) else {
                return Err(SealError::UnclosedBoundary { start });
            };
            if next == start {
                break;
            }
            if visited.contains(&next) {
                // Reached a vertex of another chain without closing.
                return Err(SealError::UnclosedBoundary { start });
            }
            current = next;
        }

        if chain.len() >= 3 {
            loops.push(BoundaryLoop { vertices: chain });
        }
    }

    debug!(
        "found {} boundary loops, sizes {:?}",
        loops.len(),
        loops.iter().map(BoundaryLoop::edge_count).collect::<Vec<_>>()
    );

    Ok(loops)
}

/// Close every open boundary of `mesh` with a single filling polygon.
///
/// Each boundary loop is triangulated in place by ear clipping; no vertices
/// are added. Returns the number of loops sealed.
///
/// # Errors
///
/// Returns an error when the mesh is empty, a boundary chain does not close,
/// or a loop cannot be triangulated.
pub fn seal_boundaries(mesh: &mut TriMesh) -> SealResult<usize> {
    if mesh.is_empty() {
        return Err(SealError::EmptyMesh);
    }

    let loops = trace_boundary_loops(mesh)?;
    if loops.is_empty() {
        return Ok(0);
    }

    let mut new_faces = Vec::new();
    for boundary in &loops {
        // Reversing the directed boundary makes the cap wind outward.
        let mut rim = boundary.vertices.clone();
        rim.reverse();

        let faces = triangulate_rim(mesh, &rim);
        if faces.is_empty() {
            return Err(SealError::FillFailed {
                edges: boundary.edge_count(),
                reason: "ear clipping produced no triangles".to_string(),
            });
        }
        new_faces.extend(faces);
    }

    mesh.faces.extend(new_faces);
    debug!("sealed {} boundary loops", loops.len());
    Ok(loops.len())
}

/// Ear-clipping triangulation of one rim polygon.
fn triangulate_rim(mesh: &TriMesh, rim: &[u32]) -> Vec<[u32; 3]> {
    let n = rim.len();
    if n < 3 {
        return Vec::new();
    }

    let positions: Vec<Point3<f64>> = rim
        .iter()
        .map(|&i| mesh.vertices[i as usize].position)
        .collect();
    let rim_normal = polygon_normal(&positions);

    let mut remaining: Vec<usize> = (0..n).collect();
    let mut faces = Vec::with_capacity(n - 2);

    while remaining.len() > 3 {
        let mut clipped = false;
        for i in 0..remaining.len() {
            let prev = remaining[(i + remaining.len() - 1) % remaining.len()];
            let curr = remaining[i];
            let next = remaining[(i + 1) % remaining.len()];

            if is_ear(&positions, &remaining, prev, curr, next, &rim_normal) {
                faces.push([rim[prev], rim[curr], rim[next]]);
                remaining.remove(i);
                clipped = true;
                break;
            }
        }
        if !clipped {
            warn!(
                "ear clipping stuck with {} rim vertices, falling back to fan",
                remaining.len()
            );
            break;
        }
    }

    if remaining.len() == 3 {
        faces.push([rim[remaining[0]], rim[remaining[1]], rim[remaining[2]]]);
    } else {
        // Fan from the first remaining vertex.
        for w in 1..remaining.len() - 1 {
            faces.push([
                rim[remaining[0]],
                rim[remaining[w]],
                rim[remaining[w + 1]],
            ]);
        }
    }

    faces
}

/// Polygon normal by Newell's method.
fn polygon_normal(points: &[Point3<f64>]) -> Vector3<f64> {
    let mut normal = Vector3::zeros();
    for i in 0..points.len() {
        let p = points[i];
        let q = points[(i + 1) % points.len()];
        normal.x += (p.y - q.y) * (p.z + q.z);
        normal.y += (p.z - q.z) * (p.x + q.x);
        normal.z += (p.x - q.x) * (p.y + q.y);
    }
    normal.try_normalize(f64::EPSILON).unwrap_or(Vector3::z())
}

fn is_ear(
    positions: &[Point3<f64>],
    remaining: &[usize],
    prev: usize,
    curr: usize,
    next: usize,
    rim_normal: &Vector3<f64>,
) -> bool {
    let a = positions[prev];
    let b = positions[curr];
    let c = positions[next];

    // Convexity: the candidate triangle must wind with the rim.
    let tri_normal = (b - a).cross(&(c - a));
    if tri_normal.norm() < f64::EPSILON || tri_normal.dot(rim_normal) <= 0.0 {
        return false;
    }

    // No other rim vertex may sit inside the candidate ear.
    remaining
        .iter()
        .filter(|&&idx| idx != prev && idx != curr && idx != next)
        .all(|&idx| !point_in_triangle(&positions[idx], &a, &b, &c, rim_normal))
}

/// Point-in-triangle test in the plane most orthogonal to `normal`.
fn point_in_triangle(
    p: &Point3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    normal: &Vector3<f64>,
) -> bool {
    let drop_axis = {
        let abs = normal.abs();
        if abs.z >= abs.x && abs.z >= abs.y {
            2
        } else if abs.y >= abs.x {
            1
        } else {
            0
        }
    };
    let flat = |p: &Point3<f64>| match drop_axis {
        0 => (p.y, p.z),
        1 => (p.x, p.z),
        _ => (p.x, p.y),
    };

    let (p2, a2, b2, c2) = (flat(p), flat(a), flat(b), flat(c));
    let orient = |u: (f64, f64), v: (f64, f64), w: (f64, f64)| {
        (u.0 - w.0) * (v.1 - w.1) - (v.0 - w.0) * (u.1 - w.1)
    };

    let d0 = orient(p2, a2, b2);
    let d1 = orient(p2, b2, c2);
    let d2 = orient(p2, c2, a2);
    let any_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
    let any_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
    !(any_neg && any_pos)
}
