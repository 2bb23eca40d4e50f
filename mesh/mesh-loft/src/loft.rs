//! Bridging stacked rings into a watertight surface.

use mesh_core::{Point3, TriMesh, Vertex};
use mesh_seal::seal_boundaries;
use tracing::debug;

use crate::error::{LoftError, LoftResult};
use crate::ring::{cardinal_segment, ring_winding, sample_ring};

/// Parameters for loop-stack lofting.
#[derive(Debug, Clone)]
pub struct LoftParams {
    /// Ring samples per loop control point (1 = ring vertices on the
    /// annotated points).
    pub samples_per_point: usize,
    /// Intermediate cross-sections inserted between consecutive loops.
    pub bridge_cuts: usize,
}

impl Default for LoftParams {
    fn default() -> Self {
        Self {
            samples_per_point: 1,
            bridge_cuts: 6,
        }
    }
}

impl LoftParams {
    /// Set the ring sampling density.
    #[must_use]
    pub const fn with_samples_per_point(mut self, samples_per_point: usize) -> Self {
        self.samples_per_point = samples_per_point;
        self
    }

    /// Set the number of bridge cuts.
    #[must_use]
    pub const fn with_bridge_cuts(mut self, bridge_cuts: usize) -> Self {
        self.bridge_cuts = bridge_cuts;
        self
    }
}

/// Loft a stack of closed cross-section loops into a watertight surface.
///
/// Loops must be supplied in stacking order (the annotation loader orders
/// them by descending height). Each loop is sampled into a ring, consecutive
/// rings are bridged with `bridge_cuts` interpolated cross-sections, and the
/// top and bottom rims are capped.
///
/// The bridge correspondence is positional: ring vertex `j` connects to ring
/// vertex `j` of the next loop. That is only sensible when all rings share
/// one point count and winding, which is validated before any geometry is
/// built.
///
/// # Errors
///
/// Returns an error when the stack has fewer than two loops, a loop is
/// degenerate, ring sizes or windings are inconsistent, or capping fails.
pub fn loft_loop_stack<L>(loops: &[L], params: &LoftParams) -> LoftResult<TriMesh>
where
    L: AsRef<[Point3<f64>]>,
{
    if loops.len() < 2 {
        return Err(LoftError::TooFewLoops(loops.len()));
    }
    for (index, points) in loops.iter().enumerate() {
        if points.as_ref().len() < 3 {
            return Err(LoftError::DegenerateLoop {
                index,
                points: points.as_ref().len(),
            });
        }
    }

    let rings: Vec<Vec<Point3<f64>>> = loops
        .iter()
        .map(|points| sample_ring(points.as_ref(), params.samples_per_point.max(1)))
        .collect();

    validate_rings(&rings)?;

    let rows = bridge_rows(&rings, params.bridge_cuts);
    let ring_size = rings[0].len();

    debug!(
        loops = loops.len(),
        ring_size,
        rows = rows.len(),
        "lofting loop stack"
    );

    let mut mesh = wall_mesh(&rows, ring_size);
    seal_boundaries(&mut mesh)?;
    Ok(mesh)
}

/// Check that all rings share one size and winding orientation.
fn validate_rings(rings: &[Vec<Point3<f64>>]) -> LoftResult<()> {
    let expected = rings[0].len();
    let reference = ring_winding(&rings[0]);

    for (index, ring) in rings.iter().enumerate().skip(1) {
        if ring.len() != expected {
            return Err(LoftError::RingCountMismatch {
                index,
                expected,
                actual: ring.len(),
            });
        }
        if ring_winding(ring) * reference < 0.0 {
            return Err(LoftError::WindingMismatch { index });
        }
    }
    Ok(())
}

/// Expand rings into the full row sequence: every original ring plus `cuts`
/// interpolated cross-sections in each gap.
///
/// Each vertex column is blended with a cardinal segment through its
/// neighbors up and down the stack, so intermediate sections follow the
/// surface rather than a straight line between rings.
fn bridge_rows(rings: &[Vec<Point3<f64>>], cuts: usize) -> Vec<Vec<Point3<f64>>> {
    let n = rings.len();
    let ring_size = rings[0].len();
    let mut rows = Vec::with_capacity(n + cuts * (n - 1));

    for g in 0..n - 1 {
        rows.push(rings[g].clone());

        let above = if g == 0 { &rings[0] } else { &rings[g - 1] };
        let below = if g + 2 < n { &rings[g + 2] } else { &rings[n - 1] };

        for cut in 1..=cuts {
            #[allow(clippy::cast_precision_loss)]
            let t = cut as f64 / (cuts + 1) as f64;
            let mut row = Vec::with_capacity(ring_size);
            for j in 0..ring_size {
                row.push(cardinal_segment(
                    above[j],
                    rings[g][j],
                    rings[g + 1][j],
                    below[j],
                    t,
                ));
            }
            rows.push(row);
        }
    }
    rows.push(rings[n - 1].clone());

    rows
}

/// Triangulate quad strips between consecutive rows.
#[allow(clippy::cast_possible_truncation)]
// Mesh indices are u32; anatomy surfaces stay far below that
fn wall_mesh(rows: &[Vec<Point3<f64>>], ring_size: usize) -> TriMesh {
    let mut mesh = TriMesh::with_capacity(
        rows.len() * ring_size,
        (rows.len() - 1) * ring_size * 2,
    );

    for row in rows {
        for &p in row {
            mesh.vertices.push(Vertex::new(p));
        }
    }

    for k in 0..rows.len() - 1 {
        for j in 0..ring_size {
            let a = (k * ring_size + j) as u32;
            let b = (k * ring_size + (j + 1) % ring_size) as u32;
            let c = ((k + 1) * ring_size + j) as u32;
            let d = ((k + 1) * ring_size + (j + 1) % ring_size) as u32;

            mesh.faces.push([a, c, b]);
            mesh.faces.push([b, c, d]);
        }
    }

    mesh
}
