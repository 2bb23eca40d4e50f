//! Tube sweeping.

use mesh_core::{Point3, TriMesh, Vertex};
use tracing::debug;

use crate::error::{TubeError, TubeResult};
use crate::frame::transport_frames;

/// Sweep an open circular tube along a centerline.
///
/// One ring of `segments` vertices is placed at every centerline point in
/// that point's transported frame, all at the constant `radius`; consecutive
/// rings are joined with quad strips. The two end rims stay open so the
/// caller can cap them alongside other surfaces.
///
/// # Errors
///
/// Returns an error for fewer than 2 points, a non-positive or non-finite
/// radius, or fewer than 3 ring segments.
///
/// # Example
///
/// ```
/// use mesh_tube::sweep_tube;
/// use nalgebra::Point3;
///
/// let line = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 10.0)];
/// let tube = sweep_tube(&line, 0.5, 16).unwrap();
///
/// assert_eq!(tube.vertex_count(), 2 * 16);
/// assert_eq!(tube.face_count(), 16 * 2);
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
// Mesh indices are u32 and ring segment counts are tiny
pub fn sweep_tube(
    centerline: &[Point3<f64>],
    radius: f64,
    segments: usize,
) -> TubeResult<TriMesh> {
    if centerline.len() < 2 {
        return Err(TubeError::TooFewPoints(centerline.len()));
    }
    if radius <= 0.0 || !radius.is_finite() {
        return Err(TubeError::InvalidRadius(radius));
    }
    if segments < 3 {
        return Err(TubeError::TooFewSegments(segments));
    }

    let frames = transport_frames(centerline);
    let rings = centerline.len();

    debug!(rings, segments, radius, "sweeping tube");

    let mut mesh = TriMesh::with_capacity(rings * segments, (rings - 1) * segments * 2);

    for (point, frame) in centerline.iter().zip(&frames) {
        for k in 0..segments {
            let theta = 2.0 * std::f64::consts::PI * k as f64 / segments as f64;
            let radial = frame.normal * theta.cos() + frame.binormal * theta.sin();
            mesh.vertices.push(Vertex::with_normal(
                point + radial * radius,
                radial,
            ));
        }
    }

    for ring in 0..rings - 1 {
        for k in 0..segments {
            let a = (ring * segments + k) as u32;
            let b = (ring * segments + (k + 1) % segments) as u32;
            let c = ((ring + 1) * segments + k) as u32;
            let d = ((ring + 1) * segments + (k + 1) % segments) as u32;

            mesh.faces.push([a, c, b]);
            mesh.faces.push([b, c, d]);
        }
    }

    Ok(mesh)
}
