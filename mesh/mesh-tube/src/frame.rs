//! Rotation-minimizing frames along a centerline.

use nalgebra::{Point3, Rotation3, Vector3};

/// An orthonormal frame at one centerline point.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    /// Forward direction along the centerline.
    pub tangent: Vector3<f64>,
    /// First ring axis, perpendicular to the tangent.
    pub normal: Vector3<f64>,
    /// Second ring axis, `tangent x normal`.
    pub binormal: Vector3<f64>,
}

impl Frame {
    /// Build an initial frame from a tangent, picking an arbitrary but
    /// stable perpendicular for the normal.
    #[must_use]
    pub fn from_tangent(tangent: Vector3<f64>) -> Self {
        let tangent = tangent.try_normalize(f64::EPSILON).unwrap_or(Vector3::z());

        // Cross against the world axis least aligned with the tangent.
        let pick = {
            let abs = tangent.abs();
            if abs.x <= abs.y && abs.x <= abs.z {
                Vector3::x()
            } else if abs.y <= abs.z {
                Vector3::y()
            } else {
                Vector3::z()
            }
        };
        let normal = tangent
            .cross(&pick)
            .try_normalize(f64::EPSILON)
            .unwrap_or(Vector3::y());

        Self {
            tangent,
            normal,
            binormal: tangent.cross(&normal),
        }
    }

    /// Transport this frame onto a new tangent with minimal rotation.
    #[must_use]
    pub fn transported_to(&self, tangent: Vector3<f64>) -> Self {
        let tangent = tangent
            .try_normalize(f64::EPSILON)
            .unwrap_or(self.tangent);

        match Rotation3::rotation_between(&self.tangent, &tangent) {
            Some(rotation) => Self {
                tangent,
                normal: rotation * self.normal,
                binormal: rotation * self.binormal,
            },
            // Antiparallel tangents: the rotation is ambiguous, flip in place.
            None => Self {
                tangent,
                normal: -self.normal,
                binormal: -self.binormal,
            },
        }
    }
}

/// Compute a twist-free frame at every centerline point.
///
/// Tangents at interior points average the incoming and outgoing directions;
/// each frame is the previous one rotated onto the new tangent, so the ring
/// orientation never spins around the curve.
///
/// Returns an empty vector for fewer than two points.
#[must_use]
pub fn transport_frames(points: &[Point3<f64>]) -> Vec<Frame> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut frames = Vec::with_capacity(points.len());
    frames.push(Frame::from_tangent(points[1] - points[0]));

    for i in 1..points.len() {
        let tangent = if i + 1 < points.len() {
            (points[i] - points[i - 1]) + (points[i + 1] - points[i])
        } else {
            points[i] - points[i - 1]
        };
        let prev = frames[i - 1];
        frames.push(prev.transported_to(tangent));
    }

    frames
}
