//! Closed ring sampling from loop control points.

use nalgebra::Point3;

/// Evaluate a cardinal (Catmull-Rom) segment at parameter `t` in [0, 1].
pub(crate) fn cardinal_segment(
    p0: Point3<f64>,
    p1: Point3<f64>,
    p2: Point3<f64>,
    p3: Point3<f64>,
    t: f64,
) -> Point3<f64> {
    let t2 = t * t;
    let t3 = t2 * t;

    let c0 = p1.coords * 2.0;
    let c1 = (p2 - p0) * t;
    let c2 = (p0.coords * 2.0 - p1.coords * 5.0 + p2.coords * 4.0 - p3.coords) * t2;
    let c3 = (p1.coords * 3.0 - p0.coords - p2.coords * 3.0 + p3.coords) * t3;

    Point3::from((c0 + c1 + c2 + c3) * 0.5)
}

/// Sample a closed cardinal spline through `points`.
///
/// The curve is cyclic: every control point gets one spline segment to its
/// successor, and each segment is sampled at `samples_per_point` uniform
/// parameter steps. With `samples_per_point == 1` the ring vertices coincide
/// with the control points; higher densities refine the ring while keeping
/// the control points on the curve.
///
/// Returns an empty ring for fewer than 3 control points.
///
/// # Example
///
/// ```
/// use mesh_loft::sample_ring;
/// use nalgebra::Point3;
///
/// let square = vec![
///     Point3::new(1.0, 1.0, 0.0),
///     Point3::new(-1.0, 1.0, 0.0),
///     Point3::new(-1.0, -1.0, 0.0),
///     Point3::new(1.0, -1.0, 0.0),
/// ];
///
/// assert_eq!(sample_ring(&square, 1).len(), 4);
/// assert_eq!(sample_ring(&square, 4).len(), 16);
/// ```
#[must_use]
pub fn sample_ring(points: &[Point3<f64>], samples_per_point: usize) -> Vec<Point3<f64>> {
    let n = points.len();
    if n < 3 || samples_per_point == 0 {
        return Vec::new();
    }

    let mut ring = Vec::with_capacity(n * samples_per_point);
    for i in 0..n {
        let p0 = points[(i + n - 1) % n];
        let p1 = points[i];
        let p2 = points[(i + 1) % n];
        let p3 = points[(i + 2) % n];

        for s in 0..samples_per_point {
            #[allow(clippy::cast_precision_loss)]
            let t = s as f64 / samples_per_point as f64;
            ring.push(cardinal_segment(p0, p1, p2, p3, t));
        }
    }
    ring
}

/// Signed winding of a ring about the +Z axis (shoelace over XY).
///
/// Positive means counter-clockwise viewed from above. Cross-section loops
/// are planar-ish with normals near Z, so the sign is a reliable orientation
/// test; magnitude is twice the enclosed XY area.
#[must_use]
pub fn ring_winding(points: &[Point3<f64>]) -> f64 {
    let n = points.len();
    let mut doubled = 0.0;
    for i in 0..n {
        let p = points[i];
        let q = points[(i + 1) % n];
        doubled += p.x * q.y - q.x * p.y;
    }
    doubled
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ccw_square(z: f64) -> Vec<Point3<f64>> {
        vec![
            Point3::new(1.0, 1.0, z),
            Point3::new(-1.0, 1.0, z),
            Point3::new(-1.0, -1.0, z),
            Point3::new(1.0, -1.0, z),
        ]
    }

    #[test]
    fn density_one_reproduces_control_points() {
        let square = ccw_square(2.0);
        let ring = sample_ring(&square, 1);
        assert_eq!(ring.len(), 4);
        for (sample, control) in ring.iter().zip(&square) {
            assert_relative_eq!(sample.coords, control.coords, epsilon = 1e-12);
        }
    }

    #[test]
    fn higher_density_keeps_control_points_on_curve() {
        let square = ccw_square(0.0);
        let ring = sample_ring(&square, 3);
        assert_eq!(ring.len(), 12);
        // Every third sample is a control point.
        for (i, control) in square.iter().enumerate() {
            assert_relative_eq!(ring[3 * i].coords, control.coords, epsilon = 1e-12);
        }
    }

    #[test]
    fn interior_samples_are_smooth_not_linear() {
        let square = ccw_square(0.0);
        let ring = sample_ring(&square, 2);
        // Midpoint of the first edge bulges off the chord for a cardinal fit.
        let chord_mid = Point3::new(0.0, 1.0, 0.0);
        assert!((ring[1] - chord_mid).norm() > 1e-6);
    }

    #[test]
    fn too_few_points_yields_empty_ring() {
        let two = vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)];
        assert!(sample_ring(&two, 1).is_empty());
    }

    #[test]
    fn winding_sign() {
        let ccw = ccw_square(0.0);
        let mut cw = ccw.clone();
        cw.reverse();

        assert!(ring_winding(&ccw) > 0.0);
        assert!(ring_winding(&cw) < 0.0);
        // |winding| = 2 * area = 8 for the 2x2 square.
        assert_relative_eq!(ring_winding(&ccw), 8.0, epsilon = 1e-12);
    }
}
