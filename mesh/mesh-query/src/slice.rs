//! Planar slices through a surface.

use mesh_core::{Point3, TriMesh, Vector3};

/// A slicing plane's normal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Plane normal along +X.
    X,
    /// Plane normal along +Y.
    Y,
    /// Plane normal along +Z (axial anatomy sections).
    Z,
}

impl Axis {
    /// Unit vector for this axis.
    #[must_use]
    pub fn unit(self) -> Vector3<f64> {
        match self {
            Self::X => Vector3::x(),
            Self::Y => Vector3::y(),
            Self::Z => Vector3::z(),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => write!(f, "x"),
            Self::Y => write!(f, "y"),
            Self::Z => write!(f, "z"),
        }
    }
}

/// The intersection of a surface with an axis-aligned plane.
///
/// Holds every point where a triangle edge crosses the plane. The points
/// form the cross-section outline (as an unchained segment soup, which is
/// all the centroid needs).
#[derive(Debug, Clone)]
pub struct PlanarSlice {
    /// Edge-plane crossing points.
    pub points: Vec<Point3<f64>>,
    /// Plane origin.
    pub origin: Point3<f64>,
    /// Plane normal axis.
    pub axis: Axis,
}

impl PlanarSlice {
    /// Compute the slice of `mesh` by the plane through `origin` with the
    /// given axis normal. Returns `None` when no triangle crosses the plane.
    #[must_use]
    pub fn of_mesh(mesh: &TriMesh, axis: Axis, origin: Point3<f64>) -> Option<Self> {
        let normal = axis.unit();
        let mut points = Vec::new();

        for tri in mesh.triangles() {
            let mut crossings = Vec::with_capacity(2);
            for (a, b) in tri.edges() {
                if let Some(p) = edge_plane_crossing(&origin, &normal, &a, &b) {
                    crossings.push(p);
                }
            }
            // A triangle properly crossing the plane contributes one segment.
            if crossings.len() == 2 {
                points.extend(crossings);
            }
        }

        if points.is_empty() {
            None
        } else {
            Some(Self {
                points,
                origin,
                axis,
            })
        }
    }

    /// Mean of the crossing points: the cross-section's center.
    ///
    /// For the cord's roughly elliptical axial sections this lands near the
    /// anatomical center of the cord at that height.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Point3<f64> {
        let sum: Vector3<f64> = self.points.iter().map(|p| p.coords).sum();
        Point3::from(sum / self.points.len() as f64)
    }
}

/// Where segment `a`-`b` crosses the plane, if it does.
fn edge_plane_crossing(
    origin: &Point3<f64>,
    normal: &Vector3<f64>,
    a: &Point3<f64>,
    b: &Point3<f64>,
) -> Option<Point3<f64>> {
    let da = (a - origin).dot(normal);
    let db = (b - origin).dot(normal);

    if da * db > 0.0 {
        return None; // both endpoints on the same side
    }
    if (da - db).abs() < 1e-12 {
        return None; // edge lies in the plane
    }

    let t = da / (da - db);
    Some(a + (b - a) * t)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_loft::{loft_loop_stack, LoftParams};

    #[allow(clippy::cast_precision_loss)]
    fn circle(n: usize, radius: f64, cx: f64, cy: f64, z: f64) -> Vec<Point3<f64>> {
        (0..n)
            .map(|k| {
                let theta = 2.0 * std::f64::consts::PI * k as f64 / n as f64;
                Point3::new(cx + radius * theta.cos(), cy + radius * theta.sin(), z)
            })
            .collect()
    }

    fn cylinder() -> TriMesh {
        let loops = vec![
            circle(24, 5.0, 2.0, -1.0, 10.0),
            circle(24, 5.0, 2.0, -1.0, 0.0),
        ];
        loft_loop_stack(&loops, &LoftParams::default()).expect("loft")
    }

    #[test]
    fn slice_through_cylinder_centroid_is_on_axis() {
        let mesh = cylinder();
        let slice = PlanarSlice::of_mesh(&mesh, Axis::Z, Point3::new(0.0, 0.0, 5.0))
            .expect("slice");

        let c = slice.centroid();
        assert_relative_eq!(c.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(c.y, -1.0, epsilon = 1e-6);
        assert_relative_eq!(c.z, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn slice_points_sit_on_plane() {
        let mesh = cylinder();
        let slice = PlanarSlice::of_mesh(&mesh, Axis::Z, Point3::new(0.0, 0.0, 3.25))
            .expect("slice");

        assert!(!slice.points.is_empty());
        for p in &slice.points {
            assert_relative_eq!(p.z, 3.25, epsilon = 1e-9);
        }
    }

    #[test]
    fn plane_outside_mesh_yields_none() {
        let mesh = cylinder();
        let slice = PlanarSlice::of_mesh(&mesh, Axis::Z, Point3::new(0.0, 0.0, 50.0));
        assert!(slice.is_none());
    }

    #[test]
    fn x_axis_slice_works() {
        let mesh = cylinder();
        let slice = PlanarSlice::of_mesh(&mesh, Axis::X, Point3::new(2.0, 0.0, 0.0))
            .expect("slice");
        for p in &slice.points {
            assert_relative_eq!(p.x, 2.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn axis_display() {
        assert_eq!(Axis::Z.to_string(), "z");
        assert_eq!(Axis::X.to_string(), "x");
    }
}
