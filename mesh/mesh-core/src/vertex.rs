//! Mesh vertices.

use nalgebra::{Point3, Vector3};

/// A mesh vertex: a position and an optional outward normal.
///
/// Normals are carried where a builder can compute them cheaply (tube
/// lofting); they are advisory and recomputed per-face by the STL writer.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Position in millimeters.
    pub position: Point3<f64>,
    /// Unit outward normal, if known.
    pub normal: Option<Vector3<f64>>,
}

impl Vertex {
    /// Create a vertex with no normal.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            normal: None,
        }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_core::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert!((v.position.z - 3.0).abs() < f64::EPSILON);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex with an outward normal.
    #[inline]
    #[must_use]
    pub const fn with_normal(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            position,
            normal: Some(normal),
        }
    }

    /// Check that all coordinates are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.coords.iter().all(|c| c.is_finite())
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_from_coords() {
        let v = Vertex::from_coords(1.0, -2.0, 0.5);
        assert!((v.position.x - 1.0).abs() < f64::EPSILON);
        assert!((v.position.y + 2.0).abs() < f64::EPSILON);
        assert!(v.normal.is_none());
    }

    #[test]
    fn vertex_with_normal() {
        let v = Vertex::with_normal(Point3::origin(), Vector3::z());
        assert!(v.normal.is_some());
    }

    #[test]
    fn vertex_finiteness() {
        assert!(Vertex::from_coords(0.0, 0.0, 0.0).is_finite());
        assert!(!Vertex::from_coords(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Vertex::from_coords(0.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn vertex_from_point() {
        let v: Vertex = Point3::new(3.0, 4.0, 5.0).into();
        assert!((v.position.y - 4.0).abs() < f64::EPSILON);
    }
}
