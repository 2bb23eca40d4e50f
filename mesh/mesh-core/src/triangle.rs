//! Concrete triangles.

use nalgebra::{Point3, Vector3};

/// A triangle with resolved vertex positions.
///
/// Produced by [`TriMesh::triangles`](crate::TriMesh::triangles) when an
/// algorithm needs geometry rather than indices (plane intersection, area,
/// normal computation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// First vertex position.
    pub a: Point3<f64>,
    /// Second vertex position.
    pub b: Point3<f64>,
    /// Third vertex position.
    pub c: Point3<f64>,
}

impl Triangle {
    /// Create a triangle from three positions.
    #[inline]
    #[must_use]
    pub const fn new(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Self {
        Self { a, b, c }
    }

    /// Unit normal by the right-hand rule, or `None` for a degenerate
    /// (zero-area) triangle.
    #[must_use]
    pub fn normal(&self) -> Option<Vector3<f64>> {
        let cross = (self.b - self.a).cross(&(self.c - self.a));
        cross.try_normalize(f64::EPSILON)
    }

    /// Triangle area.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_core::{Triangle, Point3};
    ///
    /// let tri = Triangle::new(
    ///     Point3::new(0.0, 0.0, 0.0),
    ///     Point3::new(2.0, 0.0, 0.0),
    ///     Point3::new(0.0, 2.0, 0.0),
    /// );
    /// assert!((tri.area() - 2.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.b - self.a).cross(&(self.c - self.a)).norm() * 0.5
    }

    /// Centroid (mean of the three corners).
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        Point3::from((self.a.coords + self.b.coords + self.c.coords) / 3.0)
    }

    /// Iterate over the three directed edges `(a,b)`, `(b,c)`, `(c,a)`.
    pub fn edges(&self) -> impl Iterator<Item = (Point3<f64>, Point3<f64>)> {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)].into_iter()
    }
}
