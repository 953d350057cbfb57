//! Vertex type.

use nalgebra::Point3;

/// A vertex in 3D space.
///
/// Positions are stored as `f64` even though STL stores `f32`, so that
/// widening happens once at decode time and every later stage formats the
/// same value.
///
/// # Example
///
/// ```
/// use mesh_types::{Vertex, Point3};
///
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
///
/// assert_eq!(v1, v2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,
}

impl Vertex {
    /// Create a new vertex at `position`.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self { position }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Create a vertex from single-precision coordinates, as stored in binary STL.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::Vertex;
    ///
    /// let v = Vertex::from_f32(0.5, -2.0, 8.25);
    /// assert_eq!(v.position.x, 0.5);
    /// assert_eq!(v.position.z, 8.25);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_f32(x: f32, y: f32, z: f32) -> Self {
        Self::from_coords(f64::from(x), f64::from(y), f64::from(z))
    }

    /// Position as an `[x, y, z]` array.
    #[inline]
    #[must_use]
    pub fn coords(&self) -> [f64; 3] {
        [self.position.x, self.position.y, self.position.z]
    }

    /// Whether every coordinate is finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.coords().iter().all(|c| c.is_finite())
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn from_f32_widens_exactly() {
        let v = Vertex::from_f32(0.1, 0.2, 0.3);
        assert_eq!(v.position.x, f64::from(0.1_f32));
        assert_eq!(v.position.y, f64::from(0.2_f32));
        assert_eq!(v.position.z, f64::from(0.3_f32));
    }

    #[test]
    fn finiteness() {
        assert!(Vertex::from_coords(1.0, -1.0, 0.0).is_finite());
        assert!(!Vertex::from_coords(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Vertex::from_coords(0.0, f64::INFINITY, 0.0).is_finite());
    }

    #[test]
    fn coords_order() {
        assert_eq!(Vertex::from_coords(1.0, 2.0, 3.0).coords(), [1.0, 2.0, 3.0]);
    }
}
