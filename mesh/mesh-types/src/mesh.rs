//! Triangle mesh model.

use crate::{MeshTopology, Vertex};
use nalgebra::Point3;

/// A triangle mesh.
///
/// `vertices` is an ordered list of points and `triangles` an ordered list
/// of index triples into it. Every index must be `< vertices.len()`; use
/// [`MeshModel::first_invalid_index`] to check models built by hand.
///
/// Meshes produced by [`MeshModel::push_facet`] are triangle soup: each
/// facet appends three fresh vertices and never shares them.
///
/// # Example
///
/// ```
/// use mesh_types::{MeshModel, Vertex, MeshTopology};
///
/// let vertices = vec![
///     Vertex::from_coords(0.0, 0.0, 0.0),
///     Vertex::from_coords(1.0, 0.0, 0.0),
///     Vertex::from_coords(0.0, 1.0, 0.0),
/// ];
/// let mesh = MeshModel::from_parts(vertices, vec![[0, 1, 2]]);
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshModel {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Triangles as indices into the vertex array.
    pub triangles: Vec<[u32; 3]>,
}

/// A triangle index that points past the end of the vertex list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    /// Position of the offending triangle.
    pub triangle: usize,
    /// The out-of-range vertex index.
    pub index: u32,
    /// Number of vertices in the mesh.
    pub vertex_count: usize,
}

impl std::fmt::Display for IndexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "triangle {} references vertex {} but the mesh has {} vertices",
            self.triangle, self.index, self.vertex_count
        )
    }
}

impl std::error::Error for IndexError {}

impl MeshModel {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
        }
    }

    /// Create an empty mesh sized for `triangle_count` soup facets.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{MeshModel, MeshTopology};
    ///
    /// let mesh = MeshModel::with_facet_capacity(100);
    /// assert!(mesh.is_empty());
    /// assert!(mesh.vertices.capacity() >= 300);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_facet_capacity(triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(triangle_count.saturating_mul(3)),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Create a mesh from vertices and triangles.
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, triangles: Vec<[u32; 3]>) -> Self {
        Self {
            vertices,
            triangles,
        }
    }

    /// Append a facet with three freshly appended vertices.
    ///
    /// Returns the index of the new triangle. The appended triple is
    /// `(3i, 3i + 1, 3i + 2)` when the mesh has only ever been built through
    /// this method.
    ///
    /// Decoders check the declared triangle count against the `u32` index
    /// range before pushing.
    pub fn push_facet(&mut self, corners: [Point3<f64>; 3]) -> usize {
        #[allow(clippy::cast_possible_truncation)]
        // Truncation: mesh indices are u32, meshes with >4B vertices are unsupported
        let base = self.vertices.len() as u32;
        self.vertices.extend(corners.into_iter().map(Vertex::new));
        self.triangles.push([base, base + 1, base + 2]);
        self.triangles.len() - 1
    }

    /// Find the first triangle index that does not refer to a vertex.
    ///
    /// Returns `None` when every index is `< vertices.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{MeshModel, Vertex};
    ///
    /// let mesh = MeshModel::from_parts(vec![Vertex::from_coords(0.0, 0.0, 0.0)], vec![[0, 0, 4]]);
    /// let err = mesh.first_invalid_index().unwrap();
    /// assert_eq!(err.index, 4);
    /// ```
    #[must_use]
    pub fn first_invalid_index(&self) -> Option<IndexError> {
        let vertex_count = self.vertices.len();
        self.triangles
            .iter()
            .enumerate()
            .find_map(|(triangle, face)| {
                face.iter()
                    .find(|&&index| index as usize >= vertex_count)
                    .map(|&index| IndexError {
                        triangle,
                        index,
                        vertex_count,
                    })
            })
    }

    /// Axis-aligned extent of all vertices as `(min, max)`.
    ///
    /// Returns `None` for a mesh without vertices.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let first = self.vertices.first()?.position;
        Some(
            self.vertices
                .iter()
                .fold((first, first), |(min, max), v| {
                    (min.inf(&v.position), max.sup(&v.position))
                }),
        )
    }
}

impl MeshTopology for MeshModel {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        self.triangles.get(index).copied()
    }

    fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    fn triangles(&self) -> impl Iterator<Item = [u32; 3]> {
        self.triangles.iter().copied()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn corners(offset: f64) -> [Point3<f64>; 3] {
        [
            Point3::new(offset, 0.0, 0.0),
            Point3::new(offset + 1.0, 0.0, 0.0),
            Point3::new(offset, 1.0, 0.0),
        ]
    }

    #[test]
    fn new_mesh_is_empty() {
        let mesh = MeshModel::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert!(mesh.bounds().is_none());
    }

    #[test]
    fn push_facet_builds_soup() {
        let mut mesh = MeshModel::new();
        assert_eq!(mesh.push_facet(corners(0.0)), 0);
        assert_eq!(mesh.push_facet(corners(0.0)), 1);

        // Identical corners are still appended, never shared.
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangles, vec![[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mesh.vertices[0], mesh.vertices[3]);
    }

    #[test]
    fn first_invalid_index_reports_position() {
        let mut mesh = MeshModel::new();
        mesh.push_facet(corners(0.0));
        assert!(mesh.first_invalid_index().is_none());

        mesh.triangles.push([0, 3, 1]);
        let err = mesh.first_invalid_index().unwrap();
        assert_eq!(err.triangle, 1);
        assert_eq!(err.index, 3);
        assert_eq!(err.vertex_count, 3);
        assert!(err.to_string().contains("vertex 3"));
    }

    #[test]
    fn bounds_cover_all_vertices() {
        let mut mesh = MeshModel::new();
        mesh.push_facet(corners(-2.0));
        mesh.push_facet([
            Point3::new(0.0, 0.0, 5.0),
            Point3::new(3.0, -1.0, 0.0),
            Point3::new(0.0, 0.0, 0.0),
        ]);

        let (min, max) = mesh.bounds().unwrap();
        assert_relative_eq!(min.x, -2.0);
        assert_relative_eq!(min.y, -1.0);
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.x, 3.0);
        assert_relative_eq!(max.y, 1.0);
        assert_relative_eq!(max.z, 5.0);
    }

    #[test]
    fn topology_accessors() {
        let mut mesh = MeshModel::new();
        mesh.push_facet(corners(0.0));
        assert_eq!(mesh.triangle(0), Some([0, 1, 2]));
        assert_eq!(mesh.triangle(1), None);
        assert_eq!(mesh.vertex(1).map(|v| v.position.x), Some(1.0));
        assert_eq!(mesh.vertices().count(), 3);
        assert_eq!(mesh.triangles().count(), 1);
    }
}
