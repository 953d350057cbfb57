//! Traits for mesh types.

use crate::Vertex;

/// Read-only view of a triangle mesh.
///
/// Consumers such as the 3MF serializer only need ordered access to vertices
/// and index triples, which this trait provides.
pub trait MeshTopology {
    /// Get the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Get the number of triangles.
    fn triangle_count(&self) -> usize;

    /// Check if the mesh has no triangles.
    fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }

    /// Get a vertex by index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn vertex(&self, index: usize) -> Option<&Vertex>;

    /// Get a triangle's vertex indices by triangle index.
    ///
    /// Returns `None` if the index is out of bounds.
    fn triangle(&self, index: usize) -> Option<[u32; 3]>;

    /// Iterate over all vertices in storage order.
    fn vertices(&self) -> impl Iterator<Item = &Vertex>;

    /// Iterate over all triangles in storage order.
    fn triangles(&self) -> impl Iterator<Item = [u32; 3]>;
}
