//! Core mesh types for IntelliSlice.
//!
//! This crate provides the in-memory model produced by the mesh decoder and
//! consumed by the 3MF model serializer:
//!
//! - [`Vertex`] - A point in 3D space
//! - [`MeshModel`] - Vertices plus index triples into them
//! - [`MeshTopology`] - Read-only access shared by consumers
//!
//! # Triangle Soup
//!
//! Decoded meshes are *triangle soup*: triangle `i` owns vertices
//! `3i`, `3i + 1` and `3i + 2`. Vertices are never merged. Downstream
//! consumers rely on that 1:1 triangle to vertex-run mapping, so nothing in
//! this crate deduplicates.
//!
//! # Units
//!
//! Coordinates are `f64` and unit-agnostic here. The 3MF serializer declares
//! them as millimeters; no scaling happens anywhere in the pipeline.
//!
//! # Example
//!
//! ```
//! use mesh_types::{MeshModel, MeshTopology, Point3};
//!
//! let mut mesh = MeshModel::new();
//! mesh.push_facet([
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ]);
//!
//! assert_eq!(mesh.triangle_count(), 1);
//! assert_eq!(mesh.vertex_count(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod mesh;
mod traits;
mod vertex;

pub use mesh::{IndexError, MeshModel};
pub use traits::MeshTopology;
pub use vertex::Vertex;

// Re-export nalgebra types for convenience
pub use nalgebra::Point3;
