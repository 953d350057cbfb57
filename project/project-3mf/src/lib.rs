//! 3MF project packages for slicer hand-off.
//!
//! This crate turns a [`MeshModel`](mesh_types::MeshModel) and rendered
//! settings text into a single 3MF archive:
//!
//! - [`serialize_model`] - Mesh to 3MF model markup
//! - [`assemble`] - Model markup and settings text to zip bytes
//! - [`Package`] - Lower-level list of typed parts with a derived
//!   content-type manifest
//!
//! # Package Layout
//!
//! | Part | Content |
//! |---|---|
//! | `[Content_Types].xml` | media type per extension |
//! | `_rels/.rels` | one relationship to the model part |
//! | `3D/3dmodel.model` | model markup |
//! | `Metadata/*.config` | settings text, one copy per configured path |
//!
//! Archives are deterministic: equal inputs give equal bytes.
//!
//! # Example
//!
//! ```
//! use mesh_types::{MeshModel, Point3};
//! use project_3mf::{assemble, serialize_model, PackageParams};
//!
//! let mut mesh = MeshModel::new();
//! mesh.push_facet([
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.0, 0.0),
//!     Point3::new(0.0, 1.0, 0.0),
//! ]);
//!
//! let params = PackageParams::default();
//! let model = serialize_model(&mesh, &params.metadata("wedge")).unwrap();
//! let package = assemble(&model, "layer_height = 0.2\n", "wedge.stl", &params).unwrap();
//!
//! assert_eq!(package.file_name, "wedge_IntelliSlice.3mf");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod assemble;
mod error;
mod model;
mod opc;
mod package;
mod params;

pub use assemble::{assemble, display_name, output_file_name, ProjectPackage};
pub use error::{PackageError, PackageResult};
pub use model::{serialize_model, MODEL_NAMESPACE};
pub use opc::{
    content_types_xml, relationships_xml, CONTENT_TYPES_PART, DEFAULT_MODEL_PART,
    MODEL_MEDIA_TYPE, MODEL_RELATIONSHIP_TYPE, PACKAGE_MEDIA_TYPE, RELATIONSHIPS_MEDIA_TYPE,
    ROOT_RELS_PART, TEXT_MEDIA_TYPE,
};
pub use package::{Package, PackagePart};
pub use params::{ModelMetadata, PackageParams, PRODUCT_NAME};
