//! Mesh-to-project export for IntelliSlice.
//!
//! One call turns STL bytes and a [`SettingsRecord`] into a 3MF project
//! package that OrcaSlicer-family slicers open with the mapped process
//! profile applied.
//!
//! # Pipeline
//!
//! ```text
//! STL bytes ──decode──▶ MeshModel ──serialize──▶ model markup ─┐
//!                                                              ├─assemble──▶ ProjectPackage
//! SettingsRecord ──map + render──▶ profile text ───────────────┘
//! ```
//!
//! Each run is a pure function of its inputs. Nothing is cached between
//! calls and nothing touches the filesystem, so runs can execute on any
//! thread; [`export_batch`] fans independent jobs out over rayon.
//!
//! # Example
//!
//! ```
//! use project_export::{export_project, ExportParams};
//! use project_settings::{SettingKey, SettingsRecord};
//!
//! // Binary STL: 80-byte header, one triangle.
//! let mut stl = vec![0u8; 80];
//! stl.extend_from_slice(&1u32.to_le_bytes());
//! for value in [0.0f32, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0] {
//!     stl.extend_from_slice(&value.to_le_bytes());
//! }
//! stl.extend_from_slice(&0u16.to_le_bytes());
//!
//! let settings = SettingsRecord::new()
//!     .with(SettingKey::LayerHeight, 0.2)
//!     .with(SettingKey::InfillDensity, 15)
//!     .with(SettingKey::EnableSupports, false);
//!
//! let package = export_project(&stl, &settings, "wedge.stl", &ExportParams::default()).unwrap();
//! assert_eq!(package.file_name, "wedge_IntelliSlice.3mf");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod batch;
mod error;
mod params;
mod pipeline;
mod stage;

pub use batch::{export_batch, ExportJob};
pub use error::{ExportError, ExportResult};
pub use params::ExportParams;
pub use pipeline::{export_project, export_project_with_progress};
pub use stage::ExportStage;

pub use project_3mf::ProjectPackage;
pub use project_settings::SettingsRecord;
