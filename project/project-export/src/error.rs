//! Error types for the export pipeline.

use mesh_io::IoError;
use project_3mf::PackageError;
use project_settings::SettingsError;
use thiserror::Error;

use crate::stage::ExportStage;

/// Why an export produced no package.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The mesh bytes are not a supported STL layout.
    #[error(transparent)]
    MalformedMesh(#[from] IoError),

    /// A setting value does not fit its key.
    #[error("unsupported setting value: {0}")]
    UnsupportedValue(#[from] SettingsError),

    /// Model serialization or archive construction failed.
    #[error("packaging failed: {0}")]
    Packaging(#[from] PackageError),
}

impl ExportError {
    /// Stage in which the error arose.
    #[must_use]
    pub const fn stage(&self) -> ExportStage {
        match self {
            Self::MalformedMesh(_) => ExportStage::Decoding,
            Self::UnsupportedValue(_) => ExportStage::Mapping,
            Self::Packaging(
                PackageError::InvalidMesh(_) | PackageError::NonFiniteVertex { .. },
            ) => ExportStage::Serializing,
            Self::Packaging(_) => ExportStage::Assembling,
        }
    }
}

/// Result type for export operations.
pub type ExportResult<T> = std::result::Result<T, ExportError>;
