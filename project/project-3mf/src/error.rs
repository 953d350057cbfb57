//! Error types for package assembly.

use mesh_types::IndexError;
use thiserror::Error;
use zip::result::ZipError;

/// Errors that can occur while serializing a model or assembling a package.
#[derive(Debug, Error)]
pub enum PackageError {
    /// A triangle references a vertex that does not exist.
    #[error("invalid mesh: {0}")]
    InvalidMesh(#[from] IndexError),

    /// A vertex coordinate is NaN or infinite.
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex {
        /// Index of the offending vertex.
        index: usize,
    },

    /// Markup generation failed.
    #[error("failed to write {what}: {message}")]
    Xml {
        /// Document being written.
        what: &'static str,
        /// Underlying writer message.
        message: String,
    },

    /// The archive writer rejected an entry or failed to finish.
    #[error("archive error while writing {part}: {source}")]
    Archive {
        /// Part path, or the archive step that failed.
        part: String,
        /// Underlying zip error.
        #[source]
        source: ZipError,
    },

    /// Two parts share a name (part names compare case-insensitively).
    #[error("duplicate package part: {0}")]
    DuplicatePart(String),

    /// A part path cannot be stored in the package.
    #[error("invalid part path {path:?}: {reason}")]
    InvalidPartPath {
        /// The rejected path.
        path: String,
        /// Why the path was rejected.
        reason: &'static str,
    },

    /// The parameters name no settings part.
    #[error("package parameters name no settings part")]
    NoSettingsPart,

    /// Writing compressed data failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PackageError {
    pub(crate) fn xml(what: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Xml {
            what,
            message: err.to_string(),
        }
    }

    pub(crate) fn archive(part: impl Into<String>, source: ZipError) -> Self {
        Self::Archive {
            part: part.into(),
            source,
        }
    }

    pub(crate) fn invalid_path(path: &str, reason: &'static str) -> Self {
        Self::InvalidPartPath {
            path: path.to_string(),
            reason,
        }
    }
}

/// Result type for package operations.
pub type PackageResult<T> = std::result::Result<T, PackageError>;
