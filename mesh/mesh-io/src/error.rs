//! Error types for mesh decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while decoding a mesh.
///
/// Every variant except [`IoError::FileNotFound`] and [`IoError::Io`] means
/// the buffer itself is malformed; see [`IoError::is_malformed`].
#[derive(Debug, Error)]
pub enum IoError {
    /// Buffer is shorter than the binary STL header plus triangle count.
    #[error("malformed mesh: {len} bytes is too short for a binary STL header")]
    TooShort {
        /// Actual buffer length.
        len: usize,
    },

    /// Buffer length disagrees with the triangle count in the header.
    #[error(
        "malformed mesh: header declares {triangles} triangles ({expected} bytes) but buffer is {actual} bytes"
    )]
    SizeMismatch {
        /// Triangle count read from the header.
        triangles: u32,
        /// Length implied by the triangle count.
        expected: u64,
        /// Actual buffer length.
        actual: usize,
    },

    /// Triangle count would overflow the `u32` vertex index range.
    #[error("malformed mesh: {triangles} triangles exceed the supported vertex index range")]
    TooManyTriangles {
        /// Declared or parsed triangle count.
        triangles: u64,
    },

    /// A coordinate is NaN or infinite.
    #[error("malformed mesh: non-finite coordinate in triangle {triangle}")]
    NonFiniteCoordinate {
        /// Index of the offending triangle.
        triangle: usize,
    },

    /// ASCII STL syntax error.
    #[error("malformed mesh: line {line}: {message}")]
    Syntax {
        /// One-based line number.
        line: usize,
        /// Description of what was wrong.
        message: String,
    },

    /// ASCII STL ended inside a solid, facet or loop.
    #[error("malformed mesh: unexpected end of input, expected `{expected}`")]
    UnexpectedEof {
        /// The keyword that was still owed.
        expected: &'static str,
    },

    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create a `Syntax` error at the given one-based line.
    #[must_use]
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Whether the error describes the mesh content rather than file access.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        !matches!(self, Self::FileNotFound { .. } | Self::Io(_))
    }
}
