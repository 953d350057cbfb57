//! Mesh decoding for IntelliSlice.
//!
//! This crate turns raw STL bytes, binary or ASCII, into the triangle-soup
//! [`MeshModel`](mesh_types::MeshModel) consumed by the 3MF serializer.
//!
//! Decoding is a pure function of the input buffer: no state is kept between
//! calls and no file system access happens unless [`load_stl`] is used.
//!
//! # Example
//!
//! ```no_run
//! use mesh_io::{decode_stl, load_stl};
//!
//! // From memory
//! let bytes = std::fs::read("model.stl").unwrap();
//! let mesh = decode_stl(&bytes).unwrap();
//!
//! // Or straight from a path
//! let same = load_stl("model.stl").unwrap();
//! assert_eq!(mesh, same);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{IoError, IoResult};
pub use stl::{
    decode_stl, detect_encoding, load_stl, StlEncoding, HEADER_SIZE, PREAMBLE_SIZE, TRIANGLE_SIZE,
};
