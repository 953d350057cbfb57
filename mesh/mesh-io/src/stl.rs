//! STL (Stereolithography) decoding.
//!
//! Supports both ASCII and binary STL.
//!
//! # Format Detection
//!
//! A buffer is treated as ASCII when all of the following hold:
//! - it starts with the token `solid` (after optional whitespace)
//! - it is valid UTF-8
//! - its length is *not* an exact match for the binary layout declared by
//!   bytes 80..84
//!
//! The last rule catches binary files whose free-form header happens to
//! begin with `solid`. Everything else is parsed as binary.
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles N
//! foreach triangle
//!     REAL32[3] – Normal vector (ignored)
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (ignored)
//! end
//! ```
//!
//! The buffer must be exactly `84 + 50 * N` bytes long.
//!
//! # ASCII Format
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid name
//! ```
//!
//! Keywords are matched case-insensitively. Several `solid … endsolid`
//! blocks may follow one another; their facets are concatenated.
//!
//! # Output
//!
//! Both decoders emit triangle soup: triangle `i` owns vertices `3i`,
//! `3i + 1` and `3i + 2`. No merging, scaling or centering happens here.

use std::iter::Peekable;
use std::path::Path;

use mesh_types::{MeshModel, Point3, Vertex};
use tracing::debug;

use crate::error::{IoError, IoResult};

/// STL binary header size in bytes.
pub const HEADER_SIZE: usize = 80;

/// Header plus the little-endian `u32` triangle count.
pub const PREAMBLE_SIZE: usize = HEADER_SIZE + 4;

/// Size of one triangle record in binary STL (normal + 3 vertices + attribute).
pub const TRIANGLE_SIZE: usize = 50;

/// Largest triangle count whose soup vertices still fit `u32` indices.
const MAX_TRIANGLES: u64 = u32::MAX as u64 / 3;

/// The two STL encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StlEncoding {
    /// Text `solid … endsolid` form.
    Ascii,
    /// 80-byte header, triangle count and fixed-size records.
    Binary,
}

impl std::fmt::Display for StlEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Ascii => "ascii",
            Self::Binary => "binary",
        })
    }
}

/// Decide which decoder a buffer should go through.
///
/// # Example
///
/// ```
/// use mesh_io::{detect_encoding, StlEncoding};
///
/// assert_eq!(detect_encoding(b"solid cube\nendsolid cube\n"), StlEncoding::Ascii);
/// assert_eq!(detect_encoding(&[0u8; 84]), StlEncoding::Binary);
/// ```
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> StlEncoding {
    if starts_with_solid(bytes)
        && !binary_length_matches(bytes)
        && std::str::from_utf8(bytes).is_ok()
    {
        StlEncoding::Ascii
    } else {
        StlEncoding::Binary
    }
}

/// Decode an STL buffer into a triangle-soup [`MeshModel`].
///
/// # Errors
///
/// Returns a malformed-mesh error (see [`IoError::is_malformed`]) if:
/// - a binary buffer is shorter than 84 bytes or is not exactly
///   `84 + 50 * N` bytes long
/// - an ASCII buffer has a non-numeric coordinate, a loop without exactly
///   three vertices, or unbalanced `solid`/`facet`/`loop` markers
/// - any coordinate is NaN or infinite
///
/// # Example
///
/// ```
/// use mesh_io::decode_stl;
/// use mesh_types::MeshTopology;
///
/// let text = b"solid t
///   facet normal 0 0 1
///     outer loop
///       vertex 0 0 0
///       vertex 1 0 0
///       vertex 0 1 0
///     endloop
///   endfacet
/// endsolid t";
///
/// let mesh = decode_stl(text).unwrap();
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.vertex_count(), 3);
/// ```
pub fn decode_stl(bytes: &[u8]) -> IoResult<MeshModel> {
    let encoding = detect_encoding(bytes);
    debug!(%encoding, bytes = bytes.len(), "Decoding STL");

    let mesh = match encoding {
        StlEncoding::Ascii => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| IoError::syntax(1, format!("invalid UTF-8: {e}")))?;
            decode_ascii(text)?
        }
        StlEncoding::Binary => decode_binary(bytes)?,
    };

    debug!(
        triangles = mesh.triangles.len(),
        vertices = mesh.vertices.len(),
        "Decoded STL"
    );
    Ok(mesh)
}

/// Load and decode an STL file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the path does not exist,
/// [`IoError::Io`] for other read failures, and the errors of
/// [`decode_stl`] for bad content.
pub fn load_stl<P: AsRef<Path>>(path: P) -> IoResult<MeshModel> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    decode_stl(&bytes)
}

fn starts_with_solid(bytes: &[u8]) -> bool {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let rest = &bytes[start..];
    rest.len() >= 5
        && rest[..5].eq_ignore_ascii_case(b"solid")
        && rest.get(5).map_or(true, u8::is_ascii_whitespace)
}

/// Triangle count and total length implied by a binary preamble.
fn declared_binary_layout(bytes: &[u8]) -> Option<(u32, u64)> {
    if bytes.len() < PREAMBLE_SIZE {
        return None;
    }
    let count = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);
    let expected = PREAMBLE_SIZE as u64 + TRIANGLE_SIZE as u64 * u64::from(count);
    Some((count, expected))
}

fn binary_length_matches(bytes: &[u8]) -> bool {
    declared_binary_layout(bytes).is_some_and(|(_, expected)| expected == bytes.len() as u64)
}

fn decode_binary(bytes: &[u8]) -> IoResult<MeshModel> {
    let (count, expected) =
        declared_binary_layout(bytes).ok_or(IoError::TooShort { len: bytes.len() })?;

    if expected != bytes.len() as u64 {
        return Err(IoError::SizeMismatch {
            triangles: count,
            expected,
            actual: bytes.len(),
        });
    }
    if u64::from(count) > MAX_TRIANGLES {
        return Err(IoError::TooManyTriangles {
            triangles: u64::from(count),
        });
    }

    let mut mesh = MeshModel::with_facet_capacity(count as usize);
    for (index, record) in bytes[PREAMBLE_SIZE..]
        .chunks_exact(TRIANGLE_SIZE)
        .enumerate()
    {
        // Skip normal (12 bytes) and attribute (trailing 2 bytes)
        let corners = [
            read_point(&record[12..24]).position,
            read_point(&record[24..36]).position,
            read_point(&record[36..48]).position,
        ];
        if !corners
            .iter()
            .all(|p| p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(IoError::NonFiniteCoordinate { triangle: index });
        }
        mesh.push_facet(corners);
    }

    Ok(mesh)
}

/// Read a vertex from 12 bytes (3 little-endian f32s).
fn read_point(buf: &[u8]) -> Vertex {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    Vertex::from_f32(x, y, z)
}

fn decode_ascii(text: &str) -> IoResult<MeshModel> {
    let tokens = text.lines().enumerate().flat_map(|(index, line)| {
        line.split_ascii_whitespace()
            .map(move |token| Token {
                line: index + 1,
                text: token,
            })
    });
    AsciiParser {
        tokens: tokens.peekable(),
        mesh: MeshModel::new(),
    }
    .parse()
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    line: usize,
    text: &'a str,
}

impl Token<'_> {
    fn is(&self, keyword: &str) -> bool {
        self.text.eq_ignore_ascii_case(keyword)
    }
}

struct AsciiParser<I: Iterator> {
    tokens: Peekable<I>,
    mesh: MeshModel,
}

impl<'a, I: Iterator<Item = Token<'a>>> AsciiParser<I> {
    fn parse(mut self) -> IoResult<MeshModel> {
        let mut solid = self.expect("solid")?;
        loop {
            self.skip_name(solid.line);

            loop {
                let token = self.next_or("endsolid")?;
                if token.is("facet") {
                    self.parse_facet()?;
                } else if token.is("endsolid") {
                    self.skip_rest_of_line(token.line);
                    break;
                } else {
                    return Err(unexpected(token, "`facet` or `endsolid`"));
                }
            }

            match self.tokens.next() {
                None => return Ok(self.mesh),
                Some(token) if token.is("solid") => solid = token,
                Some(token) => return Err(unexpected(token, "`solid` or end of input")),
            }
        }
    }

    fn parse_facet(&mut self) -> IoResult<()> {
        if self.mesh.triangles.len() as u64 >= MAX_TRIANGLES {
            return Err(IoError::TooManyTriangles {
                triangles: self.mesh.triangles.len() as u64 + 1,
            });
        }

        // Normal must parse but is otherwise ignored, NaN included.
        self.expect("normal")?;
        for _ in 0..3 {
            self.parse_f64("normal component")?;
        }

        self.expect("outer")?;
        self.expect("loop")?;
        let mut corners = [Point3::origin(); 3];
        for corner in &mut corners {
            self.expect("vertex")?;
            *corner = Point3::new(
                self.number("x coordinate")?,
                self.number("y coordinate")?,
                self.number("z coordinate")?,
            );
        }
        let token = self.next_or("endloop")?;
        if token.is("vertex") {
            return Err(IoError::syntax(
                token.line,
                "loop has more than three vertices",
            ));
        }
        if !token.is("endloop") {
            return Err(unexpected(token, "`endloop`"));
        }
        self.expect("endfacet")?;

        self.mesh.push_facet(corners);
        Ok(())
    }

    /// Skip a solid name: tokens on the `solid` line up to the first facet.
    fn skip_name(&mut self, line: usize) {
        while self
            .tokens
            .next_if(|t| t.line == line && !t.is("facet") && !t.is("endsolid"))
            .is_some()
        {}
    }

    fn skip_rest_of_line(&mut self, line: usize) {
        while self.tokens.next_if(|t| t.line == line).is_some() {}
    }

    fn next_or(&mut self, expected: &'static str) -> IoResult<Token<'a>> {
        self.tokens
            .next()
            .ok_or(IoError::UnexpectedEof { expected })
    }

    fn expect(&mut self, keyword: &'static str) -> IoResult<Token<'a>> {
        let token = self.next_or(keyword)?;
        if token.is(keyword) {
            Ok(token)
        } else {
            Err(unexpected(token, &format!("`{keyword}`")))
        }
    }

    fn parse_f64(&mut self, what: &str) -> IoResult<f64> {
        let token = self.next_or("number")?;
        token.text.parse().map_err(|_| {
            IoError::syntax(token.line, format!("invalid {what} `{}`", token.text))
        })
    }

    fn number(&mut self, what: &str) -> IoResult<f64> {
        let value = self.parse_f64(what)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(IoError::NonFiniteCoordinate {
                triangle: self.mesh.triangles.len(),
            })
        }
    }
}

fn unexpected(token: Token<'_>, expected: &str) -> IoError {
    IoError::syntax(
        token.line,
        format!("expected {expected}, found `{}`", token.text),
    )
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::unnecessary_raw_string_hashes
)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use mesh_types::MeshTopology;

    type Facet = [[f32; 3]; 3];

    const UNIT_TRIANGLE: Facet = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];

    fn binary_stl(header: &[u8], facets: &[Facet]) -> Vec<u8> {
        let mut bytes = vec![0u8; HEADER_SIZE];
        bytes[..header.len()].copy_from_slice(header);
        bytes.extend_from_slice(&u32::try_from(facets.len()).unwrap().to_le_bytes());
        for facet in facets {
            for c in [0.0_f32, 0.0, 1.0] {
                bytes.extend_from_slice(&c.to_le_bytes());
            }
            for corner in facet {
                for c in corner {
                    bytes.extend_from_slice(&c.to_le_bytes());
                }
            }
            bytes.extend_from_slice(&0u16.to_le_bytes());
        }
        bytes
    }

    const ASCII_TRIANGLE: &[u8] = br#"solid test
  facet normal 0 0 1
    outer loop
      vertex 0 0 0
      vertex 1 0 0
      vertex 0 1 0
    endloop
  endfacet
endsolid test"#;

    #[test]
    fn binary_single_triangle() {
        let bytes = binary_stl(&[], &[UNIT_TRIANGLE]);
        assert_eq!(bytes.len(), 134);

        let mesh = decode_stl(&bytes).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangles, vec![[0, 1, 2]]);
        assert_relative_eq!(mesh.vertices[1].position.x, 1.0);
        assert_relative_eq!(mesh.vertices[2].position.y, 1.0);
    }

    #[test]
    fn binary_keeps_shared_corners_separate() {
        let second: Facet = [[1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]];
        let mesh = decode_stl(&binary_stl(&[], &[UNIT_TRIANGLE, second])).unwrap();

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangles, vec![[0, 1, 2], [3, 4, 5]]);
        assert_eq!(mesh.vertices[1], mesh.vertices[3]);
    }

    #[test]
    fn binary_zero_triangles() {
        let mesh = decode_stl(&binary_stl(&[], &[])).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
    }

    #[test]
    fn binary_too_short() {
        let err = decode_stl(&[0u8; 40]).unwrap_err();
        assert!(matches!(err, IoError::TooShort { len: 40 }));
        assert!(err.is_malformed());
    }

    #[test]
    fn binary_truncated_is_size_mismatch() {
        let mut bytes = binary_stl(&[], &[UNIT_TRIANGLE, UNIT_TRIANGLE]);
        bytes.truncate(bytes.len() - 1);
        let err = decode_stl(&bytes).unwrap_err();
        assert!(matches!(
            err,
            IoError::SizeMismatch {
                triangles: 2,
                expected: 184,
                actual: 183
            }
        ));
    }

    #[test]
    fn binary_trailing_bytes_are_rejected() {
        let mut bytes = binary_stl(&[], &[UNIT_TRIANGLE]);
        bytes.push(0);
        assert!(matches!(
            decode_stl(&bytes),
            Err(IoError::SizeMismatch { .. })
        ));
    }

    #[test]
    fn binary_non_finite_coordinate() {
        let bad: Facet = [[0.0, 0.0, 0.0], [f32::NAN, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let err = decode_stl(&binary_stl(&[], &[UNIT_TRIANGLE, bad])).unwrap_err();
        assert!(matches!(err, IoError::NonFiniteCoordinate { triangle: 1 }));
    }

    #[test]
    fn binary_with_solid_header_stays_binary() {
        let bytes = binary_stl(b"solid exported by some CAD tool", &[UNIT_TRIANGLE]);
        assert_eq!(detect_encoding(&bytes), StlEncoding::Binary);
        assert_eq!(decode_stl(&bytes).unwrap().triangle_count(), 1);
    }

    #[test]
    fn ascii_single_triangle() {
        assert_eq!(detect_encoding(ASCII_TRIANGLE), StlEncoding::Ascii);
        let mesh = decode_stl(ASCII_TRIANGLE).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn ascii_matches_binary_decode() {
        let ascii = decode_stl(ASCII_TRIANGLE).unwrap();
        let binary = decode_stl(&binary_stl(&[], &[UNIT_TRIANGLE])).unwrap();
        assert_eq!(ascii, binary);
    }

    #[test]
    fn ascii_scientific_and_mixed_case() {
        let text = br#"  SOLID part
FACET NORMAL 0.0e0 0.0e0 1.0e0
OUTER LOOP
VERTEX -1.5e1 2.5 3
VERTEX 1 0 0
VERTEX 0 1 0
ENDLOOP
ENDFACET
ENDSOLID part
"#;
        let mesh = decode_stl(text).unwrap();
        assert_relative_eq!(mesh.vertices[0].position.x, -15.0);
        assert_relative_eq!(mesh.vertices[0].position.y, 2.5);
        assert_relative_eq!(mesh.vertices[0].position.z, 3.0);
    }

    #[test]
    fn ascii_multiple_solids_concatenate() {
        let mut text = ASCII_TRIANGLE.to_vec();
        text.push(b'\n');
        text.extend_from_slice(ASCII_TRIANGLE);
        let mesh = decode_stl(&text).unwrap();
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.triangles[1], [3, 4, 5]);
    }

    #[test]
    fn ascii_empty_solid() {
        let mesh = decode_stl(b"solid empty\nendsolid empty\n").unwrap();
        assert!(mesh.is_empty());
    }

    #[test]
    fn ascii_non_numeric_coordinate() {
        let text = String::from_utf8(ASCII_TRIANGLE.to_vec())
            .unwrap()
            .replace("vertex 1 0 0", "vertex one 0 0");
        let err = decode_stl(text.as_bytes()).unwrap_err();
        match err {
            IoError::Syntax { line, message } => {
                assert_eq!(line, 5);
                assert!(message.contains("`one`"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn ascii_missing_endloop() {
        let text = String::from_utf8(ASCII_TRIANGLE.to_vec())
            .unwrap()
            .replace("endloop", "");
        assert!(matches!(
            decode_stl(text.as_bytes()),
            Err(IoError::Syntax { .. })
        ));
    }

    #[test]
    fn ascii_missing_endsolid() {
        let text = String::from_utf8(ASCII_TRIANGLE.to_vec())
            .unwrap()
            .replace("endsolid test", "");
        assert!(matches!(
            decode_stl(text.as_bytes()),
            Err(IoError::UnexpectedEof {
                expected: "endsolid"
            })
        ));
    }

    #[test]
    fn ascii_four_vertex_loop() {
        let text = String::from_utf8(ASCII_TRIANGLE.to_vec())
            .unwrap()
            .replace("vertex 0 1 0", "vertex 0 1 0\n      vertex 1 1 0");
        let err = decode_stl(text.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("more than three vertices"));
    }

    #[test]
    fn ascii_two_vertex_loop() {
        let text = String::from_utf8(ASCII_TRIANGLE.to_vec())
            .unwrap()
            .replace("vertex 0 1 0", "");
        assert!(decode_stl(text.as_bytes()).is_err());
    }

    #[test]
    fn ascii_non_finite_coordinate() {
        let text = String::from_utf8(ASCII_TRIANGLE.to_vec())
            .unwrap()
            .replace("vertex 1 0 0", "vertex inf 0 0");
        assert!(matches!(
            decode_stl(text.as_bytes()),
            Err(IoError::NonFiniteCoordinate { triangle: 0 })
        ));
    }

    #[test]
    fn ascii_trailing_garbage() {
        let mut text = ASCII_TRIANGLE.to_vec();
        text.extend_from_slice(b"\nfacet");
        assert!(matches!(
            decode_stl(&text),
            Err(IoError::Syntax { line: 10, .. })
        ));
    }

    #[test]
    fn nan_normal_is_ignored_in_both_encodings() {
        let text = String::from_utf8(ASCII_TRIANGLE.to_vec())
            .unwrap()
            .replace("facet normal 0 0 1", "facet normal nan nan nan");
        let ascii = decode_stl(text.as_bytes()).unwrap();

        let mut bytes = binary_stl(&[], &[UNIT_TRIANGLE]);
        for offset in [PREAMBLE_SIZE, PREAMBLE_SIZE + 4, PREAMBLE_SIZE + 8] {
            bytes[offset..offset + 4].copy_from_slice(&f32::NAN.to_le_bytes());
        }
        let binary = decode_stl(&bytes).unwrap();

        assert_eq!(ascii.triangle_count(), 1);
        assert_eq!(ascii, binary);
    }

    #[test]
    fn ascii_malformed_normal_is_still_rejected() {
        let text = String::from_utf8(ASCII_TRIANGLE.to_vec())
            .unwrap()
            .replace("facet normal 0 0 1", "facet normal 0 up 1");
        assert!(matches!(
            decode_stl(text.as_bytes()),
            Err(IoError::Syntax { line: 2, .. })
        ));
    }

    #[test]
    fn solid_prefix_must_be_a_whole_token() {
        assert_eq!(detect_encoding(b"solidity is not a keyword"), StlEncoding::Binary);
    }

    #[test]
    fn load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.stl");
        std::fs::write(&path, binary_stl(&[], &[UNIT_TRIANGLE])).unwrap();

        let mesh = load_stl(&path).unwrap();
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_stl("nonexistent_file_12345.stl");
        match result {
            Err(IoError::FileNotFound { path }) => {
                assert!(path.to_string_lossy().contains("nonexistent"));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }
}
