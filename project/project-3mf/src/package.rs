//! In-memory package of typed parts.

use std::io::{Cursor, Write};

use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::error::{PackageError, PackageResult};
use crate::opc::{content_types_xml, part_extension, CONTENT_TYPES_PART};

/// One named part of a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagePart {
    /// Path inside the archive, relative, using `/` separators.
    pub path: String,
    /// Raw part content.
    pub content: Vec<u8>,
    /// Declared media type.
    pub media_type: String,
}

impl PackagePart {
    /// Create a part.
    #[must_use]
    pub fn new(
        path: impl Into<String>,
        content: impl Into<Vec<u8>>,
        media_type: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            media_type: media_type.into(),
        }
    }
}

/// Ordered collection of parts, written as a zip archive.
///
/// The content-type manifest is derived from the parts and written first;
/// the parts follow in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Package {
    parts: Vec<PackagePart>,
}

impl Package {
    /// Create an empty package.
    #[must_use]
    pub const fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Add a part.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::InvalidPartPath`] if the path is empty,
    /// absolute, uses `\` separators, has no extension, or names the
    /// content-type manifest, and [`PackageError::DuplicatePart`] if a part
    /// with the same name already exists.
    pub fn add_part(&mut self, part: PackagePart) -> PackageResult<()> {
        validate_path(&part.path)?;
        if self
            .parts
            .iter()
            .any(|p| p.path.eq_ignore_ascii_case(&part.path))
        {
            return Err(PackageError::DuplicatePart(part.path));
        }
        self.parts.push(part);
        Ok(())
    }

    /// Parts in insertion order.
    #[must_use]
    pub fn parts(&self) -> &[PackagePart] {
        &self.parts
    }

    /// Write the package as zip bytes.
    ///
    /// Every entry is deflated at `compression_level` and stamped with the
    /// fixed DOS epoch, so equal packages produce equal bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PackageError::Archive`] if the zip writer rejects an entry
    /// (including an unsupported compression level) and
    /// [`PackageError::Io`] if compression fails.
    pub fn to_zip_bytes(&self, compression_level: u8) -> PackageResult<Vec<u8>> {
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(compression_level)))
            .last_modified_time(DateTime::default());

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));

        let content_types = content_types_xml(&self.parts)?;
        write_entry(&mut zip, CONTENT_TYPES_PART, content_types.as_bytes(), options)?;

        for part in &self.parts {
            write_entry(&mut zip, &part.path, &part.content, options)?;
        }

        let bytes = zip
            .finish()
            .map_err(|e| PackageError::archive("archive directory", e))?
            .into_inner();

        debug!(
            parts = self.parts.len() + 1,
            bytes = bytes.len(),
            "Finished package archive"
        );
        Ok(bytes)
    }
}

fn write_entry(
    zip: &mut ZipWriter<Cursor<Vec<u8>>>,
    path: &str,
    content: &[u8],
    options: SimpleFileOptions,
) -> PackageResult<()> {
    zip.start_file(path, options)
        .map_err(|e| PackageError::archive(path, e))?;
    zip.write_all(content)?;
    debug!(part = path, bytes = content.len(), "Wrote package part");
    Ok(())
}

fn validate_path(path: &str) -> PackageResult<()> {
    if path.is_empty() {
        return Err(PackageError::invalid_path(path, "part name is empty"));
    }
    if path.starts_with('/') {
        return Err(PackageError::invalid_path(path, "part name must be relative"));
    }
    if path.contains('\\') {
        return Err(PackageError::invalid_path(
            path,
            "part name must use '/' separators",
        ));
    }
    if path.split('/').any(str::is_empty) {
        return Err(PackageError::invalid_path(path, "part name has an empty segment"));
    }
    if path.eq_ignore_ascii_case(CONTENT_TYPES_PART) {
        return Err(PackageError::invalid_path(path, "part name is reserved"));
    }
    part_extension(path).map(|_| ())
}
