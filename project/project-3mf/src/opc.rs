//! Open Packaging Conventions manifests.
//!
//! Every package carries a content-type manifest that maps part extensions to
//! media types, and a root relationships part that points at the primary
//! model. Both are generated here from the final list of parts.

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::{PackageError, PackageResult};
use crate::package::PackagePart;

/// Path of the content-type manifest.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Path of the root relationships part.
pub const ROOT_RELS_PART: &str = "_rels/.rels";

/// Default path of the model part.
pub const DEFAULT_MODEL_PART: &str = "3D/3dmodel.model";

/// Media type of relationship parts.
pub const RELATIONSHIPS_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-package.relationships+xml";

/// Media type of the model part.
pub const MODEL_MEDIA_TYPE: &str = "application/vnd.ms-package.3dmanufacturing-3dmodel+xml";

/// Media type of plain-text settings parts.
pub const TEXT_MEDIA_TYPE: &str = "text/plain";

/// Media type of a complete package, for callers that serve it over HTTP.
pub const PACKAGE_MEDIA_TYPE: &str = "application/vnd.ms-package.3dmanufacturing-3dmodel+xml";

/// Relationship type that marks the primary 3D model.
pub const MODEL_RELATIONSHIP_TYPE: &str =
    "http://schemas.microsoft.com/3dmanufacturing/2013/01/3dmodel";

const CONTENT_TYPES_NAMESPACE: &str =
    "http://schemas.openxmlformats.org/package/2006/content-types";
const RELATIONSHIPS_NAMESPACE: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";

/// Render the content-type manifest for a list of parts.
///
/// The first part seen with a given extension sets that extension's
/// `Default` media type. A later part whose media type differs gets an
/// `Override` entry.
///
/// # Errors
///
/// Returns [`PackageError::InvalidPartPath`] for a part without an
/// extension, or [`PackageError::Xml`] if writing fails.
pub fn content_types_xml(parts: &[PackagePart]) -> PackageResult<String> {
    let mut defaults: Vec<(&str, &str)> = Vec::new();
    let mut overrides: Vec<(&str, &str)> = Vec::new();

    for part in parts {
        let ext = part_extension(&part.path)?;
        match defaults.iter().find(|(e, _)| e.eq_ignore_ascii_case(ext)) {
            None => defaults.push((ext, part.media_type.as_str())),
            Some((_, media)) if *media != part.media_type.as_str() => {
                overrides.push((part.path.as_str(), part.media_type.as_str()));
            }
            Some(_) => {}
        }
    }

    let mut writer = Writer::new(Vec::new());
    write_decl(&mut writer, "content types")?;

    let mut types = BytesStart::new("Types");
    types.push_attribute(("xmlns", CONTENT_TYPES_NAMESPACE));
    emit(&mut writer, Event::Start(types), "content types")?;

    for (ext, media) in defaults {
        let mut entry = BytesStart::new("Default");
        entry.push_attribute(("Extension", ext));
        entry.push_attribute(("ContentType", media));
        emit(&mut writer, Event::Empty(entry), "content types")?;
    }
    for (path, media) in overrides {
        let name = format!("/{path}");
        let mut entry = BytesStart::new("Override");
        entry.push_attribute(("PartName", name.as_str()));
        entry.push_attribute(("ContentType", media));
        emit(&mut writer, Event::Empty(entry), "content types")?;
    }

    emit(&mut writer, Event::End(BytesEnd::new("Types")), "content types")?;
    finish(writer, "content types")
}

/// Render a root relationships document with one model relationship.
///
/// # Errors
///
/// Returns [`PackageError::Xml`] if writing fails.
pub fn relationships_xml(model_part: &str) -> PackageResult<String> {
    let mut writer = Writer::new(Vec::new());
    write_decl(&mut writer, "relationships")?;

    let mut root = BytesStart::new("Relationships");
    root.push_attribute(("xmlns", RELATIONSHIPS_NAMESPACE));
    emit(&mut writer, Event::Start(root), "relationships")?;

    let target = format!("/{model_part}");
    let mut rel = BytesStart::new("Relationship");
    rel.push_attribute(("Target", target.as_str()));
    rel.push_attribute(("Id", "rel0"));
    rel.push_attribute(("Type", MODEL_RELATIONSHIP_TYPE));
    emit(&mut writer, Event::Empty(rel), "relationships")?;

    emit(&mut writer, Event::End(BytesEnd::new("Relationships")), "relationships")?;
    finish(writer, "relationships")
}

/// Extension of a part path, without the dot.
pub(crate) fn part_extension(path: &str) -> PackageResult<&str> {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Ok(ext),
        _ => Err(PackageError::invalid_path(path, "part name has no extension")),
    }
}

pub(crate) fn write_decl(writer: &mut Writer<Vec<u8>>, what: &'static str) -> PackageResult<()> {
    emit(
        writer,
        Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        what,
    )
}

pub(crate) fn emit(
    writer: &mut Writer<Vec<u8>>,
    event: Event<'_>,
    what: &'static str,
) -> PackageResult<()> {
    writer
        .write_event(event)
        .map_err(|e| PackageError::xml(what, e))
}

pub(crate) fn finish(writer: Writer<Vec<u8>>, what: &'static str) -> PackageResult<String> {
    String::from_utf8(writer.into_inner()).map_err(|e| PackageError::xml(what, e))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn part(path: &str, media: &str) -> PackagePart {
        PackagePart::new(path, Vec::new(), media)
    }

    #[test]
    fn defaults_follow_first_seen_extension() {
        let parts = [
            part(ROOT_RELS_PART, RELATIONSHIPS_MEDIA_TYPE),
            part(DEFAULT_MODEL_PART, MODEL_MEDIA_TYPE),
            part("Metadata/a.config", TEXT_MEDIA_TYPE),
            part("Metadata/b.config", TEXT_MEDIA_TYPE),
        ];
        let xml = content_types_xml(&parts).unwrap();

        assert_eq!(xml.matches("<Default ").count(), 3);
        assert!(xml.contains(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#));
        assert!(xml.contains(r#"<Default Extension="model" ContentType="application/vnd.ms-package.3dmanufacturing-3dmodel+xml"/>"#));
        assert!(xml.contains(r#"<Default Extension="config" ContentType="text/plain"/>"#));
        assert!(!xml.contains("<Override"));
    }

    #[test]
    fn conflicting_media_type_gets_override() {
        let parts = [
            part("Metadata/a.config", TEXT_MEDIA_TYPE),
            part("Metadata/b.config", "application/xml"),
        ];
        let xml = content_types_xml(&parts).unwrap();
        assert!(xml.contains(
            r#"<Override PartName="/Metadata/b.config" ContentType="application/xml"/>"#
        ));
    }

    #[test]
    fn extensionless_part_is_rejected() {
        let parts = [part("Metadata/README", TEXT_MEDIA_TYPE)];
        assert!(matches!(
            content_types_xml(&parts),
            Err(PackageError::InvalidPartPath { .. })
        ));
    }

    #[test]
    fn single_model_relationship() {
        let xml = relationships_xml(DEFAULT_MODEL_PART).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert_eq!(xml.matches("<Relationship ").count(), 1);
        assert!(xml.contains(r#"Target="/3D/3dmodel.model""#));
        assert!(xml.contains(MODEL_RELATIONSHIP_TYPE));
    }

    #[test]
    fn extension_of_nested_path() {
        assert_eq!(part_extension("3D/3dmodel.model").unwrap(), "model");
        assert_eq!(part_extension("_rels/.rels").unwrap(), "rels");
        assert!(part_extension("dir.d/file").is_err());
    }
}
