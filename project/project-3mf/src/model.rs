//! 3MF model document serialization.
//!
//! The document declares millimeter units, one mesh object with id `1`, and a
//! build item placing that object without a transform. Vertex coordinates are
//! written in fixed-point with six decimals, so the same mesh always yields
//! the same bytes.

use mesh_types::{MeshModel, MeshTopology};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::debug;

use crate::error::{PackageError, PackageResult};
use crate::opc::{emit, finish, write_decl};
use crate::params::ModelMetadata;

/// 3MF core namespace URI.
pub const MODEL_NAMESPACE: &str = "http://schemas.microsoft.com/3dmanufacturing/core/2015/02";

const WHAT: &str = "model document";

/// Render a mesh as a 3MF model document.
///
/// # Errors
///
/// Returns [`PackageError::InvalidMesh`] if a triangle references a missing
/// vertex, [`PackageError::NonFiniteVertex`] for a NaN or infinite
/// coordinate, and [`PackageError::Xml`] if writing fails.
///
/// # Example
///
/// ```
/// use mesh_types::{MeshModel, Point3};
/// use project_3mf::{serialize_model, ModelMetadata};
///
/// let mut mesh = MeshModel::new();
/// mesh.push_facet([
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.0, 0.0),
///     Point3::new(0.0, 1.0, 0.0),
/// ]);
///
/// let xml = serialize_model(&mesh, &ModelMetadata::titled("part")).unwrap();
/// assert!(xml.contains(r#"<vertex x="1.000000" y="0.000000" z="0.000000"/>"#));
/// assert!(xml.contains(r#"<triangle v1="0" v2="1" v3="2"/>"#));
/// ```
pub fn serialize_model(mesh: &MeshModel, metadata: &ModelMetadata) -> PackageResult<String> {
    if let Some(err) = mesh.first_invalid_index() {
        return Err(err.into());
    }
    if let Some(index) = mesh.vertices.iter().position(|v| !v.is_finite()) {
        return Err(PackageError::NonFiniteVertex { index });
    }

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    write_decl(&mut writer, WHAT)?;

    let mut model = BytesStart::new("model");
    model.push_attribute(("unit", "millimeter"));
    model.push_attribute(("xml:lang", "en-US"));
    model.push_attribute(("xmlns", MODEL_NAMESPACE));
    emit(&mut writer, Event::Start(model), WHAT)?;

    for (name, value) in [
        ("Title", &metadata.title),
        ("Designer", &metadata.designer),
        ("Application", &metadata.application),
    ] {
        if value.is_empty() {
            continue;
        }
        let mut entry = BytesStart::new("metadata");
        entry.push_attribute(("name", name));
        emit(&mut writer, Event::Start(entry), WHAT)?;
        emit(&mut writer, Event::Text(BytesText::new(value)), WHAT)?;
        emit(&mut writer, Event::End(BytesEnd::new("metadata")), WHAT)?;
    }

    emit(&mut writer, Event::Start(BytesStart::new("resources")), WHAT)?;

    let mut object = BytesStart::new("object");
    object.push_attribute(("id", "1"));
    object.push_attribute(("type", "model"));
    emit(&mut writer, Event::Start(object), WHAT)?;
    emit(&mut writer, Event::Start(BytesStart::new("mesh")), WHAT)?;

    emit(&mut writer, Event::Start(BytesStart::new("vertices")), WHAT)?;
    for v in mesh.vertices() {
        let [x, y, z] = v.coords();
        let mut vertex = BytesStart::new("vertex");
        vertex.push_attribute(("x", format!("{x:.6}").as_str()));
        vertex.push_attribute(("y", format!("{y:.6}").as_str()));
        vertex.push_attribute(("z", format!("{z:.6}").as_str()));
        emit(&mut writer, Event::Empty(vertex), WHAT)?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("vertices")), WHAT)?;

    emit(&mut writer, Event::Start(BytesStart::new("triangles")), WHAT)?;
    for [v1, v2, v3] in mesh.triangles() {
        let mut triangle = BytesStart::new("triangle");
        triangle.push_attribute(("v1", v1.to_string().as_str()));
        triangle.push_attribute(("v2", v2.to_string().as_str()));
        triangle.push_attribute(("v3", v3.to_string().as_str()));
        emit(&mut writer, Event::Empty(triangle), WHAT)?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("triangles")), WHAT)?;

    emit(&mut writer, Event::End(BytesEnd::new("mesh")), WHAT)?;
    emit(&mut writer, Event::End(BytesEnd::new("object")), WHAT)?;
    emit(&mut writer, Event::End(BytesEnd::new("resources")), WHAT)?;

    emit(&mut writer, Event::Start(BytesStart::new("build")), WHAT)?;
    let mut item = BytesStart::new("item");
    item.push_attribute(("objectid", "1"));
    emit(&mut writer, Event::Empty(item), WHAT)?;
    emit(&mut writer, Event::End(BytesEnd::new("build")), WHAT)?;

    emit(&mut writer, Event::End(BytesEnd::new("model")), WHAT)?;

    let xml = finish(writer, WHAT)?;
    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        bytes = xml.len(),
        "Serialized model document"
    );
    Ok(xml)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use mesh_types::{Point3, Vertex};

    use super::*;

    fn triangle() -> MeshModel {
        let mut mesh = MeshModel::new();
        mesh.push_facet([
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]);
        mesh
    }

    #[test]
    fn document_structure() {
        let xml = serialize_model(&triangle(), &ModelMetadata::titled("cube")).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"unit="millimeter""#));
        assert!(xml.contains(r#"xml:lang="en-US""#));
        assert!(xml.contains(MODEL_NAMESPACE));
        assert!(xml.contains(r#"<metadata name="Title">cube</metadata>"#));
        assert!(xml.contains(r#"<metadata name="Application">IntelliSlice AI</metadata>"#));
        assert!(xml.contains(r#"<item objectid="1"/>"#));
        assert!(!xml.contains("transform"));
        assert!(xml.trim_end().ends_with("</model>"));
    }

    #[test]
    fn coordinates_have_six_decimals() {
        let mut mesh = MeshModel::new();
        mesh.push_facet([
            Point3::new(-12.345_678_4, 0.5, 1e-9),
            Point3::new(1e6, 2.0, -3.0),
            Point3::new(0.125, 0.25, 0.375),
        ]);
        let xml = serialize_model(&mesh, &ModelMetadata::default()).unwrap();
        assert!(xml.contains(r#"x="-12.345678""#));
        assert!(xml.contains(r#"z="0.000000""#));
        assert!(xml.contains(r#"x="1000000.000000""#));
    }

    #[test]
    fn empty_metadata_is_omitted() {
        let xml = serialize_model(&triangle(), &ModelMetadata::default()).unwrap();
        assert!(!xml.contains("<metadata"));
    }

    #[test]
    fn metadata_is_escaped() {
        let xml = serialize_model(&triangle(), &ModelMetadata::titled("a<b & c")).unwrap();
        assert!(xml.contains("a&lt;b &amp; c"));
    }

    #[test]
    fn output_is_byte_identical() {
        let mesh = triangle();
        let meta = ModelMetadata::titled("part");
        assert_eq!(
            serialize_model(&mesh, &meta).unwrap(),
            serialize_model(&mesh, &meta).unwrap()
        );
    }

    #[test]
    fn rejects_out_of_range_index() {
        let mut mesh = triangle();
        mesh.triangles.push([0, 1, 7]);
        let err = serialize_model(&mesh, &ModelMetadata::default()).unwrap_err();
        assert!(matches!(err, PackageError::InvalidMesh(e) if e.index == 7));
    }

    #[test]
    fn rejects_non_finite_vertex() {
        let mut mesh = triangle();
        mesh.vertices[1] = Vertex::from_coords(f64::NAN, 0.0, 0.0);
        let err = serialize_model(&mesh, &ModelMetadata::default()).unwrap_err();
        assert!(matches!(err, PackageError::NonFiniteVertex { index: 1 }));
    }

    #[test]
    fn empty_mesh_still_has_object_and_build() {
        let xml = serialize_model(&MeshModel::new(), &ModelMetadata::default()).unwrap();
        assert!(xml.contains("<object id=\"1\" type=\"model\">"));
        assert!(xml.contains("<item objectid=\"1\"/>"));
    }
}
