//! Read assembled packages back through a zip reader and an XML parser.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::{Cursor, Read};

use approx::assert_relative_eq;
use mesh_types::{MeshModel, Point3};
use project_3mf::{
    assemble, serialize_model, PackageParams, CONTENT_TYPES_PART, DEFAULT_MODEL_PART,
    MODEL_RELATIONSHIP_TYPE, ROOT_RELS_PART,
};
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

fn tetrahedron() -> MeshModel {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(10.0, 0.0, 0.0);
    let c = Point3::new(0.0, 10.0, 0.0);
    let d = Point3::new(0.0, 0.0, 10.0);
    let mut mesh = MeshModel::new();
    for facet in [[a, c, b], [a, b, d], [a, d, c], [b, c, d]] {
        mesh.push_facet(facet);
    }
    mesh
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut text = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut text)
        .unwrap();
    text
}

/// Collect the attributes of every empty element with the given name.
fn elements(xml: &str, name: &[u8]) -> Vec<Vec<(String, String)>> {
    let mut reader = Reader::from_str(xml);
    let mut found = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Empty(e) if e.name().as_ref() == name => {
                let attrs = e
                    .attributes()
                    .map(|a| {
                        let a = a.unwrap();
                        (
                            String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
                            a.unescape_value().unwrap().into_owned(),
                        )
                    })
                    .collect();
                found.push(attrs);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    found
}

fn build_package() -> Vec<u8> {
    let params = PackageParams::default();
    let model = serialize_model(&tetrahedron(), &params.metadata("tetra")).unwrap();
    assemble(&model, "wall_loops = 3\n", "tetra.stl", &params)
        .unwrap()
        .bytes
}

#[test]
fn model_part_parses_and_keeps_soup() {
    let bytes = build_package();
    let xml = read_part(&bytes, DEFAULT_MODEL_PART);

    let vertices = elements(&xml, b"vertex");
    let triangles = elements(&xml, b"triangle");
    assert_eq!(vertices.len(), 12);
    assert_eq!(triangles.len(), 4);

    for vertex in &vertices {
        for (_, value) in vertex {
            let (_, decimals) = value.split_once('.').expect("fixed-point coordinate");
            assert_eq!(decimals.len(), 6, "coordinate {value}");
        }
    }

    let x: f64 = vertices[1][0].1.parse().unwrap();
    assert_relative_eq!(x, 0.0);
    let y: f64 = vertices[1][1].1.parse().unwrap();
    assert_relative_eq!(y, 10.0);

    for (i, triangle) in triangles.iter().enumerate() {
        let indices: Vec<usize> = triangle.iter().map(|(_, v)| v.parse().unwrap()).collect();
        assert_eq!(indices, [3 * i, 3 * i + 1, 3 * i + 2]);
    }
}

#[test]
fn manifests_describe_the_parts() {
    let bytes = build_package();

    let types = read_part(&bytes, CONTENT_TYPES_PART);
    let defaults = elements(&types, b"Default");
    let extensions: Vec<_> = defaults.iter().map(|d| d[0].1.as_str()).collect();
    assert_eq!(extensions, ["rels", "model", "config"]);

    let rels = read_part(&bytes, ROOT_RELS_PART);
    let relationships = elements(&rels, b"Relationship");
    assert_eq!(relationships.len(), 1);
    assert!(relationships[0]
        .iter()
        .any(|(k, v)| k == "Type" && v == MODEL_RELATIONSHIP_TYPE));
    assert!(relationships[0]
        .iter()
        .any(|(k, v)| k == "Target" && v == "/3D/3dmodel.model"));
}

#[test]
fn identical_inputs_give_identical_archives() {
    assert_eq!(build_package(), build_package());
}

#[test]
fn compression_level_does_not_change_content() {
    let model = serialize_model(&tetrahedron(), &PackageParams::default().metadata("t")).unwrap();
    let fast = assemble(&model, "x = 1\n", "t.stl", &PackageParams::fast()).unwrap();
    let small = assemble(&model, "x = 1\n", "t.stl", &PackageParams::smallest()).unwrap();

    assert_eq!(
        read_part(&fast.bytes, DEFAULT_MODEL_PART),
        read_part(&small.bytes, DEFAULT_MODEL_PART)
    );
    assert_eq!(fast.file_name, small.file_name);
}
