//! Benchmarks for STL decoding.
//!
//! Run with: cargo bench -p mesh-io
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-io -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-io -- --baseline main

#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use mesh_io::decode_stl;
use std::fmt::Write;

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Corners of a `size` x `size` grid of quads, two triangles each.
fn grid_facets(size: u32) -> Vec<[[f32; 3]; 3]> {
    let mut facets = Vec::with_capacity((size * size * 2) as usize);
    for i in 0..size {
        for j in 0..size {
            let (x, y) = (i as f32, j as f32);
            let z = (x * 0.1).sin() * (y * 0.1).cos();
            facets.push([[x, y, z], [x + 1.0, y, z], [x, y + 1.0, z]]);
            facets.push([[x + 1.0, y, z], [x + 1.0, y + 1.0, z], [x, y + 1.0, z]]);
        }
    }
    facets
}

fn binary_stl(facets: &[[[f32; 3]; 3]]) -> Vec<u8> {
    let mut bytes = vec![0u8; 80];
    bytes.extend_from_slice(&(facets.len() as u32).to_le_bytes());
    for facet in facets {
        bytes.extend_from_slice(&[0u8; 12]);
        for c in facet.iter().flatten() {
            bytes.extend_from_slice(&c.to_le_bytes());
        }
        bytes.extend_from_slice(&[0u8; 2]);
    }
    bytes
}

fn ascii_stl(facets: &[[[f32; 3]; 3]]) -> Vec<u8> {
    let mut text = String::from("solid grid\n");
    for facet in facets {
        text.push_str("  facet normal 0 0 1\n    outer loop\n");
        for [x, y, z] in facet {
            let _ = writeln!(text, "      vertex {x:.6e} {y:.6e} {z:.6e}");
        }
        text.push_str("    endloop\n  endfacet\n");
    }
    text.push_str("endsolid grid\n");
    text.into_bytes()
}

// =============================================================================
// Decode Benchmarks
// =============================================================================

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    let facets = grid_facets(64); // 8192 triangles
    let binary = binary_stl(&facets);
    let ascii = ascii_stl(&facets);

    group.throughput(Throughput::Elements(facets.len() as u64));

    group.bench_function("binary", |b| b.iter(|| decode_stl(black_box(&binary))));
    group.bench_function("ascii", |b| b.iter(|| decode_stl(black_box(&ascii))));

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_decode);
criterion_main!(benches);
