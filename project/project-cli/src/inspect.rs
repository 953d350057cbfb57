//! `inspect` command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use mesh_io::{decode_stl, detect_encoding};
use mesh_types::MeshTopology;
use owo_colors::OwoColorize;

pub fn run(path: &Path) -> Result<()> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let encoding = detect_encoding(&bytes);
    let mesh = decode_stl(&bytes).with_context(|| format!("failed to decode {}", path.display()))?;

    println!("{}", path.display().bold());
    println!("  encoding   {encoding}");
    println!("  bytes      {}", bytes.len());
    println!("  triangles  {}", mesh.triangle_count());
    println!("  vertices   {}", mesh.vertex_count());

    match mesh.bounds() {
        Some((min, max)) => {
            let size = max - min;
            println!(
                "  bounds     ({:.3}, {:.3}, {:.3}) .. ({:.3}, {:.3}, {:.3})",
                min.x, min.y, min.z, max.x, max.y, max.z
            );
            println!(
                "  size       {:.3} x {:.3} x {:.3} mm",
                size.x, size.y, size.z
            );
        }
        None => println!("  bounds     {}", "(empty)".dimmed()),
    }
    Ok(())
}
