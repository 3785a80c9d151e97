use super::Triangle;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER: &[u8] = b"waterfront - procedural water polygon";

/// Write triangles as binary STL
///
/// Layout: 80 byte header, u32 triangle count, then per triangle the normal,
/// three vertices (all little-endian f32) and a 2 byte attribute.
pub fn write_stl(path: &Path, triangles: &[Triangle]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut header = [b' '; 80];
    header[..HEADER.len()].copy_from_slice(HEADER);
    writer.write_all(&header)?;

    let count = u32::try_from(triangles.len()).context("Too many triangles for STL")?;
    writer.write_all(&count.to_le_bytes())?;

    for tri in triangles {
        for &n in &tri.normal {
            writer.write_all(&n.to_le_bytes())?;
        }
        for vertex in &tri.vertices {
            for &coord in vertex {
                writer.write_all(&coord.to_le_bytes())?;
            }
        }
        writer.write_all(&[0u8, 0u8])?;
    }

    writer.flush()?;

    Ok(())
}
