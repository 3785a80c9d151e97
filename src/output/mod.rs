use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::domain::Point;
use crate::generator::WaterBody;
use crate::layers::generate_water_mesh;
use crate::mesh::write_stl;

/// File formats the generated polygon can be written as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Stl,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(OutputFormat::Json),
            Some("stl") => Ok(OutputFormat::Stl),
            _ => bail!(
                "Unsupported output format for {:?} (expected .json or .stl)",
                path
            ),
        }
    }
}

/// Physical dimensions used when writing STL
#[derive(Debug, Clone, Copy)]
pub struct PrintSize {
    pub size_mm: f32,
    pub water_height_mm: f32,
}

#[derive(Debug, Serialize)]
struct WaterDocument<'a> {
    radius: f64,
    seed: Option<u64>,
    area: f64,
    waterline_length: f64,
    waterline: Vec<Point>,
    polygon: &'a [Point],
}

/// Write the body in the format implied by the path's extension
pub fn write_water(
    path: &Path,
    body: &WaterBody,
    seed: Option<u64>,
    print: PrintSize,
) -> Result<OutputFormat> {
    let format = OutputFormat::from_path(path)?;
    match format {
        OutputFormat::Json => write_json(path, body, seed)?,
        OutputFormat::Stl => {
            let triangles = generate_water_mesh(body, print.size_mm, print.water_height_mm);
            write_stl(path, &triangles)?;
        }
    }
    Ok(format)
}

pub fn write_json(path: &Path, body: &WaterBody, seed: Option<u64>) -> Result<()> {
    let document = WaterDocument {
        radius: body.radius,
        seed,
        area: body.area(),
        waterline_length: body.waterline_length(),
        waterline: body.waterline.points(),
        polygon: body.polygon.points(),
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON file: {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &document)
        .context("Failed to write water polygon JSON")?;
    Ok(())
}

/// Read a waterline given as `[[x, y], ...]`
pub fn read_water_path(path: &Path) -> Result<Vec<Point>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read water path: {}", path.display()))?;
    let raw: Vec<[f64; 2]> =
        serde_json::from_str(&contents).context("Water path must be a JSON array of [x, y]")?;
    Ok(raw.into_iter().map(Point::from).collect())
}
