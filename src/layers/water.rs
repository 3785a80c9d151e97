use crate::generator::WaterBody;
use crate::geometry::Scaler;
use crate::mesh::{Triangle, extrude_polygon};

/// Solid slab in the shape of the water polygon, sized to a `size_mm` print area
pub fn generate_water_mesh(body: &WaterBody, size_mm: f32, z_top: f32) -> Vec<Triangle> {
    if body.polygon.len() < 3 {
        return Vec::new();
    }

    let scaler = Scaler::for_region(body.radius, f64::from(size_mm));
    let ring = scaler.scale_points(body.polygon.points());

    extrude_polygon(&ring, 0.0, z_top)
}
