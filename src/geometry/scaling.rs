use crate::domain::Point;

/// Maps map-plane coordinates onto a physical print area in mm
///
/// The square region `[-radius, radius]²` lands on `[0, target_mm]²`.
#[derive(Debug, Clone)]
pub struct Scaler {
    /// Scale factor: mm per map unit
    scale: f64,
    /// Offset moving the origin to the middle of the print area
    offset: f64,
}

impl Scaler {
    pub fn for_region(radius: f64, target_mm: f64) -> Self {
        let scale = if radius > 0.0 {
            target_mm / (2.0 * radius)
        } else {
            1.0
        };

        Self {
            scale,
            offset: target_mm / 2.0,
        }
    }

    /// Scale a point to mm as f32 for STL output
    pub fn scale(&self, point: Point) -> (f32, f32) {
        let x = point.x * self.scale + self.offset;
        let y = point.y * self.scale + self.offset;
        (x as f32, y as f32)
    }

    pub fn scale_points(&self, points: &[Point]) -> Vec<(f32, f32)> {
        points.iter().map(|&p| self.scale(p)).collect()
    }
}
