//! Waterfront polygon generation.
//!
//! A waterline is walked from one border point to another, then closed into
//! a polygon by following the border clockwise.

pub mod assembler;
pub mod closer;
pub mod error;
pub mod sampler;
pub mod walk;
pub mod weights;

pub use assembler::assemble;
pub use closer::close;
pub use error::WaterlineError;
pub use sampler::WeightedDirectionSampler;
pub use walk::{RandomWalkPathBuilder, WalkPhase, WalkState};
pub use weights::{HeadingWeightModel, StepContext};

use rand::Rng;

use crate::config::WaterlineConfig;
use crate::domain::{Point, Polygon, Segment, Waterline};
use crate::geometry::Square;

/// A finished body of water
#[derive(Debug, Clone)]
pub struct WaterBody {
    pub radius: f64,
    pub waterline: Waterline,
    pub closing: Vec<Segment>,
    pub polygon: Polygon,
}

impl WaterBody {
    pub fn area(&self) -> f64 {
        self.polygon.area()
    }

    pub fn waterline_length(&self) -> f64 {
        self.waterline.length()
    }

    pub fn is_clockwise(&self) -> bool {
        self.polygon.is_clockwise()
    }
}

/// Entry point tying the walk, the border closing and the assembly together
#[derive(Debug, Clone)]
pub struct WaterGenerator {
    radius: f64,
    config: WaterlineConfig,
    water_path: Option<Vec<Point>>,
}

impl WaterGenerator {
    pub fn new(radius: f64, config: WaterlineConfig) -> Self {
        Self {
            radius,
            config,
            water_path: None,
        }
    }

    /// Use a fixed waterline instead of walking one
    pub fn with_water_path(mut self, path: Vec<Point>) -> Self {
        self.water_path = Some(path);
        self
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<WaterBody, WaterlineError> {
        self.validate()?;

        if let Some(path) = &self.water_path {
            let waterline = self.supplied_waterline(path)?;
            return self.finish(waterline);
        }

        let square = Square::new(self.radius);
        let mut last_error = None;
        for attempt in 0..=self.config.max_path_retries {
            let start = square.random_border_point(rng);
            match self.generate_from(start, rng) {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() => {
                    log::debug!("path attempt {} failed: {}", attempt + 1, e);
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or(WaterlineError::PathGenerationStalled {
            attempts: self.config.max_attempts,
            segments: 0,
        }))
    }

    /// Walk from a fixed start point; no retries
    pub fn generate_from<R: Rng + ?Sized>(
        &self,
        start: Point,
        rng: &mut R,
    ) -> Result<WaterBody, WaterlineError> {
        self.validate()?;
        let waterline = RandomWalkPathBuilder::new(&self.config, self.radius).build(start, rng)?;
        self.finish(waterline)
    }

    fn validate(&self) -> Result<(), WaterlineError> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(WaterlineError::InvalidRadius(self.radius));
        }
        self.config.validate()
    }

    fn supplied_waterline(&self, path: &[Point]) -> Result<Waterline, WaterlineError> {
        if path.len() < 2 {
            return Err(WaterlineError::InvalidWaterPath(format!(
                "need at least 2 points, got {}",
                path.len()
            )));
        }

        let square = Square::new(self.radius);
        for (label, point) in [("first", path[0]), ("last", path[path.len() - 1])] {
            if !square.is_on_border(point) {
                return Err(WaterlineError::InvalidWaterPath(format!(
                    "{} point ({}, {}) is not on the border",
                    label, point.x, point.y
                )));
            }
        }
        if let Some(p) = path[1..path.len() - 1]
            .iter()
            .find(|p| !square.contains(**p))
        {
            return Err(WaterlineError::InvalidWaterPath(format!(
                "interior point ({}, {}) is outside the square",
                p.x, p.y
            )));
        }

        Ok(Waterline::from_points(path))
    }

    fn finish(&self, waterline: Waterline) -> Result<WaterBody, WaterlineError> {
        let (Some(start), Some(end)) = (waterline.start(), waterline.end()) else {
            return Err(WaterlineError::InvalidWaterPath(
                "waterline has no segments".to_string(),
            ));
        };

        let closing = close(start, end, self.radius);
        if closing.is_empty() {
            return Err(WaterlineError::UnsupportedEndpointConfiguration { start, end });
        }

        let polygon = assemble(&waterline, &closing);
        log::info!(
            "Water polygon: {} points, area {:.2} of {:.2}",
            polygon.len(),
            polygon.area(),
            Square::new(self.radius).side_length().powi(2)
        );

        Ok(WaterBody {
            radius: self.radius,
            waterline,
            closing,
            polygon,
        })
    }
}
