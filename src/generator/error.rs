use thiserror::Error;

use crate::domain::Point;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WaterlineError {
    #[error("weight map has no positive entries")]
    InvalidWeightMap,

    #[error("heading weights at {point:?} are all zero")]
    DegenerateWeightMap { point: Point },

    #[error("path generation stalled after {attempts} rejected candidates ({segments} segments accepted)")]
    PathGenerationStalled { attempts: u32, segments: usize },

    #[error("endpoints {start:?} and {end:?} lie on the same border side")]
    UnsupportedEndpointConfiguration { start: Point, end: Point },

    #[error("start point {point:?} is not on the border")]
    StartOffBorder { point: Point },

    #[error("radius must be a positive finite number, got {0}")]
    InvalidRadius(f64),

    #[error("invalid water path: {0}")]
    InvalidWaterPath(String),

    #[error("invalid waterline config: {0}")]
    InvalidConfig(String),
}

impl WaterlineError {
    /// Failures worth another attempt from a fresh start point
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            WaterlineError::PathGenerationStalled { .. }
                | WaterlineError::UnsupportedEndpointConfiguration { .. }
        )
    }
}
