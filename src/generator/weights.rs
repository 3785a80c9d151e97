//! Heading preferences for one step of the waterline walk.
//!
//! Every bucket falls into exactly one class, tested in priority order:
//! near the way back, near the center, near the closest border, or none.
//! The closest border never counts the side the walk started from, since
//! the walk may not exit there.

use crate::config::{WaterlineConfig, WeightConfig};
use crate::domain::heading::{angular_distance, heading_between};
use crate::domain::{Heading, Point, WeightMap};
use crate::geometry::Square;

/// Where the walk currently stands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepContext {
    /// First point of the walk, on the border
    pub start: Point,
    pub current: Point,
    /// Heading of the last accepted segment, `None` before the first step
    pub previous_heading: Option<Heading>,
    pub accumulated_length: f64,
    pub radius: f64,
}

/// Builds a [`WeightMap`] from a [`StepContext`]
#[derive(Debug, Clone)]
pub struct HeadingWeightModel {
    tolerance: f64,
    center_ban_ratio: f64,
    border_seek_ratio: f64,
    weights: WeightConfig,
}

impl HeadingWeightModel {
    pub fn new(config: &WaterlineConfig) -> Self {
        Self {
            tolerance: config.heading_tolerance_deg,
            center_ban_ratio: config.center_ban_ratio,
            border_seek_ratio: config.border_seek_ratio,
            weights: config.weights,
        }
    }

    pub fn build(&self, ctx: &StepContext) -> WeightMap {
        let to_previous = ctx.previous_heading.map(|h| h.reversed());
        let to_center = heading_to_center(ctx.current);
        let to_border = heading_to_closest_border(ctx.current, ctx.start, ctx.radius);

        let center_weight = if ctx.current.distance_to(&Point::ORIGIN) / ctx.radius
            > self.center_ban_ratio
        {
            0
        } else {
            self.weights.center
        };
        let border_weight = if ctx.accumulated_length / ctx.radius > self.border_seek_ratio {
            self.weights.border_seek
        } else {
            self.weights.border
        };

        Heading::all()
            .map(|heading| {
                let d = heading.degrees();
                let weight = if let Some(back) = to_previous
                    && angular_distance(d, back.degrees()) <= self.tolerance
                {
                    if heading == back {
                        0
                    } else {
                        self.weights.previous
                    }
                } else if let Some(center) = to_center
                    && angular_distance(d, center) <= self.tolerance
                {
                    center_weight
                } else if angular_distance(d, to_border) <= self.tolerance {
                    border_weight
                } else {
                    self.weights.default
                };
                (heading, weight)
            })
            .collect()
    }
}

/// Heading toward the origin; undefined at the origin itself
pub fn heading_to_center(point: Point) -> Option<f64> {
    if point == Point::ORIGIN {
        None
    } else {
        Some(heading_between(point, Point::ORIGIN))
    }
}

/// Heading toward the perpendicular foot on the nearest side the walk may exit through
pub fn heading_to_closest_border(point: Point, start: Point, radius: f64) -> f64 {
    let square = Square::new(radius);
    square
        .nearest_side(point, &square.sides_of(start))
        .outward_heading()
}
