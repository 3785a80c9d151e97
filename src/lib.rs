//! waterfront - procedural waterfront polygons for square city map regions

pub mod config;
pub mod domain;
pub mod generator;
pub mod geometry;
pub mod layers;
pub mod mesh;
pub mod output;

pub use domain::{Point, Polygon, Segment, Waterline};
pub use generator::{WaterBody, WaterGenerator, WaterlineError};
