pub mod heading;
pub mod point;
pub mod water;

pub use heading::{HEADING_BUCKETS, HEADING_RESOLUTION, Heading, WeightMap};
pub use point::{Point, Segment};
pub use water::{Polygon, Waterline};
