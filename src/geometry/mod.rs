pub mod border;
pub mod orientation;
pub mod scaling;

pub use border::{Side, Square};
pub use orientation::{Orientation, orientation, segments_intersect};
pub use scaling::Scaler;
