pub mod builder;
pub mod extrusion;
pub mod stl;

pub use builder::Triangle;
pub use extrusion::{extrude_polygon, triangulate};
pub use stl::write_stl;
