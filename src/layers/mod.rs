pub mod water;

pub use water::generate_water_mesh;
