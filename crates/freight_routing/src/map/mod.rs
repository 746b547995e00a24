pub mod map_geometry;

pub use map_geometry::MapGeometry;
