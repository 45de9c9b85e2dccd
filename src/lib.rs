pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod text;

pub use error::{GeolibError, GeometryError, Result};
pub use geometry::Polyline;
pub use math::Point2;
pub use operations::query::{
    bottom_of_polygon, polyline_intersections, polyline_z_at, top_of_polygon,
};
