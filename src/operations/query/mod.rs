mod boundary;
mod interpolate;
mod intersect;

pub use boundary::{PolygonBottom, PolygonTop};
pub use interpolate::PolylineValueAt;
pub use intersect::{PolylineIntersect, PolylineIntersection};

use crate::error::Result;
use crate::geometry::Polyline;
use crate::math::Point2;

/// Intersection points of two polylines, sorted by x. See [`PolylineIntersect`].
///
/// # Errors
///
/// Returns an error if the intersection is of an unsupported kind.
pub fn polyline_intersections(line1: &Polyline, line2: &Polyline) -> Result<Vec<Point2>> {
    PolylineIntersect::new(line1, line2).execute()
}

/// Upper boundary of a clockwise polygon. See [`PolygonTop`].
///
/// # Errors
///
/// Returns an error for an empty outline or non-finite vertices.
pub fn top_of_polygon(points: &[Point2]) -> Result<Vec<Point2>> {
    PolygonTop::new(points).execute()
}

/// Lower boundary of a clockwise polygon. See [`PolygonBottom`].
///
/// # Errors
///
/// Returns an error for an empty outline or non-finite vertices.
pub fn bottom_of_polygon(points: &[Point2]) -> Result<Vec<Point2>> {
    PolygonBottom::new(points).execute()
}

/// Value of the polyline at `x`. See [`PolylineValueAt`].
///
/// # Errors
///
/// Returns an error if `x` is outside the polyline or on a vertical segment.
pub fn polyline_z_at(polyline: &Polyline, x: f64) -> Result<f64> {
    PolylineValueAt::new(polyline, x).execute()
}
