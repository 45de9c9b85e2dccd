use crate::error::{GeometryError, Result};
use crate::geometry::Polyline;

/// Evaluates a polyline as a function of x by linear interpolation.
///
/// Segments are scanned in vertex order and the first one with
/// `x_start <= x <= x_end` is used, so only polylines running left to right
/// are evaluated over their full extent.
pub struct PolylineValueAt<'a> {
    polyline: &'a Polyline,
    x: f64,
}

impl<'a> PolylineValueAt<'a> {
    /// Creates a new `PolylineValueAt` query.
    #[must_use]
    pub fn new(polyline: &'a Polyline, x: f64) -> Self {
        Self { polyline, x }
    }

    /// Executes the query, returning the interpolated y (or z) value.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if no segment brackets `x`,
    /// or `GeometryError::VerticalSegment` if the bracketing segment is vertical.
    #[allow(clippy::float_cmp)]
    pub fn execute(&self) -> Result<f64> {
        let x = self.x;
        for (p1, p2) in self.polyline.segments() {
            if p1.x <= x && x <= p2.x {
                let dx = p2.x - p1.x;
                if dx == 0.0 {
                    return Err(GeometryError::VerticalSegment { x }.into());
                }
                return Ok(p1.y + (x - p1.x) / dx * (p2.y - p1.y));
            }
        }

        let (min, max) = self.polyline.x_extent();
        Err(GeometryError::ParameterOutOfRange {
            parameter: "x",
            value: x,
            min,
            max,
        }
        .into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeolibError;
    use approx::assert_relative_eq;

    fn line(coords: &[(f64, f64)]) -> Polyline {
        Polyline::from_coords(coords).unwrap()
    }

    #[test]
    fn midpoint_of_diagonal() {
        let diag = line(&[(0.0, 0.0), (10.0, 10.0)]);
        assert_relative_eq!(PolylineValueAt::new(&diag, 5.0).execute().unwrap(), 5.0);
    }

    #[test]
    fn endpoints_are_inclusive() {
        let diag = line(&[(0.0, 2.0), (10.0, 12.0)]);
        assert_relative_eq!(PolylineValueAt::new(&diag, 0.0).execute().unwrap(), 2.0);
        assert_relative_eq!(PolylineValueAt::new(&diag, 10.0).execute().unwrap(), 12.0);
    }

    #[test]
    fn picks_the_bracketing_segment() {
        let profile = line(&[(0.0, 0.0), (2.0, -4.0), (6.0, 4.0)]);
        assert_relative_eq!(PolylineValueAt::new(&profile, 1.0).execute().unwrap(), -2.0);
        assert_relative_eq!(PolylineValueAt::new(&profile, 4.0).execute().unwrap(), 0.0);
    }

    #[test]
    fn outside_extent_is_out_of_range() {
        let diag = line(&[(0.0, 0.0), (10.0, 10.0)]);
        let err = PolylineValueAt::new(&diag, 15.0).execute().unwrap_err();
        assert!(matches!(
            err,
            GeolibError::Geometry(GeometryError::ParameterOutOfRange {
                parameter: "x",
                ..
            })
        ));
        assert!(PolylineValueAt::new(&diag, -0.1).execute().is_err());
    }

    #[test]
    fn reversed_polyline_has_no_bracketing_segment() {
        let diag = line(&[(0.0, 0.0), (10.0, 10.0)]).reversed();
        let err = PolylineValueAt::new(&diag, 5.0).execute().unwrap_err();
        assert!(matches!(
            err,
            GeolibError::Geometry(GeometryError::ParameterOutOfRange { .. })
        ));
    }

    #[test]
    fn reversed_polyline_uses_remaining_forward_segment() {
        // Reversed, the first segment runs right to left; only the second brackets x.
        let zigzag = line(&[(6.0, 6.0), (0.0, 0.0), (4.0, 4.0)]).reversed();
        assert_relative_eq!(PolylineValueAt::new(&zigzag, 3.0).execute().unwrap(), 3.0);
    }

    #[test]
    fn vertical_segment_is_rejected() {
        let step = line(&[(0.0, 0.0), (0.0, 5.0), (3.0, 5.0)]);
        let err = PolylineValueAt::new(&step, 0.0).execute().unwrap_err();
        assert!(matches!(
            err,
            GeolibError::Geometry(GeometryError::VerticalSegment { .. })
        ));
        assert_relative_eq!(PolylineValueAt::new(&step, 1.5).execute().unwrap(), 5.0);
    }

    #[test]
    fn steep_segment_still_interpolates() {
        let steep = line(&[(0.0, 0.0), (5e-11, 1.0)]);
        assert_relative_eq!(
            PolylineValueAt::new(&steep, 2.5e-11).execute().unwrap(),
            0.5,
            epsilon = 1e-12
        );
    }
}
