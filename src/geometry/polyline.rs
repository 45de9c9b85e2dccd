use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// An open chain of straight segments through at least two points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline from its ordered vertices.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if fewer than two points are given.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::TooFewPoints {
                expected: 2,
                actual: points.len(),
            }
            .into());
        }
        Ok(Self { points })
    }

    /// Creates a polyline from `(x, y)` coordinate pairs.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` if fewer than two pairs are given.
    pub fn from_coords(coords: &[(f64, f64)]) -> Result<Self> {
        Self::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// The ordered vertices.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Iterates over consecutive `(start, end)` vertex pairs.
    pub fn segments(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        self.points.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Returns `true` if `p` is exactly one of the vertices.
    #[must_use]
    pub fn has_vertex(&self, p: &Point2) -> bool {
        self.points.iter().any(|v| v == p)
    }

    /// Returns a new polyline with the vertices in reverse order.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut points = self.points.clone();
        points.reverse();
        Self { points }
    }

    /// X-coordinates of the first and last vertex.
    #[must_use]
    pub fn x_extent(&self) -> (f64, f64) {
        // `new` guarantees at least two points.
        let first = self.points[0].x;
        let last = self.points[self.points.len() - 1].x;
        (first, last)
    }
}

impl TryFrom<Vec<Point2>> for Polyline {
    type Error = crate::error::GeolibError;

    fn try_from(points: Vec<Point2>) -> Result<Self> {
        Self::new(points)
    }
}
