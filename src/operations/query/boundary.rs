use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::is_clockwise;
use crate::math::Point2;

/// Which side of the polygon outline to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Top,
    Bottom,
}

/// Extracts the upper boundary of a clockwise polygon, ordered left to right.
///
/// The run starts at the highest vertex on the minimum x and ends at the
/// highest vertex on the maximum x.
pub struct PolygonTop<'a> {
    points: &'a [Point2],
}

impl<'a> PolygonTop<'a> {
    /// Creates a new `PolygonTop` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` for an empty outline and
    /// `GeometryError::Degenerate` if a coordinate is not finite.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        boundary_run(self.points, Side::Top)
    }
}

/// Extracts the lower boundary of a clockwise polygon, ordered left to right.
///
/// The run starts at the lowest vertex on the minimum x and ends at the
/// lowest vertex on the maximum x.
pub struct PolygonBottom<'a> {
    points: &'a [Point2],
}

impl<'a> PolygonBottom<'a> {
    /// Creates a new `PolygonBottom` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewPoints` for an empty outline and
    /// `GeometryError::Degenerate` if a coordinate is not finite.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        boundary_run(self.points, Side::Bottom)
    }
}

fn boundary_run(points: &[Point2], side: Side) -> Result<Vec<Point2>> {
    if points.is_empty() {
        return Err(GeometryError::TooFewPoints {
            expected: 1,
            actual: 0,
        }
        .into());
    }
    if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(GeometryError::Degenerate("polygon has non-finite coordinates".into()).into());
    }
    if !is_clockwise(points) {
        debug!(?side, "polygon is not clockwise, boundary may be wrong");
    }

    let left = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let right = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let idx_left = extreme_on_vertical(points, left, side)?;
    let idx_right = extreme_on_vertical(points, right, side)?;

    Ok(match side {
        Side::Top => circular_run(points, idx_left, idx_right),
        Side::Bottom => {
            let mut run = circular_run(points, idx_right, idx_left);
            run.reverse();
            run
        }
    })
}

/// Index of the highest (top) or lowest (bottom) vertex with exactly `x`.
///
/// Ties resolve to the first occurrence in the sequence.
#[allow(clippy::float_cmp)]
fn extreme_on_vertical(points: &[Point2], x: f64, side: Side) -> Result<usize> {
    let mut best: Option<usize> = None;
    for (i, p) in points.iter().enumerate() {
        if p.x != x {
            continue;
        }
        best = match best {
            Some(b) => {
                let better = match side {
                    Side::Top => p.y > points[b].y,
                    Side::Bottom => p.y < points[b].y,
                };
                Some(if better { i } else { b })
            }
            None => Some(i),
        };
    }
    best.ok_or_else(|| GeometryError::Degenerate(format!("no vertex at x = {x}")).into())
}

/// Vertices from `from` to `to` inclusive, wrapping past the end when `to <= from`.
fn circular_run(points: &[Point2], from: usize, to: usize) -> Vec<Point2> {
    if to > from {
        points[from..=to].to_vec()
    } else {
        let mut run = points[from..].to_vec();
        run.extend_from_slice(&points[..=to]);
        run
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeolibError;

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    #[test]
    fn unit_square_top_and_bottom() {
        let square = pts(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
        let top = PolygonTop::new(&square).execute().unwrap();
        let bottom = PolygonBottom::new(&square).execute().unwrap();

        assert_eq!(top, pts(&[(0.0, 1.0), (1.0, 1.0)]));
        assert_eq!(bottom, pts(&[(0.0, 0.0), (1.0, 0.0)]));

        let all: Vec<_> = top.iter().chain(&bottom).collect();
        assert_eq!(all.len(), 4);
        for corner in &square {
            assert!(all.contains(&corner));
        }
    }

    #[test]
    fn irregular_polygon_with_vertical_ends() {
        let poly = pts(&[
            (2.0, 0.0),
            (0.0, 0.0),
            (0.0, 3.0),
            (1.0, 4.0),
            (3.0, 3.0),
            (3.0, 1.0),
        ]);
        assert_eq!(
            PolygonTop::new(&poly).execute().unwrap(),
            pts(&[(0.0, 3.0), (1.0, 4.0), (3.0, 3.0)])
        );
        // The bottom run wraps past the end of the sequence.
        assert_eq!(
            PolygonBottom::new(&poly).execute().unwrap(),
            pts(&[(0.0, 0.0), (2.0, 0.0), (3.0, 1.0)])
        );
    }

    #[test]
    fn top_wraps_when_sequence_starts_on_the_right() {
        let poly = pts(&[
            (3.0, 3.0),
            (3.0, 1.0),
            (2.0, 0.0),
            (0.0, 0.0),
            (0.0, 3.0),
            (1.0, 4.0),
        ]);
        assert_eq!(
            PolygonTop::new(&poly).execute().unwrap(),
            pts(&[(0.0, 3.0), (1.0, 4.0), (3.0, 3.0)])
        );
        assert_eq!(
            PolygonBottom::new(&poly).execute().unwrap(),
            pts(&[(0.0, 0.0), (2.0, 0.0), (3.0, 1.0)])
        );
    }

    #[test]
    fn single_vertex_extremes() {
        // Diamond: left and right extremes are single points shared by both runs.
        let diamond = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0), (1.0, -1.0)]);
        let top = PolygonTop::new(&diamond).execute().unwrap();
        let bottom = PolygonBottom::new(&diamond).execute().unwrap();
        assert_eq!(top, pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]));
        assert_eq!(bottom, pts(&[(0.0, 0.0), (1.0, -1.0), (2.0, 0.0)]));
    }

    #[test]
    fn empty_outline_is_rejected() {
        let err = PolygonTop::new(&[]).execute().unwrap_err();
        assert!(matches!(
            err,
            GeolibError::Geometry(GeometryError::TooFewPoints {
                expected: 1,
                actual: 0
            })
        ));
    }

    #[test]
    fn two_points_give_the_trivial_run() {
        let segment = pts(&[(0.0, 0.0), (1.0, 1.0)]);
        assert_eq!(PolygonTop::new(&segment).execute().unwrap(), segment);
        assert_eq!(PolygonBottom::new(&segment).execute().unwrap(), segment);
    }

    #[test]
    fn non_finite_coordinates_rejected() {
        let poly = pts(&[(0.0, 0.0), (f64::NAN, 1.0), (1.0, 0.0)]);
        assert!(PolygonBottom::new(&poly).execute().is_err());
    }
}
