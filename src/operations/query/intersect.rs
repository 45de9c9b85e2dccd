use tracing::debug;

use crate::error::{GeometryError, Result};
use crate::geometry::Polyline;
use crate::math::intersect_2d::{
    point_on_segment_2d, segment_segment_intersect_2d, SegmentIntersection,
};
use crate::math::{points_coincide, Point2, TOLERANCE};

/// Classified geometric intersection of two polylines.
#[derive(Debug, Clone, PartialEq)]
pub enum PolylineIntersection {
    /// The polylines do not touch.
    Empty,
    /// The polylines meet in exactly one point.
    SinglePoint(Point2),
    /// The polylines meet in two or more distinct points.
    MultiplePoints(Vec<Point2>),
    /// The polylines share one connected collinear stretch, given as its pieces.
    OverlappingSegment(Vec<(Point2, Point2)>),
    /// Any other configuration: disjoint overlaps, or overlaps mixed with crossings.
    Unsupported(String),
}

/// Computes the intersection points of two polylines.
///
/// Collinear overlaps are not reported as points. Points that coincide with a
/// vertex of the first polyline are dropped unless they are also a vertex of
/// the second one. The result is ordered by ascending x.
pub struct PolylineIntersect<'a> {
    line1: &'a Polyline,
    line2: &'a Polyline,
    tolerance: f64,
}

impl<'a> PolylineIntersect<'a> {
    /// Creates a new `PolylineIntersect` query.
    #[must_use]
    pub fn new(line1: &'a Polyline, line2: &'a Polyline) -> Self {
        Self {
            line1,
            line2,
            tolerance: TOLERANCE,
        }
    }

    /// Sets the tolerance used for parallelism, endpoint snapping and point merging.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Computes and classifies the raw intersection, without filtering or sorting.
    #[must_use]
    pub fn classify(&self) -> PolylineIntersection {
        let tol = self.tolerance;
        let mut points: Vec<Point2> = Vec::new();
        let mut overlaps: Vec<(Point2, Point2)> = Vec::new();

        for (a0, a1) in self.line1.segments() {
            for (b0, b1) in self.line2.segments() {
                match segment_segment_intersect_2d(a0, a1, b0, b1, tol) {
                    SegmentIntersection::None => {}
                    SegmentIntersection::Point(p) => {
                        if !points.iter().any(|q| points_coincide(q, &p, tol)) {
                            points.push(p);
                        }
                    }
                    SegmentIntersection::Overlap(s, e) => overlaps.push((s, e)),
                }
            }
        }

        if overlaps.is_empty() {
            return match points.len() {
                0 => PolylineIntersection::Empty,
                1 => PolylineIntersection::SinglePoint(points[0]),
                _ => PolylineIntersection::MultiplePoints(points),
            };
        }

        // Crossings that fall on an overlap are part of the line, not separate points.
        points.retain(|p| {
            !overlaps
                .iter()
                .any(|(s, e)| point_on_segment_2d(p, s, e, tol))
        });

        let chains = count_chains(&overlaps, tol);
        if chains > 1 {
            return PolylineIntersection::Unsupported(format!(
                "{chains} disjoint overlapping segments"
            ));
        }
        if !points.is_empty() {
            return PolylineIntersection::Unsupported(format!(
                "overlapping segment mixed with {} discrete point(s)",
                points.len()
            ));
        }
        PolylineIntersection::OverlappingSegment(overlaps)
    }

    /// Executes the query, returning the intersection points sorted by x.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::UnsupportedIntersection` if the intersection is
    /// neither empty, a set of points, nor a single overlapping stretch.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let mut result = match self.classify() {
            PolylineIntersection::Empty | PolylineIntersection::OverlappingSegment(_) => {
                Vec::new()
            }
            PolylineIntersection::SinglePoint(p) => vec![p],
            PolylineIntersection::MultiplePoints(points) => points,
            PolylineIntersection::Unsupported(kind) => {
                debug!(%kind, "polyline intersection not supported");
                return Err(GeometryError::UnsupportedIntersection(kind).into());
            }
        };

        let found = result.len();
        result.retain(|p| !self.line1.has_vertex(p) || self.line2.has_vertex(p));
        if result.len() < found {
            debug!(
                dropped = found - result.len(),
                "dropped intersections on vertices of the first polyline"
            );
        }

        result.sort_by(|a, b| a.x.total_cmp(&b.x));
        Ok(result)
    }
}

/// Counts connected groups of overlap pieces, joined where endpoints coincide.
fn count_chains(pieces: &[(Point2, Point2)], tol: f64) -> usize {
    fn root(group: &mut [usize], mut i: usize) -> usize {
        while group[i] != i {
            group[i] = group[group[i]];
            i = group[i];
        }
        i
    }

    let mut group: Vec<usize> = (0..pieces.len()).collect();

    for i in 0..pieces.len() {
        for j in (i + 1)..pieces.len() {
            let (s1, e1) = &pieces[i];
            let (s2, e2) = &pieces[j];
            let touching = [s2, e2]
                .iter()
                .any(|q| points_coincide(s1, q, tol) || points_coincide(e1, q, tol));
            if touching {
                let (ri, rj) = (root(&mut group, i), root(&mut group, j));
                group[ri] = rj;
            }
        }
    }

    (0..pieces.len())
        .filter(|&i| root(&mut group, i) == i)
        .count()
}
