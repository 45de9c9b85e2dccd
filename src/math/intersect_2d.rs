use super::{Point2, Vector2};

/// Outcome of intersecting two bounded segments in 2D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments do not touch.
    None,
    /// The segments meet in exactly one point.
    Point(Point2),
    /// The segments are collinear and share the sub-segment `(start, end)`.
    Overlap(Point2, Point2),
}

/// Bounded segment-segment intersection in 2D.
///
/// Points that land on a segment endpoint (within `tol` in parameter space)
/// are snapped to that endpoint's exact coordinates, so callers can compare
/// results against input vertices.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tol: f64,
) -> SegmentIntersection {
    let da = a1 - a0;
    let db = b1 - b0;

    if da.norm_squared() < tol * tol {
        return if point_on_segment_2d(a0, b0, b1, tol) {
            SegmentIntersection::Point(*a0)
        } else {
            SegmentIntersection::None
        };
    }
    if db.norm_squared() < tol * tol {
        return if point_on_segment_2d(b0, a0, a1, tol) {
            SegmentIntersection::Point(*b0)
        } else {
            SegmentIntersection::None
        };
    }

    // Sine of the angle between the segments, so the test is scale-free.
    let cross = da.perp(&db);
    if cross.abs() < tol * da.norm() * db.norm() {
        return collinear_overlap(a0, a1, b0, b1, tol);
    }

    let d = b0 - a0;
    let t = d.perp(&db) / cross;
    let u = d.perp(&da) / cross;

    if t < -tol || t > 1.0 + tol || u < -tol || u > 1.0 + tol {
        return SegmentIntersection::None;
    }

    let pt = if t.abs() <= tol {
        *a0
    } else if (t - 1.0).abs() <= tol {
        *a1
    } else if u.abs() <= tol {
        *b0
    } else if (u - 1.0).abs() <= tol {
        *b1
    } else {
        a0 + da * t
    };
    SegmentIntersection::Point(pt)
}

/// Returns `true` if `p` lies on the segment `a`-`b` within `tol`.
#[must_use]
pub fn point_on_segment_2d(p: &Point2, a: &Point2, b: &Point2, tol: f64) -> bool {
    let ab = b - a;
    let ap = p - a;
    let len_sq = ab.norm_squared();
    if len_sq < tol * tol {
        return ap.norm() < tol;
    }
    if ap.perp(&ab).abs() > tol * len_sq.sqrt() {
        return false;
    }
    let t = ap.dot(&ab) / len_sq;
    t >= -tol && t <= 1.0 + tol
}

/// Handles the parallel case: either disjoint, touching end-to-end, or overlapping.
fn collinear_overlap(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tol: f64,
) -> SegmentIntersection {
    let da: Vector2 = a1 - a0;
    let len_sq = da.norm_squared();

    // Distance of b0 from the carrier line of a.
    if (b0 - a0).perp(&da).abs() > tol * len_sq.sqrt() {
        return SegmentIntersection::None;
    }

    let tb0 = (b0 - a0).dot(&da) / len_sq;
    let tb1 = (b1 - a0).dot(&da) / len_sq;
    let (t_lo, p_lo, t_hi, p_hi) = if tb0 <= tb1 {
        (tb0, *b0, tb1, *b1)
    } else {
        (tb1, *b1, tb0, *b0)
    };

    let (lo, start) = if t_lo <= 0.0 { (0.0, *a0) } else { (t_lo, p_lo) };
    let (hi, end) = if t_hi >= 1.0 { (1.0, *a1) } else { (t_hi, p_hi) };

    if hi < lo - tol {
        SegmentIntersection::None
    } else if hi - lo <= tol {
        SegmentIntersection::Point(start)
    } else {
        SegmentIntersection::Overlap(start, end)
    }
}
