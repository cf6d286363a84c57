use super::{Point2, PARALLEL_TOLERANCE};

/// Intersection of two infinite lines in 2D, each given by two points.
///
/// Line A passes through `a1` and `a2`, line B through `b1` and `b2`.
/// Uses the determinant form
/// `denom = (x1 - x2)(y3 - y4) - (y1 - y2)(x3 - x4)`.
///
/// Returns `None` when `|denom| < PARALLEL_TOLERANCE` (parallel, collinear,
/// or a line given by two coincident points).
#[must_use]
pub fn line_intersection(a1: &Point2, a2: &Point2, b1: &Point2, b2: &Point2) -> Option<Point2> {
    let (x1, y1) = (a1.x, a1.y);
    let (x2, y2) = (a2.x, a2.y);
    let (x3, y3) = (b1.x, b1.y);
    let (x4, y4) = (b2.x, b2.y);

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < PARALLEL_TOLERANCE {
        return None;
    }

    let det_a = x1 * y2 - y1 * x2;
    let det_b = x3 * y4 - y3 * x4;
    let px = (det_a * (x3 - x4) - (x1 - x2) * det_b) / denom;
    let py = (det_a * (y3 - y4) - (y1 - y2) * det_b) / denom;
    Some(Point2::new(px, py))
}
