use super::Point2;

/// Returns the perpendicular distance from `p` to the infinite line through
/// `a` and `b`.
///
/// Falls back to the point-to-point distance when `a` and `b` coincide.
#[must_use]
pub fn point_to_line_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate line (zero length).
        return (p - a).norm();
    }

    let ap = p - a;
    (d.x * ap.y - d.y * ap.x).abs() / len_sq.sqrt()
}
