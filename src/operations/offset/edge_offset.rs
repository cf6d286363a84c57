use crate::geometry::Edge2D;
use crate::math::{Point2, Vector2};

/// Unit normal of the directed edge `p1 -> p2`.
///
/// The direction is rotated 90° counter-clockwise, so the normal points to
/// the LEFT of the edge: `(-dy / L, dx / L)`. A zero-length edge returns the
/// zero vector, which leaves the edge where it is when offset.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn unit_normal(p1: &Point2, p2: &Point2) -> Vector2 {
    let edge = Edge2D::new(*p1, *p2);
    let len = edge.length();
    if len == 0.0 {
        return Vector2::zeros();
    }
    let d = edge.direction();
    Vector2::new(-d.y / len, d.x / len)
}

/// Translates the edge `p1 -> p2` by `dist` along its unit normal.
///
/// Positive `dist` moves the edge to its left. For a counter-clockwise ring
/// that is inward, for a clockwise ring outward.
#[must_use]
pub fn offset_edge(p1: &Point2, p2: &Point2, dist: f64) -> Edge2D {
    let shift = unit_normal(p1, p2) * dist;
    Edge2D::new(p1 + shift, p2 + shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn normal_points_left_of_edge() {
        let n = unit_normal(&p(0.0, 0.0), &p(4.0, 0.0));
        assert_abs_diff_eq!(n.x, 0.0);
        assert_abs_diff_eq!(n.y, 1.0);

        let n = unit_normal(&p(0.0, 0.0), &p(0.0, 2.0));
        assert_abs_diff_eq!(n.x, -1.0);
        assert_abs_diff_eq!(n.y, 0.0);
    }

    #[test]
    fn normal_is_unit_length() {
        let n = unit_normal(&p(1.0, 1.0), &p(4.0, 5.0));
        assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(n.x, -0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(n.y, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn zero_length_edge_has_zero_normal() {
        let n = unit_normal(&p(2.0, 3.0), &p(2.0, 3.0));
        assert_eq!(n, Vector2::zeros());

        let e = offset_edge(&p(2.0, 3.0), &p(2.0, 3.0), 5.0);
        assert_eq!(e.start, p(2.0, 3.0));
        assert_eq!(e.end, p(2.0, 3.0));
    }

    #[test]
    fn offset_moves_both_endpoints() {
        let e = offset_edge(&p(0.0, 0.0), &p(4.0, 0.0), 1.5);
        assert_abs_diff_eq!(e.start.x, 0.0);
        assert_abs_diff_eq!(e.start.y, 1.5);
        assert_abs_diff_eq!(e.end.x, 4.0);
        assert_abs_diff_eq!(e.end.y, 1.5);
    }

    #[test]
    fn negated_offset_restores_original_edge() {
        let a = p(1.25, -3.5);
        let b = p(7.0, 2.75);
        for d in [0.5, 1.0, 5.0, 123.456] {
            let there = offset_edge(&a, &b, d);
            // Same original edge, opposite distance: the translations cancel.
            let back = offset_edge(&a, &b, -d);
            let restored_start = there.start + (back.start - a);
            let restored_end = there.end + (back.end - b);
            assert_abs_diff_eq!(restored_start.x, a.x, epsilon = 1e-9);
            assert_abs_diff_eq!(restored_start.y, a.y, epsilon = 1e-9);
            assert_abs_diff_eq!(restored_end.x, b.x, epsilon = 1e-9);
            assert_abs_diff_eq!(restored_end.y, b.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn offset_then_reverse_offset_of_translated_edge_round_trips() {
        // The translated edge keeps the original direction, so its normal is
        // identical and offsetting it by -d lands back on the original.
        let a = p(0.0, 0.0);
        let b = p(3.0, 4.0);
        let moved = offset_edge(&a, &b, 2.0);
        let back = offset_edge(&moved.start, &moved.end, -2.0);
        assert_abs_diff_eq!(back.start.x, a.x, epsilon = 1e-12);
        assert_abs_diff_eq!(back.start.y, a.y, epsilon = 1e-12);
        assert_abs_diff_eq!(back.end.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(back.end.y, b.y, epsilon = 1e-12);
    }
}
