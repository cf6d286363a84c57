use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::corner::{solve_corner_with, Corner, CornerPolicy};
use crate::geometry::VertexRing;
use crate::math::polygon_2d::Winding;

/// How the sign of the offset distance relates to the ring orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WindingPolicy {
    /// Positive distances move every edge to its left, whatever the winding.
    #[default]
    AsGiven,
    /// Positive distances always grow the polygon. The distance is negated
    /// for counter-clockwise rings; zero-area rings are left as given.
    OutwardPositive,
}

/// Miter offset of a closed vertex ring.
///
/// Each vertex is rebuilt independently by intersecting its two offset
/// edges, so the result has one [`Corner`] per input vertex, in input order.
///
/// # Sign Convention
///
/// With [`WindingPolicy::AsGiven`]:
/// - Positive distance: left offset (inward for counter-clockwise rings)
/// - Negative distance: right offset (outward for counter-clockwise rings)
#[derive(Debug)]
pub struct RingOffset2D<'a> {
    ring: &'a VertexRing,
    distance: f64,
    policy: CornerPolicy,
    winding: WindingPolicy,
    parallel: bool,
}

impl<'a> RingOffset2D<'a> {
    /// Creates a new ring offset operation with the default policies.
    #[must_use]
    pub fn new(ring: &'a VertexRing, distance: f64) -> Self {
        Self {
            ring,
            distance,
            policy: CornerPolicy::default(),
            winding: WindingPolicy::default(),
            parallel: false,
        }
    }

    /// Sets the policy for corners whose offset edges are parallel.
    #[must_use]
    pub fn with_corner_policy(mut self, policy: CornerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets how the distance sign is interpreted.
    #[must_use]
    pub fn with_winding(mut self, winding: WindingPolicy) -> Self {
        self.winding = winding;
        self
    }

    /// Solves corners on the rayon thread pool instead of sequentially.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Distance actually applied along each edge's left normal.
    #[must_use]
    pub fn effective_distance(&self) -> f64 {
        match (self.winding, self.ring.winding()) {
            (WindingPolicy::OutwardPositive, Winding::CounterClockwise) => -self.distance,
            _ => self.distance,
        }
    }

    /// Executes the offset, returning one corner per input vertex.
    #[must_use]
    pub fn execute(&self) -> Vec<Corner> {
        let dist = self.effective_distance();
        let n = self.ring.vertex_count();

        let solve = |i: usize| {
            let (prev, curr, next) = self.ring.neighborhood(i);
            solve_corner_with(&prev, &curr, &next, dist, self.policy)
        };

        // Indexed collect keeps vertex order in both modes.
        let corners: Vec<Corner> = if self.parallel {
            (0..n).into_par_iter().map(solve).collect()
        } else {
            (0..n).map(solve).collect()
        };

        for (i, corner) in corners.iter().enumerate() {
            match corner {
                Corner::Skipped => debug!(vertex = i, "adjacent offset edges are parallel, corner skipped"),
                Corner::Fallback(p) => debug!(
                    vertex = i,
                    x = p.x,
                    y = p.y,
                    "adjacent offset edges are parallel, midpoint emitted"
                ),
                Corner::Solved(_) => {}
            }
        }

        corners
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::distance_2d::point_to_line_dist;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    fn ring(coords: &[(f64, f64)]) -> VertexRing {
        VertexRing::new(coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()).unwrap()
    }

    fn points(corners: &[Corner]) -> Vec<Point2> {
        corners.iter().filter_map(Corner::point).collect()
    }

    fn assert_points_eq(actual: &[Point2], expected: &[(f64, f64)]) {
        assert_eq!(actual.len(), expected.len(), "actual={actual:?}");
        for (a, &(x, y)) in actual.iter().zip(expected) {
            assert_abs_diff_eq!(a.x, x, epsilon = 1e-9);
            assert_abs_diff_eq!(a.y, y, epsilon = 1e-9);
        }
    }

    fn ccw_square() -> VertexRing {
        ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)])
    }

    #[test]
    fn ccw_square_positive_distance_shrinks() {
        let corners = RingOffset2D::new(&ccw_square(), 1.0).execute();
        assert_points_eq(
            &points(&corners),
            &[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)],
        );
    }

    #[test]
    fn ccw_square_negative_distance_grows() {
        let corners = RingOffset2D::new(&ccw_square(), -1.0).execute();
        assert_points_eq(
            &points(&corners),
            &[(-1.0, -1.0), (5.0, -1.0), (5.0, 5.0), (-1.0, 5.0)],
        );
    }

    #[test]
    fn cw_square_positive_distance_grows() {
        let cw = ring(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
        let corners = RingOffset2D::new(&cw, 1.0).execute();
        assert_points_eq(
            &points(&corners),
            &[(-1.0, -1.0), (-1.0, 5.0), (5.0, 5.0), (5.0, -1.0)],
        );
    }

    #[test]
    fn outward_positive_policy_normalizes_both_windings() {
        let cw = ring(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0)]);
        let ccw = ccw_square();

        let from_ccw = RingOffset2D::new(&ccw, 1.0).with_winding(WindingPolicy::OutwardPositive);
        let from_cw = RingOffset2D::new(&cw, 1.0).with_winding(WindingPolicy::OutwardPositive);
        assert_abs_diff_eq!(from_ccw.effective_distance(), -1.0);
        assert_abs_diff_eq!(from_cw.effective_distance(), 1.0);

        assert_points_eq(
            &points(&from_ccw.execute()),
            &[(-1.0, -1.0), (5.0, -1.0), (5.0, 5.0), (-1.0, 5.0)],
        );
        assert_points_eq(
            &points(&from_cw.execute()),
            &[(-1.0, -1.0), (-1.0, 5.0), (5.0, 5.0), (5.0, -1.0)],
        );
    }

    #[test]
    fn convex_polygons_keep_every_corner() {
        for n in 3..=12 {
            #[allow(clippy::cast_precision_loss)]
            let coords: Vec<(f64, f64)> = (0..n)
                .map(|i| {
                    let t = std::f64::consts::TAU * i as f64 / n as f64;
                    (10.0 * t.cos(), 10.0 * t.sin())
                })
                .collect();
            let corners = RingOffset2D::new(&ring(&coords), -2.0).execute();
            assert_eq!(corners.len(), n);
            assert!(corners.iter().all(|c| matches!(c, Corner::Solved(_))), "n={n}");
        }
    }

    #[test]
    fn triangle_offset_edges_are_parallel_at_unit_distance() {
        let original = ring(&[(0.0, 0.0), (4.0, 0.0), (0.0, 4.0)]);
        // CCW triangle: outward is the right side.
        let offset = points(&RingOffset2D::new(&original, -1.0).execute());
        assert_eq!(offset.len(), 3);

        // Corner i is shared by original edges (i-1 -> i) and (i -> i+1), so
        // offset edge (i -> i+1) corresponds to original edge i.
        for i in 0..3 {
            let edge = original.edge(i);
            let a = offset[i];
            let b = offset[(i + 1) % 3];
            assert_abs_diff_eq!(point_to_line_dist(&a, &edge.start, &edge.end), 1.0, epsilon = 1e-9);
            assert_abs_diff_eq!(point_to_line_dist(&b, &edge.start, &edge.end), 1.0, epsilon = 1e-9);

            let od = b - a;
            let d = edge.direction();
            assert_abs_diff_eq!(od.x * d.y - od.y * d.x, 0.0, epsilon = 1e-9);
            assert!(od.dot(&d) > 0.0);
        }
    }

    #[test]
    fn collinear_vertex_is_skipped_by_default() {
        let with_midpoint = ring(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let corners = RingOffset2D::new(&with_midpoint, 1.0).execute();
        assert_eq!(corners.len(), 5);
        assert_eq!(corners[1], Corner::Skipped);
        assert_points_eq(
            &points(&corners),
            &[(1.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)],
        );
    }

    #[test]
    fn collinear_vertex_kept_with_midpoint_policy() {
        let with_midpoint = ring(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let corners = RingOffset2D::new(&with_midpoint, 1.0)
            .with_corner_policy(CornerPolicy::Midpoint)
            .execute();
        assert!(matches!(corners[1], Corner::Fallback(_)));
        assert_points_eq(
            &points(&corners),
            &[(1.0, 1.0), (2.0, 1.0), (3.0, 1.0), (3.0, 3.0), (1.0, 3.0)],
        );
    }

    #[test]
    fn duplicate_consecutive_vertex_skips_its_corners() {
        let dup = ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let corners = RingOffset2D::new(&dup, 1.0).execute();
        assert_eq!(corners.len(), 5);
        assert!(corners[1].is_skipped());
        assert!(corners[2].is_skipped());
        assert_points_eq(&points(&corners), &[(1.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
    }

    #[test]
    fn duplicate_vertex_keeps_offset_distance_with_midpoint_policy() {
        let dup = ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0)]);
        let corners = RingOffset2D::new(&dup, 1.0)
            .with_corner_policy(CornerPolicy::Midpoint)
            .execute();
        assert!(corners[1].is_skipped());
        assert!(corners[2].is_skipped());

        let out = points(&corners);
        assert_points_eq(&out, &[(1.0, 1.0), (3.0, 3.0), (1.0, 3.0)]);
        let bottom = (Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        assert_abs_diff_eq!(point_to_line_dist(&out[0], &bottom.0, &bottom.1), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn parallel_execution_preserves_vertex_order() {
        #[allow(clippy::cast_precision_loss)]
        let coords: Vec<(f64, f64)> = (0..257)
            .map(|i| {
                let t = std::f64::consts::TAU * i as f64 / 257.0;
                (50.0 * t.cos(), 30.0 * t.sin())
            })
            .collect();
        let r = ring(&coords);
        let sequential = RingOffset2D::new(&r, 1.5).execute();
        let parallel = RingOffset2D::new(&r, 1.5).with_parallel(true).execute();
        assert_eq!(sequential, parallel);
    }
}
