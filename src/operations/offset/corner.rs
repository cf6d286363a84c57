use serde::{Deserialize, Serialize};

use super::edge_offset::{offset_edge, unit_normal};
use crate::math::intersect_2d::line_intersection;
use crate::math::{Point2, Vector2};

/// What to do at a vertex whose two offset edges are parallel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerPolicy {
    /// Drop the vertex from the offset ring.
    #[default]
    Skip,
    /// Emit the midpoint between the end of the incoming offset edge and the
    /// start of the outgoing one. For collinear edges this is the offset
    /// vertex itself. Vertices next to a zero-length edge are still dropped,
    /// since one of the two edges was never moved.
    Midpoint,
}

/// Outcome of solving one corner of the offset ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Corner {
    /// The two offset edges intersect at this point.
    Solved(Point2),
    /// The offset edges are parallel; a substitute point was emitted.
    Fallback(Point2),
    /// The offset edges are parallel and the vertex was dropped.
    Skipped,
}

impl Corner {
    /// Returns the emitted point, if any.
    #[must_use]
    pub fn point(&self) -> Option<Point2> {
        match *self {
            Self::Solved(p) | Self::Fallback(p) => Some(p),
            Self::Skipped => None,
        }
    }

    #[must_use]
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }
}

/// Solves the offset corner at `curr` with the default [`CornerPolicy::Skip`].
///
/// Offsets `prev -> curr` and `curr -> next` by `dist` and intersects the
/// two offset edges as infinite lines.
#[must_use]
pub fn solve_corner(prev: &Point2, curr: &Point2, next: &Point2, dist: f64) -> Corner {
    solve_corner_with(prev, curr, next, dist, CornerPolicy::Skip)
}

/// Solves the offset corner at `curr`, applying `policy` when the adjacent
/// offset edges are parallel (or one of them has zero length).
#[must_use]
pub fn solve_corner_with(
    prev: &Point2,
    curr: &Point2,
    next: &Point2,
    dist: f64,
    policy: CornerPolicy,
) -> Corner {
    let incoming = offset_edge(prev, curr, dist);
    let outgoing = offset_edge(curr, next, dist);

    if let Some(p) = line_intersection(&incoming.start, &incoming.end, &outgoing.start, &outgoing.end)
    {
        return Corner::Solved(p);
    }

    match policy {
        CornerPolicy::Midpoint if has_normal(prev, curr) && has_normal(curr, next) => {
            Corner::Fallback(nalgebra::center(&incoming.end, &outgoing.start))
        }
        CornerPolicy::Midpoint | CornerPolicy::Skip => Corner::Skipped,
    }
}

fn has_normal(p1: &Point2, p2: &Point2) -> bool {
    unit_normal(p1, p2) != Vector2::zeros()
}
