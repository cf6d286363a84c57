use crate::error::{GeometryError, Result, RingError};
use crate::math::polygon_2d::{signed_area_2d, winding_2d, Winding};
use crate::math::{Point2, Vector2};

/// A directed edge between two consecutive ring vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge2D {
    pub start: Point2,
    pub end: Point2,
}

impl Edge2D {
    /// Creates a new edge from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the (unnormalized) direction vector `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }

    /// Returns the edge length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.direction().norm()
    }
}

/// Ordered boundary vertices of a simple closed polygon.
///
/// The closing point is never repeated and the ring always holds at least
/// three vertices. Consecutive vertices may still coincide; the corner solver
/// treats the resulting zero-length edges as parallel.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexRing {
    points: Vec<Point2>,
}

impl VertexRing {
    /// Builds a ring from a raw vertex sequence.
    ///
    /// A trailing point that equals the first is dropped.
    ///
    /// # Errors
    ///
    /// - `RingError::InsufficientVertices` if fewer than 3 vertices remain
    /// - `GeometryError::NonFiniteCoordinate` if any coordinate is NaN or infinite
    pub fn new(mut points: Vec<Point2>) -> Result<Self> {
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }

        if points.len() < 3 {
            return Err(RingError::InsufficientVertices {
                found: points.len(),
            }
            .into());
        }

        if let Some((index, p)) = points
            .iter()
            .enumerate()
            .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeometryError::NonFiniteCoordinate {
                index,
                x: p.x,
                y: p.y,
            }
            .into());
        }

        Ok(Self { points })
    }

    /// Returns the vertices in traversal order, without a closing point.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the number of vertices (always at least 3).
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Returns the directed edge `p[i] -> p[(i + 1) % n]`.
    #[must_use]
    pub fn edge(&self, i: usize) -> Edge2D {
        let n = self.points.len();
        Edge2D::new(self.points[i % n], self.points[(i + 1) % n])
    }

    /// Returns the `(previous, current, next)` vertices around vertex `i`.
    #[must_use]
    pub fn neighborhood(&self, i: usize) -> (Point2, Point2, Point2) {
        let n = self.points.len();
        let i = i % n;
        let prev = self.points[(i + n - 1) % n];
        let next = self.points[(i + 1) % n];
        (prev, self.points[i], next)
    }

    /// Signed area (positive for counter-clockwise).
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.points)
    }

    /// Traversal direction of the ring.
    #[must_use]
    pub fn winding(&self) -> Winding {
        winding_2d(&self.points)
    }
}

/// A closed offset ring: the first corner is repeated as the last point.
///
/// Only produced by [`RingBuilder`](crate::operations::ring::RingBuilder),
/// once every corner has been solved.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetRing {
    points: Vec<Point2>,
}

impl OffsetRing {
    /// Closes a corner sequence. Callers guarantee at least 3 corners.
    pub(crate) fn close(mut corners: Vec<Point2>) -> Self {
        if let Some(&first) = corners.first() {
            corners.push(first);
        }
        Self { points: corners }
    }

    /// All points of the closed ring, including the repeated first point.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The distinct corners, without the closing point.
    #[must_use]
    pub fn corners(&self) -> &[Point2] {
        &self.points[..self.points.len().saturating_sub(1)]
    }

    /// Returns the number of distinct corners.
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Consumes the ring, returning the closed point sequence.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}
