use super::{Point2, TOLERANCE};

/// Traversal direction of a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    CounterClockwise,
    Clockwise,
    /// Zero (or numerically zero) signed area.
    Degenerate,
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise. The ring must not
/// repeat its first point at the end.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Classifies the winding of a ring from the sign of its area.
#[must_use]
pub fn winding_2d(points: &[Point2]) -> Winding {
    let area = signed_area_2d(points);
    if area > TOLERANCE {
        Winding::CounterClockwise
    } else if area < -TOLERANCE {
        Winding::Clockwise
    } else {
        Winding::Degenerate
    }
}
