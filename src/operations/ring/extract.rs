use crate::error::Result;
use crate::geometry::{PolygonFeature, VertexRing};

/// Extracts the boundary vertex ring of a polygon feature.
///
/// All parts are flattened in storage order, which is only correct for
/// single-ring polygons. A trailing point equal to the first is dropped.
pub struct RingExtractor<'a> {
    feature: &'a PolygonFeature,
}

impl<'a> RingExtractor<'a> {
    /// Creates a new extractor over `feature`.
    #[must_use]
    pub fn new(feature: &'a PolygonFeature) -> Self {
        Self { feature }
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// - `RingError::InsufficientVertices` if fewer than 3 vertices remain
    /// - `GeometryError::NonFiniteCoordinate` for NaN or infinite coordinates
    pub fn execute(&self) -> Result<VertexRing> {
        let points = self.feature.parts.iter().flatten().copied().collect();
        VertexRing::new(points)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{OffsetError, RingError};
    use crate::math::Point2;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn closed_part_is_normalized() {
        let feature = PolygonFeature::from_ring(
            vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0), p(0.0, 0.0)],
            None,
        );
        let ring = RingExtractor::new(&feature).execute().unwrap();
        assert_eq!(ring.vertex_count(), 4);
        assert_eq!(ring.points()[0], p(0.0, 0.0));
        assert_eq!(ring.points()[3], p(0.0, 4.0));
    }

    #[test]
    fn parts_are_concatenated_in_order() {
        let feature = PolygonFeature::new(
            vec![vec![p(0.0, 0.0), p(4.0, 0.0)], vec![p(4.0, 4.0), p(0.0, 4.0)]],
            None,
        );
        let ring = RingExtractor::new(&feature).execute().unwrap();
        assert_eq!(
            ring.points(),
            &[p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]
        );
    }

    #[test]
    fn too_few_vertices_after_normalization() {
        let feature = PolygonFeature::from_ring(vec![p(0.0, 0.0), p(1.0, 1.0), p(0.0, 0.0)], None);
        let err = RingExtractor::new(&feature).execute().unwrap_err();
        assert!(matches!(
            err,
            OffsetError::Ring(RingError::InsufficientVertices { found: 2 })
        ));
    }

    #[test]
    fn feature_without_coordinates() {
        let feature = PolygonFeature::new(Vec::new(), None);
        assert!(RingExtractor::new(&feature).execute().is_err());
    }
}
