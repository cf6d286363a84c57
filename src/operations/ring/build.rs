use crate::error::{GeometryError, Result, RingError};
use crate::geometry::{OffsetRing, PolygonFeature, SpatialReference};
use crate::operations::offset::Corner;

/// Assembles solved corners into a closed polygon.
///
/// Skipped corners are dropped; the remaining points keep vertex order.
pub struct RingBuilder<'a> {
    corners: &'a [Corner],
    spatial_reference: Option<SpatialReference>,
}

impl<'a> RingBuilder<'a> {
    /// Creates a new builder. `spatial_reference` is copied onto the output.
    #[must_use]
    pub fn new(corners: &'a [Corner], spatial_reference: Option<SpatialReference>) -> Self {
        Self {
            corners,
            spatial_reference,
        }
    }

    /// Closes the corner sequence into an [`OffsetRing`].
    ///
    /// # Errors
    ///
    /// - `RingError::DegenerateRing` if fewer than 3 corners survived
    /// - `GeometryError::NonFiniteCoordinate` if a corner overflowed, `index`
    ///   being the input vertex it was solved for
    pub fn ring(&self) -> Result<OffsetRing> {
        let mut points = Vec::with_capacity(self.corners.len());
        for (index, corner) in self.corners.iter().enumerate() {
            let Some(p) = corner.point() else { continue };
            if !(p.x.is_finite() && p.y.is_finite()) {
                return Err(GeometryError::NonFiniteCoordinate { index, x: p.x, y: p.y }.into());
            }
            points.push(p);
        }
        if points.len() < 3 {
            return Err(RingError::DegenerateRing {
                corners: points.len(),
            }
            .into());
        }
        Ok(OffsetRing::close(points))
    }

    /// Builds the output polygon feature.
    ///
    /// # Errors
    ///
    /// Same as [`ring`](Self::ring).
    pub fn execute(&self) -> Result<PolygonFeature> {
        let ring = self.ring()?;
        Ok(PolygonFeature::from_ring(
            ring.into_points(),
            self.spatial_reference.clone(),
        ))
    }
}
