use tracing::{debug, info, warn};

use crate::config::OffsetConfig;
use crate::error::{Result, RingError};
use crate::geometry::PolygonFeature;
use crate::math::polygon_2d::Winding;
use crate::operations::offset::{Corner, CornerPolicy, RingOffset2D, WindingPolicy};
use crate::operations::ring::{RingBuilder, RingExtractor};
use crate::store::{FeatureSink, FeatureSource};

/// Summary of a completed offset run.
#[derive(Debug, Clone, PartialEq)]
pub struct OffsetReport {
    /// Vertices in the normalized input ring.
    pub input_vertices: usize,
    /// Corners in the output ring (without the closing point).
    pub corners: usize,
    /// Vertices dropped because their offset edges were parallel.
    pub skipped: usize,
    /// Vertices replaced by a midpoint fallback.
    pub fallbacks: usize,
    /// Distance applied along the left normals after winding normalization.
    pub effective_distance: f64,
    pub output_location: String,
}

/// Reads one polygon, offsets it and writes the result.
///
/// Either a complete offset polygon is written or nothing is: every check
/// runs before the sink is touched.
#[derive(Debug)]
pub struct OffsetPipeline {
    config: OffsetConfig,
}

impl OffsetPipeline {
    #[must_use]
    pub fn new(config: OffsetConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &OffsetConfig {
        &self.config
    }

    /// Offsets a single feature without touching any store.
    ///
    /// # Errors
    ///
    /// - `RingError::InsufficientVertices` for fewer than 3 input vertices
    /// - `RingError::DegenerateRing` if fewer than 3 corners survive
    /// - `GeometryError` for non-finite coordinates, distance or corners
    /// - `ConfigError::Missing` for an empty input or output location
    pub fn offset_feature(&self, feature: &PolygonFeature) -> Result<(PolygonFeature, OffsetReport)> {
        self.config.validate()?;
        self.offset_validated(feature)
    }

    fn offset_validated(&self, feature: &PolygonFeature) -> Result<(PolygonFeature, OffsetReport)> {
        if self.config.corner_policy == CornerPolicy::Midpoint {
            warn!("midpoint corner policy enabled: parallel corners are substituted instead of dropped");
        }

        let ring = RingExtractor::new(feature).execute()?;
        info!(vertices = ring.vertex_count(), "extracted input ring");

        let offset = RingOffset2D::new(&ring, self.config.offset_distance)
            .with_corner_policy(self.config.corner_policy)
            .with_winding(self.config.winding)
            .with_parallel(self.config.parallel);
        let effective_distance = offset.effective_distance();
        if self.config.winding == WindingPolicy::OutwardPositive
            && ring.winding() == Winding::CounterClockwise
        {
            info!(
                requested = self.config.offset_distance,
                applied = effective_distance,
                "counter-clockwise ring, distance negated so positive grows the polygon"
            );
        }

        let corners = offset.execute();
        let skipped = corners.iter().filter(|c| c.is_skipped()).count();
        let fallbacks = corners
            .iter()
            .filter(|c| matches!(c, Corner::Fallback(_)))
            .count();
        if skipped > 0 {
            warn!(skipped, "corners dropped where adjacent offset edges are parallel");
        }

        let output = RingBuilder::new(&corners, feature.spatial_reference.clone()).execute()?;
        let report = OffsetReport {
            input_vertices: ring.vertex_count(),
            corners: corners.len() - skipped,
            skipped,
            fallbacks,
            effective_distance,
            output_location: self.config.output_location.clone(),
        };
        info!(corners = report.corners, "calculated offset polygon");
        Ok((output, report))
    }

    /// Runs the full pipeline: read, offset, overwrite the output.
    ///
    /// # Errors
    ///
    /// - `RingError::EmptyInput` if the input feature set holds no feature
    /// - any error of [`offset_feature`](Self::offset_feature)
    /// - store errors from reading the source or writing the sink
    pub fn execute<S, K>(&self, source: &S, sink: &mut K) -> Result<OffsetReport>
    where
        S: FeatureSource + ?Sized,
        K: FeatureSink + ?Sized,
    {
        self.config.validate()?;
        let feature = self.read_input(source)?;
        let (output, report) = self.offset_validated(&feature)?;
        self.write_output(sink, output)?;
        Ok(report)
    }

    /// Runs the pipeline against a store that is both source and sink.
    ///
    /// # Errors
    ///
    /// Same as [`execute`](Self::execute).
    pub fn execute_in<T>(&self, store: &mut T) -> Result<OffsetReport>
    where
        T: FeatureSource + FeatureSink + ?Sized,
    {
        self.config.validate()?;
        let feature = self.read_input(&*store)?;
        let (output, report) = self.offset_validated(&feature)?;
        self.write_output(store, output)?;
        Ok(report)
    }

    fn read_input<S: FeatureSource + ?Sized>(&self, source: &S) -> Result<PolygonFeature> {
        let input = &self.config.input_location;
        info!(location = %input, "reading input geometry");
        let feature = source
            .first_feature(input)?
            .ok_or_else(|| RingError::EmptyInput {
                location: input.clone(),
            })?;
        debug!(coordinates = feature.coordinate_count(), "input feature read");
        Ok(feature)
    }

    fn write_output<K: FeatureSink + ?Sized>(&self, sink: &mut K, output: PolygonFeature) -> Result<()> {
        let target = &self.config.output_location;
        if sink.exists(target)? {
            info!(location = %target, "output exists, overwriting");
            sink.delete(target)?;
        }
        sink.write(target, output)?;
        info!(location = %target, "offset polygon saved");
        Ok(())
    }
}
