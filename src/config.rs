//! Run configuration for the offset pipeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, GeometryError, Result};
use crate::operations::offset::{CornerPolicy, WindingPolicy};

/// Offset distance used when none is configured, in working CRS units.
pub const DEFAULT_OFFSET_DISTANCE: f64 = 5.0;

/// Everything one offset run needs. Passed explicitly into
/// [`OffsetPipeline`](crate::pipeline::OffsetPipeline).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetConfig {
    /// Feature set holding the source polygon.
    pub input_location: String,
    /// Feature set the offset polygon is written to (overwritten).
    pub output_location: String,
    /// Signed offset distance. See [`WindingPolicy`] for the sign convention.
    #[serde(default = "default_offset_distance")]
    pub offset_distance: f64,
    #[serde(default)]
    pub corner_policy: CornerPolicy,
    #[serde(default)]
    pub winding: WindingPolicy,
    /// Solve corners on the rayon thread pool.
    #[serde(default)]
    pub parallel: bool,
}

fn default_offset_distance() -> f64 {
    DEFAULT_OFFSET_DISTANCE
}

impl OffsetConfig {
    /// Creates a configuration with default policies.
    #[must_use]
    pub fn new(
        input_location: impl Into<String>,
        output_location: impl Into<String>,
        offset_distance: f64,
    ) -> Self {
        Self {
            input_location: input_location.into(),
            output_location: output_location.into(),
            offset_distance,
            corner_policy: CornerPolicy::default(),
            winding: WindingPolicy::default(),
            parallel: false,
        }
    }

    #[must_use]
    pub fn with_corner_policy(mut self, corner_policy: CornerPolicy) -> Self {
        self.corner_policy = corner_policy;
        self
    }

    #[must_use]
    pub fn with_winding(mut self, winding: WindingPolicy) -> Self {
        self.winding = winding;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Read` or `ConfigError::Parse` if the file cannot
    /// be read or does not describe a configuration.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// Checks the settings before any I/O happens.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFiniteDistance` for a NaN or infinite distance
    /// - `ConfigError::Missing` for an empty input or output location
    pub fn validate(&self) -> Result<()> {
        if !self.offset_distance.is_finite() {
            return Err(GeometryError::NonFiniteDistance(self.offset_distance).into());
        }
        if self.input_location.is_empty() {
            return Err(ConfigError::Missing("input location").into());
        }
        if self.output_location.is_empty() {
            return Err(ConfigError::Missing("output location").into());
        }
        Ok(())
    }
}
