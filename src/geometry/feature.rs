use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// Opaque coordinate-system identifier, e.g. `"EPSG:32646"`.
///
/// Carried from the input feature to the output feature unchanged; nothing in
/// the offset computation reads it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpatialReference(String);

impl SpatialReference {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SpatialReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A polygon feature as exchanged with a feature store.
///
/// `parts` holds the coordinate parts in storage order. Only single-ring
/// polygons are meaningful to the offset; additional parts are concatenated
/// by the ring extractor.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonFeature {
    pub parts: Vec<Vec<Point2>>,
    pub spatial_reference: Option<SpatialReference>,
}

impl PolygonFeature {
    /// Creates a feature from its coordinate parts.
    #[must_use]
    pub fn new(parts: Vec<Vec<Point2>>, spatial_reference: Option<SpatialReference>) -> Self {
        Self {
            parts,
            spatial_reference,
        }
    }

    /// Creates a single-part feature from one ring.
    #[must_use]
    pub fn from_ring(ring: Vec<Point2>, spatial_reference: Option<SpatialReference>) -> Self {
        Self::new(vec![ring], spatial_reference)
    }

    /// Total number of coordinates over all parts.
    #[must_use]
    pub fn coordinate_count(&self) -> usize {
        self.parts.iter().map(Vec::len).sum()
    }
}
