//! Feature stores: where input polygons come from and offsets are written to.
//!
//! A location names a feature set (an in-memory collection or a file).

pub mod geojson;
pub mod memory;

pub use geojson::GeoJsonStore;
pub use memory::{FeatureId, MemoryStore};

use crate::error::Result;
use crate::geometry::PolygonFeature;

/// Read side of a feature store.
pub trait FeatureSource {
    /// Returns the first feature of the set at `location`, or `None` if the
    /// set is empty.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LocationNotFound` if no set exists at `location`,
    /// or an I/O or format error from the backing store.
    fn first_feature(&self, location: &str) -> Result<Option<PolygonFeature>>;
}

/// Write side of a feature store.
pub trait FeatureSink {
    /// Returns whether a feature set exists at `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be queried.
    fn exists(&self, location: &str) -> Result<bool>;

    /// Removes the feature set at `location`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LocationNotFound` if nothing exists there.
    fn delete(&mut self, location: &str) -> Result<()>;

    /// Writes `feature` as the only member of a new set at `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn write(&mut self, location: &str, feature: PolygonFeature) -> Result<()>;
}
