use std::collections::HashMap;

use slotmap::SlotMap;

use super::{FeatureSink, FeatureSource};
use crate::error::{Result, StoreError};
use crate::geometry::PolygonFeature;

slotmap::new_key_type! {
    /// Unique identifier for a feature in a [`MemoryStore`].
    pub struct FeatureId;
}

/// In-memory feature store.
///
/// Features live in a single arena and are referenced from their feature
/// sets by generational ID, so deleting a set never leaves dangling entries.
#[derive(Debug, Default)]
pub struct MemoryStore {
    features: SlotMap<FeatureId, PolygonFeature>,
    sets: HashMap<String, Vec<FeatureId>>,
}

impl MemoryStore {
    /// Creates a new, empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty feature set at `location` if none exists.
    pub fn create_set(&mut self, location: &str) {
        self.sets.entry(location.to_owned()).or_default();
    }

    /// Appends `feature` to the set at `location`, creating the set if needed.
    pub fn add_feature(&mut self, location: &str, feature: PolygonFeature) -> FeatureId {
        let id = self.features.insert(feature);
        self.sets.entry(location.to_owned()).or_default().push(id);
        id
    }

    /// Returns the feature with the given ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LocationNotFound` if the feature was deleted.
    pub fn feature(&self, id: FeatureId) -> Result<&PolygonFeature> {
        self.features
            .get(id)
            .ok_or_else(|| StoreError::LocationNotFound(format!("feature {id:?}")).into())
    }

    /// Returns the IDs of the features in the set at `location`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LocationNotFound` if no set exists at `location`.
    pub fn feature_ids(&self, location: &str) -> Result<&[FeatureId]> {
        self.sets
            .get(location)
            .map(Vec::as_slice)
            .ok_or_else(|| StoreError::LocationNotFound(location.to_owned()).into())
    }
}

impl FeatureSource for MemoryStore {
    fn first_feature(&self, location: &str) -> Result<Option<PolygonFeature>> {
        match self.feature_ids(location)?.first() {
            Some(&id) => Ok(Some(self.feature(id)?.clone())),
            None => Ok(None),
        }
    }
}

impl FeatureSink for MemoryStore {
    fn exists(&self, location: &str) -> Result<bool> {
        Ok(self.sets.contains_key(location))
    }

    fn delete(&mut self, location: &str) -> Result<()> {
        let ids = self
            .sets
            .remove(location)
            .ok_or_else(|| StoreError::LocationNotFound(location.to_owned()))?;
        for id in ids {
            self.features.remove(id);
        }
        Ok(())
    }

    fn write(&mut self, location: &str, feature: PolygonFeature) -> Result<()> {
        let id = self.features.insert(feature);
        if let Some(old) = self.sets.insert(location.to_owned(), vec![id]) {
            for old_id in old {
                self.features.remove(old_id);
            }
        }
        Ok(())
    }
}
