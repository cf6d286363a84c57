use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{FeatureSink, FeatureSource};
use crate::error::{Result, StoreError};
use crate::geometry::{PolygonFeature, SpatialReference};
use crate::math::Point2;

const EXTENSION: &str = "geojson";

/// Feature store backed by a directory of GeoJSON `FeatureCollection` files.
///
/// Location `name` maps to `<root>/<name>.geojson`. The spatial reference is
/// kept in the legacy named `crs` member of the collection.
#[derive(Debug, Clone)]
pub struct GeoJsonStore {
    root: PathBuf,
}

impl GeoJsonStore {
    /// Creates a store rooted at `root`. The directory is created on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the file backing `location`.
    #[must_use]
    pub fn path_for(&self, location: &str) -> PathBuf {
        self.root.join(format!("{location}.{EXTENSION}"))
    }

    fn read_collection(&self, location: &str) -> Result<FeatureCollection> {
        let path = self.path_for(location);
        if !path.is_file() {
            return Err(StoreError::LocationNotFound(location.to_owned()).into());
        }
        let file = File::open(&path).map_err(|source| io_error(&path, source))?;
        let collection = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| json_error(&path, source))?;
        Ok(collection)
    }
}

impl FeatureSource for GeoJsonStore {
    fn first_feature(&self, location: &str) -> Result<Option<PolygonFeature>> {
        let collection = self.read_collection(location)?;
        debug!(location, features = collection.features.len(), "read feature collection");

        let spatial_reference = collection.crs.map(|crs| SpatialReference::new(crs.properties.name));
        let Some(feature) = collection.features.into_iter().next() else {
            return Ok(None);
        };

        let parts = match feature.geometry {
            Some(geometry) => polygon_parts(location, geometry)?,
            None => Vec::new(),
        };
        Ok(Some(PolygonFeature::new(parts, spatial_reference)))
    }
}

impl FeatureSink for GeoJsonStore {
    fn exists(&self, location: &str) -> Result<bool> {
        Ok(self.path_for(location).is_file())
    }

    fn delete(&mut self, location: &str) -> Result<()> {
        let path = self.path_for(location);
        if !path.is_file() {
            return Err(StoreError::LocationNotFound(location.to_owned()).into());
        }
        fs::remove_file(&path).map_err(|source| io_error(&path, source))?;
        Ok(())
    }

    fn write(&mut self, location: &str, feature: PolygonFeature) -> Result<()> {
        fs::create_dir_all(&self.root).map_err(|source| io_error(&self.root, source))?;

        let path = self.path_for(location);
        let coordinates: Vec<Vec<[f64; 2]>> = feature
            .parts
            .iter()
            .map(|part| part.iter().map(|p| [p.x, p.y]).collect())
            .collect();
        let coordinates =
            serde_json::to_value(coordinates).map_err(|source| json_error(&path, source))?;

        let collection = FeatureCollection {
            kind: "FeatureCollection".to_owned(),
            crs: feature.spatial_reference.map(|sr| Crs {
                kind: "name".to_owned(),
                properties: CrsProperties {
                    name: sr.as_str().to_owned(),
                },
            }),
            features: vec![Feature {
                kind: "Feature".to_owned(),
                geometry: Some(Geometry {
                    kind: "Polygon".to_owned(),
                    coordinates,
                }),
                properties: serde_json::Value::Object(serde_json::Map::new()),
            }],
        };

        let file = File::create(&path).map_err(|source| io_error(&path, source))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &collection)
            .map_err(|source| json_error(&path, source))?;
        writer.flush().map_err(|source| io_error(&path, source))?;
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct FeatureCollection {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    crs: Option<Crs>,
    features: Vec<Feature>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Crs {
    #[serde(rename = "type")]
    kind: String,
    properties: CrsProperties,
}

#[derive(Debug, Serialize, Deserialize)]
struct CrsProperties {
    name: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: String,
    geometry: Option<Geometry>,
    #[serde(default)]
    properties: serde_json::Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: serde_json::Value,
}

/// Decodes `Polygon` coordinates into parts. Extra ordinates (Z, M) are ignored.
fn polygon_parts(location: &str, geometry: Geometry) -> Result<Vec<Vec<Point2>>> {
    if geometry.kind != "Polygon" {
        return Err(StoreError::UnsupportedGeometry {
            location: location.to_owned(),
            kind: geometry.kind,
        }
        .into());
    }

    let rings: Vec<Vec<Vec<f64>>> =
        serde_json::from_value(geometry.coordinates).map_err(|e| StoreError::MalformedGeometry {
            location: location.to_owned(),
            reason: e.to_string(),
        })?;

    let mut parts = Vec::with_capacity(rings.len());
    for ring in rings {
        let mut part = Vec::with_capacity(ring.len());
        for position in ring {
            let [x, y, ..] = position.as_slice() else {
                return Err(StoreError::MalformedGeometry {
                    location: location.to_owned(),
                    reason: format!("position with {} ordinates", position.len()),
                }
                .into());
            };
            part.push(Point2::new(*x, *y));
        }
        parts.push(part);
    }
    Ok(parts)
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

fn json_error(path: &Path, source: serde_json::Error) -> StoreError {
    StoreError::Json {
        path: path.display().to_string(),
        source,
    }
}
