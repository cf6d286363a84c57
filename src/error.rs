use thiserror::Error;

/// Top-level error type for the offset pipeline.
#[derive(Debug, Error)]
pub enum OffsetError {
    #[error(transparent)]
    Ring(#[from] RingError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while extracting or rebuilding a vertex ring.
#[derive(Debug, Error)]
pub enum RingError {
    #[error("input is empty: no polygon found in {location}")]
    EmptyInput { location: String },

    #[error("not enough vertices to form a polygon: found {found}, need at least 3")]
    InsufficientVertices { found: usize },

    #[error("failed to generate enough corners for the offset polygon: got {corners}, need at least 3")]
    DegenerateRing { corners: usize },
}

/// Errors related to numeric input.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite coordinate at vertex {index}: ({x}, {y})")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    #[error("offset distance must be finite, got {0}")]
    NonFiniteDistance(f64),
}

/// Errors raised by feature stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("feature set not found: {0}")]
    LocationNotFound(String),

    #[error("unsupported geometry type '{kind}' in {location}")]
    UnsupportedGeometry { location: String, kind: String },

    #[error("malformed geometry in {location}: {reason}")]
    MalformedGeometry { location: String, reason: String },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed feature collection {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors related to run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required setting: {0}")]
    Missing(&'static str),

    #[error("cannot read configuration {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for results using [`OffsetError`].
pub type Result<T> = std::result::Result<T, OffsetError>;
