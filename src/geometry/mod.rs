pub mod feature;
pub mod ring;

pub use feature::{PolygonFeature, SpatialReference};
pub use ring::{Edge2D, OffsetRing, VertexRing};
