pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod pipeline;
pub mod store;

pub use config::OffsetConfig;
pub use error::{OffsetError, Result};
pub use pipeline::{OffsetPipeline, OffsetReport};
