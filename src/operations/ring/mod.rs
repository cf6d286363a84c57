mod build;
mod extract;

pub use build::RingBuilder;
pub use extract::RingExtractor;
