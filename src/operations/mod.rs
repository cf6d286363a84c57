pub mod offset;
pub mod ring;
