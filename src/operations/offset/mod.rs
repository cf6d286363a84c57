pub mod corner;
pub mod edge_offset;
mod ring_offset;

pub use corner::{solve_corner, solve_corner_with, Corner, CornerPolicy};
pub use edge_offset::{offset_edge, unit_normal};
pub use ring_offset::{RingOffset2D, WindingPolicy};
