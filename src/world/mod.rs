//! World module - static tile grid the player walks around in
//!
//! - Tile kinds and layout codes
//! - Fixed-size tile map with out-of-bounds-is-solid lookups
//! - RON level definition and loading

mod level;
mod tile;
mod tile_map;

pub use level::*;
pub use tile::*;
pub use tile_map::*;
