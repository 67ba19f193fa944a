//! Tile Store: top-down walkabout in a tiny retro corner store
//!
//! - Fixed tile grid (floor, walls, shelves, counter, door)
//! - One player disc driven by arrow keys / WASD
//! - Axis-separated circle-vs-grid collision with wall sliding
//!
//! The world and game modules never touch the window, so the whole
//! movement core runs under `cargo test`.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod game;
pub mod render;
pub mod world;
