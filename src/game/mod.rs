//! Game module - the player, their input and the per-frame update
//!
//! Everything here is plain data and pure functions over the tile map,
//! so it runs (and is tested) without a window.

pub mod collision;
pub mod input;
pub mod player;
pub mod runtime;

pub use input::MoveInput;
pub use player::{Player, PlayerSettings};
pub use runtime::{FrameOutcome, GameState, LoadError};
