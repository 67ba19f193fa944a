//! Per-frame input snapshot
//!
//! Polls the keyboard once per frame into plain data so the update step
//! never touches macroquad's input state.

use macroquad::prelude::*;

/// Held movement keys and the quit signal for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Escape pressed or the window asked to close
    pub quit: bool,
}

impl MoveInput {
    /// Read arrow keys / WASD and the quit signal.
    ///
    /// Window-close only shows up here if `prevent_quit()` was called at startup.
    pub fn poll() -> Self {
        Self {
            up: is_key_down(KeyCode::Up) || is_key_down(KeyCode::W),
            down: is_key_down(KeyCode::Down) || is_key_down(KeyCode::S),
            left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
            right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
            quit: is_key_pressed(KeyCode::Escape) || is_quit_requested(),
        }
    }

    /// Unit direction (screen space, +y is down), or zero when idle.
    ///
    /// Opposite keys cancel out. Diagonals are normalized so they are no
    /// faster than straight moves.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.left { dir.x -= 1.0; }
        if self.right { dir.x += 1.0; }
        if self.up { dir.y -= 1.0; }
        if self.down { dir.y += 1.0; }
        dir.normalize_or_zero()
    }
}
