//! World-to-screen mapping
//!
//! Scales the whole map uniformly to fit the window and centres it,
//! leaving bars on the short side.

use macroquad::prelude::{Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Screen pixels per world unit
    pub scale: f32,
    /// Screen position of world origin
    pub offset: Vec2,
}

impl Viewport {
    /// Fit a world of `world_size` into a `screen_w` x `screen_h` window
    pub fn fit(world_size: Vec2, screen_w: f32, screen_h: f32) -> Self {
        if world_size.x <= 0.0 || world_size.y <= 0.0 || screen_w <= 0.0 || screen_h <= 0.0 {
            return Self { scale: 1.0, offset: Vec2::ZERO };
        }
        let scale = (screen_w / world_size.x).min(screen_h / world_size.y);
        let offset = Vec2::new(
            (screen_w - world_size.x * scale) * 0.5,
            (screen_h - world_size.y * scale) * 0.5,
        );
        Self { scale, offset }
    }

    pub fn to_screen(&self, world: Vec2) -> Vec2 {
        self.offset + world * self.scale
    }

    pub fn rect_to_screen(&self, world: Rect) -> Rect {
        let p = self.to_screen(Vec2::new(world.x, world.y));
        Rect::new(p.x, p.y, world.w * self.scale, world.h * self.scale)
    }

    pub fn length_to_screen(&self, world: f32) -> f32 {
        world * self.scale
    }
}
