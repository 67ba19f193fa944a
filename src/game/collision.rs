//! Collision System
//!
//! Circle-vs-grid collision for the player disc. The disc is tested through
//! its axis-aligned bounding box against whole cells; edges that merely touch
//! do not count as overlap. Movement is resolved one axis at a time, which
//! lets the player slide along a wall when moving diagonally into it.

use macroquad::prelude::Vec2;
use crate::world::TileMap;

/// Which axes were rejected during a resolve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocked {
    pub x: bool,
    pub y: bool,
}

impl Blocked {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Result of a collision check
#[derive(Debug, Clone, Copy)]
pub struct CollisionResult {
    /// Corrected position after collision
    pub position: Vec2,
    pub blocked: Blocked,
}

/// Inclusive range of cells a 1D span [min, max] overlaps, touching edges excluded
fn cell_span(min: f32, max: f32, tile_size: f32) -> (i32, i32) {
    let first = (min / tile_size).floor() as i32;
    let last = (max / tile_size).ceil() as i32 - 1;
    (first, last.max(first))
}

/// Does a disc at `center` overlap any solid cell (off-map counts as solid)?
pub fn overlaps_solid(map: &TileMap, center: Vec2, radius: f32) -> bool {
    let ts = map.tile_size();
    let (c0, c1) = cell_span(center.x - radius, center.x + radius, ts);
    let (r0, r1) = cell_span(center.y - radius, center.y + radius, ts);

    (r0..=r1).any(|row| (c0..=c1).any(|col| map.is_solid(col, row)))
}

/// Move from `current` toward `candidate`, dropping any axis that would
/// end up overlapping a solid cell.
///
/// X is tried first with the current Y, then Y with the resolved X.
/// Blocked movement is a normal outcome, not an error.
pub fn resolve(map: &TileMap, current: Vec2, candidate: Vec2, radius: f32) -> CollisionResult {
    let mut position = current;
    let mut blocked = Blocked::default();

    if candidate.x != current.x {
        let try_x = Vec2::new(candidate.x, position.y);
        if overlaps_solid(map, try_x, radius) {
            blocked.x = true;
        } else {
            position.x = candidate.x;
        }
    }

    if candidate.y != current.y {
        let try_y = Vec2::new(position.x, candidate.y);
        if overlaps_solid(map, try_y, radius) {
            blocked.y = true;
        } else {
            position.y = candidate.y;
        }
    }

    CollisionResult { position, blocked }
}
