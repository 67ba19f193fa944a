//! Static tile grid
//!
//! Row-major grid of tiles with world/cell conversion. Built once from the
//! level layout and never mutated afterwards.
//!
//! Out-of-bounds policy: anything outside the grid reads as a wall, so the
//! map edge always blocks movement. Use [`TileMap::get`] when the caller needs
//! to tell "outside" apart from a real wall.

use macroquad::prelude::{Rect, Vec2};
use super::{LevelError, Tile};

/// What [`TileMap::kind_at`] reports for cells outside the grid
pub const OUT_OF_BOUNDS: Tile = Tile::Wall;

#[derive(Debug, Clone)]
pub struct TileMap {
    cols: usize,
    rows: usize,
    /// Edge length of a cell in world units
    tile_size: f32,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Build from a flat row-major tile list
    pub fn new(cols: usize, rows: usize, tile_size: f32, tiles: Vec<Tile>) -> Result<Self, LevelError> {
        if cols == 0 || rows == 0 {
            return Err(LevelError::EmptyLayout);
        }
        if !(tile_size.is_finite() && tile_size > 0.0) {
            return Err(LevelError::BadTileSize(tile_size));
        }
        if tiles.len() != cols * rows {
            return Err(LevelError::SizeMismatch {
                expected: cols * rows,
                found: tiles.len(),
            });
        }
        Ok(Self { cols, rows, tile_size, tiles })
    }

    /// Decode layout rows of tile codes (`#`, `.`, `S`, ...)
    pub fn from_rows<S: AsRef<str>>(rows: &[S], tile_size: f32) -> Result<Self, LevelError> {
        let first = rows.first().ok_or(LevelError::EmptyLayout)?;
        let cols = first.as_ref().chars().count();

        let mut tiles = Vec::with_capacity(cols * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(LevelError::RaggedRow { row, expected: cols, found });
            }
            for (col, code) in line.chars().enumerate() {
                let tile = Tile::from_code(code).ok_or(LevelError::UnknownTile { code, col, row })?;
                tiles.push(tile);
            }
        }

        Self::new(cols, rows.len(), tile_size, tiles)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Total extent of the grid in world units
    pub fn world_size(&self) -> Vec2 {
        Vec2::new(self.cols as f32 * self.tile_size, self.rows as f32 * self.tile_size)
    }

    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as usize) < self.cols && (row as usize) < self.rows
    }

    /// Tile at a cell, or None outside the grid
    pub fn get(&self, col: i32, row: i32) -> Option<Tile> {
        if !self.in_bounds(col, row) {
            return None;
        }
        Some(self.tiles[row as usize * self.cols + col as usize])
    }

    /// Tile at a cell; outside the grid this is [`OUT_OF_BOUNDS`]
    pub fn kind_at(&self, col: i32, row: i32) -> Tile {
        self.get(col, row).unwrap_or(OUT_OF_BOUNDS)
    }

    pub fn is_solid(&self, col: i32, row: i32) -> bool {
        self.kind_at(col, row).is_solid()
    }

    /// Cell containing a world position (floor division, so negatives stay negative)
    pub fn world_to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        (
            (x / self.tile_size).floor() as i32,
            (y / self.tile_size).floor() as i32,
        )
    }

    pub fn cell_center(&self, col: i32, row: i32) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.tile_size,
            (row as f32 + 0.5) * self.tile_size,
        )
    }

    pub fn cell_rect(&self, col: i32, row: i32) -> Rect {
        Rect::new(
            col as f32 * self.tile_size,
            row as f32 * self.tile_size,
            self.tile_size,
            self.tile_size,
        )
    }

    /// Every cell in row-major order as (col, row, tile)
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Tile)> + '_ {
        self.tiles.iter().enumerate().map(move |(i, &tile)| {
            ((i % self.cols) as i32, (i / self.cols) as i32, tile)
        })
    }
}
