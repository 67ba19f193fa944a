//! Level definition and loading
//!
//! Uses RON (Rusty Object Notation) for the built-in store layout.

use macroquad::prelude::Vec2;
use serde::Deserialize;
use super::{Tile, TileMap};

/// The store the game ships with
pub const STORE_LEVEL: &str = include_str!("../../assets/levels/store.ron");

/// Error type for level loading
#[derive(Debug)]
pub enum LevelError {
    ParseError(ron::error::SpannedError),
    EmptyLayout,
    RaggedRow { row: usize, expected: usize, found: usize },
    SizeMismatch { expected: usize, found: usize },
    UnknownTile { code: char, col: usize, row: usize },
    BadTileSize(f32),
    SpawnOutOfBounds { col: i32, row: i32 },
    SpawnBlocked { col: i32, row: i32, tile: Tile },
}

impl From<ron::error::SpannedError> for LevelError {
    fn from(e: ron::error::SpannedError) -> Self {
        LevelError::ParseError(e)
    }
}

impl std::fmt::Display for LevelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelError::ParseError(e) => write!(f, "Parse error: {}", e),
            LevelError::EmptyLayout => write!(f, "Layout has no tiles"),
            LevelError::RaggedRow { row, expected, found } => {
                write!(f, "Row {} has {} tiles, expected {}", row, found, expected)
            }
            LevelError::SizeMismatch { expected, found } => {
                write!(f, "Got {} tiles for a grid of {}", found, expected)
            }
            LevelError::UnknownTile { code, col, row } => {
                write!(f, "Unknown tile code {:?} at ({}, {})", code, col, row)
            }
            LevelError::BadTileSize(size) => write!(f, "Tile size must be positive, got {}", size),
            LevelError::SpawnOutOfBounds { col, row } => {
                write!(f, "Spawn cell ({}, {}) is outside the map", col, row)
            }
            LevelError::SpawnBlocked { col, row, tile } => {
                write!(f, "Spawn cell ({}, {}) is a {}", col, row, tile.label())
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::ParseError(e) => Some(e),
            _ => None,
        }
    }
}

/// Level as written in the RON file
#[derive(Debug, Clone, Deserialize)]
pub struct Level {
    /// Cell edge length in world units
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    /// Player start cell (col, row)
    #[serde(default = "default_spawn")]
    pub spawn: (i32, i32),
    /// One string per row, one tile code per character
    pub layout: Vec<String>,
}

fn default_tile_size() -> f32 {
    120.0
}

fn default_spawn() -> (i32, i32) {
    (1, 1)
}

impl Level {
    /// Decode the layout into a tile map
    pub fn build_map(&self) -> Result<TileMap, LevelError> {
        TileMap::from_rows(&self.layout, self.tile_size)
    }

    /// World position of the spawn cell centre, checked against the map
    pub fn spawn_point(&self, map: &TileMap) -> Result<Vec2, LevelError> {
        let (col, row) = self.spawn;
        let tile = map.get(col, row).ok_or(LevelError::SpawnOutOfBounds { col, row })?;
        if tile.is_solid() {
            return Err(LevelError::SpawnBlocked { col, row, tile });
        }
        Ok(map.cell_center(col, row))
    }
}

/// Load a level from a RON string
pub fn load_level_from_str(s: &str) -> Result<Level, LevelError> {
    let level: Level = ron::from_str(s)?;
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_level_builds() {
        let level = load_level_from_str(STORE_LEVEL).unwrap();
        let map = level.build_map().unwrap();
        assert_eq!(map.cols(), 20);
        assert_eq!(map.rows(), 12);
        assert_eq!(map.kind_at(19, 5), Tile::Door);
        assert_eq!(map.kind_at(12, 2), Tile::Counter);
        assert_eq!(map.kind_at(2, 3), Tile::Shelf);

        let spawn = level.spawn_point(&map).unwrap();
        assert_eq!(map.world_to_cell(spawn.x, spawn.y), level.spawn);
    }

    #[test]
    fn test_store_is_walled_in() {
        let map = load_level_from_str(STORE_LEVEL).unwrap().build_map().unwrap();
        let (cols, rows) = (map.cols() as i32, map.rows() as i32);
        for col in 0..cols {
            assert!(map.is_solid(col, 0));
            assert!(map.is_solid(col, rows - 1));
        }
        for row in 0..rows {
            assert!(map.is_solid(0, row));
            assert!(map.is_solid(cols - 1, row));
        }
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let level = load_level_from_str(r####"(layout: ["###", "#.#", "###"])"####).unwrap();
        assert!((level.tile_size - 120.0).abs() < 0.001);
        assert_eq!(level.spawn, (1, 1));
    }

    #[test]
    fn test_spawn_must_be_walkable() {
        let level = load_level_from_str(r##"(spawn: (0, 0), layout: ["#.", ".."])"##).unwrap();
        let map = level.build_map().unwrap();
        assert!(matches!(
            level.spawn_point(&map),
            Err(LevelError::SpawnBlocked { col: 0, row: 0, tile: Tile::Wall })
        ));

        let level = load_level_from_str(r#"(spawn: (5, 0), layout: [".."])"#).unwrap();
        let map = level.build_map().unwrap();
        assert!(matches!(
            level.spawn_point(&map),
            Err(LevelError::SpawnOutOfBounds { col: 5, row: 0 })
        ));
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = load_level_from_str("(layout: [").unwrap_err();
        assert!(matches!(err, LevelError::ParseError(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }
}
