//! Game settings
//!
//! Window, timing, player tuning, HUD text and palette. Stored as RON next
//! to the level and compiled into the binary; any field left out of the file
//! falls back to the values below.

use serde::Deserialize;
use crate::game::PlayerSettings;
use crate::world::Tile;

/// Settings the game ships with
pub const DEFAULT_CONFIG: &str = include_str!("../assets/config.ron");

#[derive(Debug)]
pub enum ConfigError {
    ParseError(ron::error::SpannedError),
    Invalid(&'static str),
    /// One clamped frame of movement covers a whole tile or more
    TooFast { step: f32, tile_size: f32 },
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::Invalid(what) => write!(f, "Invalid config: {}", what),
            ConfigError::TooFast { step, tile_size } => write!(
                f,
                "Player can move {} units in one frame, must be less than the tile size {}",
                step, tile_size
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// RGB triple, 0-255
pub type Rgb = [u8; 3];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub floor: Rgb,
    pub wall: Rgb,
    pub shelf: Rgb,
    pub door: Rgb,
    pub counter: Rgb,
    pub player: Rgb,
    pub text: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [15, 15, 25],
            floor: [40, 40, 60],
            wall: [90, 90, 130],
            shelf: [140, 120, 80],
            door: [120, 80, 40],
            counter: [240, 240, 240],
            player: [230, 230, 80],
            text: [230, 230, 230],
        }
    }
}

impl Palette {
    pub fn tile(&self, tile: Tile) -> Rgb {
        match tile {
            Tile::Floor => self.floor,
            Tile::Wall => self.wall,
            Tile::Shelf => self.shelf,
            Tile::Door => self.door,
            Tile::Counter => self.counter,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub title: String,
    /// Initial window size in pixels
    pub window_width: i32,
    pub window_height: i32,
    /// Frame cap; None leaves pacing to vsync
    pub target_fps: Option<u32>,
    /// Longest step a single frame may simulate (seconds)
    pub max_frame_delta: f32,
    pub player: PlayerSettings,
    /// Text drawn in the top-left corner
    pub hud: Vec<String>,
    /// HUD font size in pixels
    pub hud_font_size: f32,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "Tile Store".to_string(),
            window_width: 1200,
            window_height: 720,
            target_fps: Some(60),
            max_frame_delta: 0.1,
            player: PlayerSettings::default(),
            hud: vec![
                "Use WASD or arrow keys to move.".to_string(),
                "ESC or window close to quit.".to_string(),
            ],
            hud_font_size: 22.0,
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a RON config
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// The built-in config, falling back to defaults if it fails to load
    pub fn builtin() -> Self {
        match Self::from_ron_str(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("built-in config rejected ({}), using defaults", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let radius = self.player.radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::Invalid("player radius must be positive and finite"));
        }
        let speed = self.player.speed;
        if !speed.is_finite() || speed < 0.0 {
            return Err(ConfigError::Invalid("player speed must be finite and not negative"));
        }
        if !self.max_frame_delta.is_finite() || self.max_frame_delta <= 0.0 {
            return Err(ConfigError::Invalid("max_frame_delta must be positive and finite"));
        }
        if !self.hud_font_size.is_finite() || self.hud_font_size <= 0.0 {
            return Err(ConfigError::Invalid("hud_font_size must be positive and finite"));
        }
        if self.target_fps == Some(0) {
            return Err(ConfigError::Invalid("target_fps must be at least 1"));
        }
        if self.window_width <= 0 || self.window_height <= 0 {
            return Err(ConfigError::Invalid("window size must be positive"));
        }
        Ok(())
    }

    /// Longest distance the player can cover in one clamped frame
    pub fn max_step(&self) -> f32 {
        self.player.speed * self.max_frame_delta
    }

    /// Collision only looks at where a move ends, so a frame's worth of
    /// travel has to stay under one tile or the player can hop a wall.
    pub fn check_tile_size(&self, tile_size: f32) -> Result<(), ConfigError> {
        let step = self.max_step();
        if step >= tile_size {
            return Err(ConfigError::TooFast { step, tile_size });
        }
        Ok(())
    }

    /// Target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        self.target_fps.map(|fps| 1.0 / fps as f64)
    }
}
