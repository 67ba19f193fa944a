//! Game Runtime
//!
//! Owns the tile map and the player and advances them one frame at a time.
//! Nothing here touches the window: input arrives as a [`MoveInput`]
//! snapshot and the caller does the drawing.

use log::{debug, info};
use crate::config::{ConfigError, GameConfig};
use crate::world::{Level, LevelError, TileMap};
use super::collision::{resolve, Blocked};
use super::{MoveInput, Player};

/// Why a level and config could not be turned into a game
#[derive(Debug)]
pub enum LoadError {
    Level(LevelError),
    Config(ConfigError),
}

impl From<LevelError> for LoadError {
    fn from(e: LevelError) -> Self {
        LoadError::Level(e)
    }
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Config(e)
    }
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Level(e) => write!(f, "Level: {}", e),
            LoadError::Config(e) => write!(f, "Config: {}", e),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Level(e) => Some(e),
            LoadError::Config(e) => Some(e),
        }
    }
}

/// What the loop should do after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// Quit was requested this frame; the frame itself still ran
    Quit,
}

pub struct GameState {
    pub map: TileMap,
    pub player: Player,
    /// Longest step (seconds) a single frame may simulate
    pub max_frame_delta: f32,
    /// Frames stepped so far
    pub frame: u64,
    /// Axes rejected by collision on the last frame
    pub last_blocked: Blocked,
}

impl GameState {
    pub fn new(map: TileMap, player: Player, max_frame_delta: f32) -> Self {
        Self {
            map,
            player,
            max_frame_delta,
            frame: 0,
            last_blocked: Blocked::default(),
        }
    }

    /// Build the level's map and put the player at its spawn.
    ///
    /// Rejects configs whose per-frame travel could carry the player over a
    /// whole tile.
    pub fn from_level(level: &Level, config: &GameConfig) -> Result<Self, LoadError> {
        let map = level.build_map()?;
        config.check_tile_size(map.tile_size())?;
        let spawn = level.spawn_point(&map)?;
        info!(
            "store {}x{} tiles of {} units, spawn at {:?}",
            map.cols(),
            map.rows(),
            map.tile_size(),
            level.spawn
        );
        let player = Player::new(spawn, config.player);
        Ok(Self::new(map, player, config.max_frame_delta))
    }

    /// Run one frame of movement: direction, proposal, collision, commit.
    pub fn step(&mut self, input: &MoveInput, delta_time: f32) -> FrameOutcome {
        let dt = self.clamp_delta(delta_time);
        let direction = input.direction();

        let candidate = self.player.proposed_move(direction, dt);
        let result = resolve(&self.map, self.player.position, candidate, self.player.radius);
        self.player.commit(result.position);
        self.last_blocked = result.blocked;
        self.frame += 1;

        if input.quit {
            FrameOutcome::Quit
        } else {
            FrameOutcome::Continue
        }
    }

    fn clamp_delta(&self, delta_time: f32) -> f32 {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            return 0.0;
        }
        if delta_time > self.max_frame_delta {
            debug!("frame {} took {:.3}s, simulating {:.3}s", self.frame, delta_time, self.max_frame_delta);
            return self.max_frame_delta;
        }
        delta_time
    }

    /// Grid cell the player's centre is in
    pub fn player_cell(&self) -> (i32, i32) {
        let p = self.player.position;
        self.map.world_to_cell(p.x, p.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerSettings;
    use crate::game::collision::overlaps_solid;
    use crate::config::DEFAULT_CONFIG;
    use crate::world::{load_level_from_str, STORE_LEVEL};

    fn state(rows: &[&str], spawn: (i32, i32), speed: f32) -> GameState {
        let map = TileMap::from_rows(rows, 40.0).unwrap();
        let start = map.cell_center(spawn.0, spawn.1);
        let player = Player::new(start, PlayerSettings { radius: 16.0, speed });
        GameState::new(map, player, 1.0)
    }

    #[test]
    fn test_store_loads_with_shipped_config() {
        let level = load_level_from_str(STORE_LEVEL).unwrap();
        let config = GameConfig::from_ron_str(DEFAULT_CONFIG).unwrap();
        let game = GameState::from_level(&level, &config).unwrap();
        assert_eq!(game.player_cell(), level.spawn);
        assert!((game.max_frame_delta - config.max_frame_delta).abs() < 0.001);
    }

    #[test]
    fn test_over_fast_config_is_rejected() {
        let level = load_level_from_str(r##"(tile_size: 40.0, spawn: (0, 0), layout: [".#....", ".#...."])"##).unwrap();
        let config = GameConfig::from_ron_str("(player: (radius: 16.0, speed: 10000.0), max_frame_delta: 0.1)").unwrap();
        let err = GameState::from_level(&level, &config).err().unwrap();
        assert!(matches!(err, LoadError::Config(ConfigError::TooFast { .. })));

        // At a legal speed the same wall column holds
        let config = GameConfig::from_ron_str("(player: (radius: 16.0, speed: 390.0), max_frame_delta: 0.1)").unwrap();
        let mut game = GameState::from_level(&level, &config).unwrap();
        let right = MoveInput { right: true, ..Default::default() };
        for _ in 0..20 {
            game.step(&right, 1.0);
        }
        assert_eq!(game.player_cell(), (0, 0));
        assert!(game.last_blocked.x);
    }

    #[test]
    fn test_level_errors_surface_through_load() {
        let level = load_level_from_str(r##"(spawn: (0, 0), layout: ["#."])"##).unwrap();
        let err = GameState::from_level(&level, &GameConfig::default()).err().unwrap();
        assert!(matches!(err, LoadError::Level(LevelError::SpawnBlocked { .. })));
        assert!(err.to_string().starts_with("Level:"));
    }

    #[test]
    fn test_idle_frame_keeps_position() {
        let mut game = state(&["...", "...", "..."], (1, 1), 100.0);
        let before = game.player.position;
        assert_eq!(game.step(&MoveInput::default(), 0.016), FrameOutcome::Continue);
        assert_eq!(game.player.position, before);
        assert_eq!(game.frame, 1);
    }

    #[test]
    fn test_walk_right_until_wall() {
        let mut game = state(&["...", ".#.", "..."], (0, 1), 4.0);
        let right = MoveInput { right: true, ..Default::default() };
        let start = game.player.position;

        game.step(&right, 1.0);
        assert!((game.player.position.x - (start.x + 4.0)).abs() < 0.001);
        assert!(!game.last_blocked.any());

        let after_first = game.player.position;
        game.step(&right, 1.0);
        assert_eq!(game.player.position, after_first);
        assert!(game.last_blocked.x);
        assert_eq!(game.player_cell(), (0, 1));
    }

    #[test]
    fn test_quit_finishes_the_frame() {
        let mut game = state(&["....", "....", "...."], (1, 1), 10.0);
        let start = game.player.position;
        let input = MoveInput { down: true, quit: true, ..Default::default() };
        assert_eq!(game.step(&input, 1.0), FrameOutcome::Quit);
        assert!((game.player.position.y - (start.y + 10.0)).abs() < 0.001);
        assert_eq!(game.frame, 1);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut game = state(&["......", "......"], (0, 0), 10.0);
        game.max_frame_delta = 0.5;
        let start = game.player.position;
        game.step(&MoveInput { right: true, ..Default::default() }, 30.0);
        assert!((game.player.position.x - (start.x + 5.0)).abs() < 0.001);

        let here = game.player.position;
        game.step(&MoveInput { right: true, ..Default::default() }, f32::NAN);
        game.step(&MoveInput { right: true, ..Default::default() }, -1.0);
        assert_eq!(game.player.position, here);
    }

    #[test]
    fn test_never_ends_frame_inside_a_solid() {
        let level = load_level_from_str(STORE_LEVEL).unwrap();
        let map = level.build_map().unwrap();
        let spawn = level.spawn_point(&map).unwrap();
        let mut game = GameState::new(map, Player::new(spawn, PlayerSettings::default()), 0.1);

        let pattern = [
            MoveInput { right: true, ..Default::default() },
            MoveInput { down: true, right: true, ..Default::default() },
            MoveInput { down: true, ..Default::default() },
            MoveInput { left: true, down: true, ..Default::default() },
            MoveInput { left: true, ..Default::default() },
            MoveInput { up: true, left: true, ..Default::default() },
            MoveInput { up: true, ..Default::default() },
            MoveInput { up: true, right: true, ..Default::default() },
        ];
        // Hold each direction long enough to run into walls and shelves
        for input in pattern.iter().cycle().take(64) {
            for _ in 0..40 {
                game.step(input, 1.0 / 60.0);
                assert!(!overlaps_solid(&game.map, game.player.position, game.player.radius));
            }
        }
        assert_eq!(game.frame, 64 * 40);
    }
}
