//! Window, input polling and the frame loop

use std::sync::OnceLock;
use macroquad::prelude::*;
use log::{error, info};
use tile_store::config::GameConfig;
use tile_store::game::{FrameOutcome, GameState, LoadError, MoveInput};
use tile_store::render;
use tile_store::world::{load_level_from_str, STORE_LEVEL};
use tile_store::VERSION;

static CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// Loaded on first use by `window_conf`, after the logger is up
fn config() -> &'static GameConfig {
    CONFIG.get_or_init(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init();
        GameConfig::builtin()
    })
}

fn window_conf() -> Conf {
    let config = config();
    Conf {
        window_title: format!("{} v{}", config.title, VERSION),
        window_width: config.window_width,
        window_height: config.window_height,
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

/// Build the store and put the player at its spawn
fn load_game(config: &GameConfig) -> Result<GameState, LoadError> {
    let level = load_level_from_str(STORE_LEVEL)?;
    GameState::from_level(&level, config)
}

/// Sleep off whatever is left of the frame budget
fn pace_frame(frame_start: f64, target_frame_time: f64) {
    // Native: use sleep for bulk, then spin-wait for precision
    #[cfg(not(target_arch = "wasm32"))]
    {
        let spin_margin = 0.002; // 2ms
        while get_time() - frame_start + spin_margin < target_frame_time {
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        while get_time() - frame_start < target_frame_time {
            std::hint::spin_loop();
        }
    }
    // WASM: the browser paces frames
    #[cfg(target_arch = "wasm32")]
    {
        let _ = (frame_start, target_frame_time);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let config = config();
    let mut game = match load_game(config) {
        Ok(game) => game,
        Err(e) => {
            error!("failed to load store: {}", e);
            std::process::exit(1);
        }
    };

    // Turn window-close into a signal we see in MoveInput instead of an abrupt exit
    prevent_quit();

    info!("=== Tile Store v{} ===", VERSION);

    loop {
        let frame_start = get_time();

        let input = MoveInput::poll();
        let outcome = game.step(&input, get_frame_time());

        render::draw_frame(&game, config);

        if let Some(target) = config.frame_time() {
            pace_frame(frame_start, target);
        }

        next_frame().await;

        // Quit only once the frame it was seen in is on screen
        if outcome == FrameOutcome::Quit {
            info!("quit after {} frames at cell {:?}", game.frame, game.player_cell());
            break;
        }
    }
}
