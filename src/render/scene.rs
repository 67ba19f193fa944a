//! Drawing the store: tiles, then the player, then the HUD

use macroquad::prelude::*;
use crate::config::{GameConfig, Rgb};
use crate::game::GameState;
use super::Viewport;

fn rgb(c: Rgb) -> Color {
    Color::from_rgba(c[0], c[1], c[2], 255)
}

/// Draw one complete frame for the current game state
pub fn draw_frame(game: &GameState, config: &GameConfig) {
    let palette = &config.palette;
    clear_background(rgb(palette.background));

    let vp = Viewport::fit(game.map.world_size(), screen_width(), screen_height());

    for (col, row, tile) in game.map.cells() {
        let r = vp.rect_to_screen(game.map.cell_rect(col, row));
        // Overdraw by a pixel so scaled tiles don't leave hairline seams
        draw_rectangle(r.x.floor(), r.y.floor(), r.w.ceil() + 1.0, r.h.ceil() + 1.0, rgb(palette.tile(tile)));
    }

    let p = vp.to_screen(game.player.position);
    draw_circle(p.x, p.y, vp.length_to_screen(game.player.radius), rgb(palette.player));

    let status = status_line(game);
    let lines = config.hud.iter().map(String::as_str).chain(std::iter::once(status.as_str()));
    draw_hud(lines, config.hud_font_size, rgb(palette.text));
}

/// Player cell plus whichever axes collision held back last frame
pub fn status_line(game: &GameState) -> String {
    let (col, row) = game.player_cell();
    let blocked = game.last_blocked;
    if !blocked.any() {
        return format!("Cell ({}, {})", col, row);
    }
    let axes = match (blocked.x, blocked.y) {
        (true, true) => "X+Y",
        (true, false) => "X",
        _ => "Y",
    };
    format!("Cell ({}, {})  blocked {}", col, row, axes)
}

fn draw_hud<'a>(lines: impl Iterator<Item = &'a str>, font_size: f32, color: Color) {
    let mut y = 5.0;
    for line in lines {
        let dims = measure_text(line, None, font_size as u16, 1.0);
        y += dims.offset_y;
        draw_text(line, 5.0, y, font_size, color);
        y += (dims.height - dims.offset_y).max(0.0) + 2.0;
    }
}
