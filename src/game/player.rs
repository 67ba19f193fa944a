//! The player-controlled disc

use macroquad::prelude::Vec2;
use serde::Deserialize;

/// Tunables for the player, read from the game config
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Collision radius in world units
    pub radius: f32,
    /// World units per second
    pub speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        // 9 units per frame at 60 FPS
        Self { radius: 42.0, speed: 540.0 }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub position: Vec2,
    pub radius: f32,
    pub speed: f32,
}

impl Player {
    pub fn new(position: Vec2, settings: PlayerSettings) -> Self {
        Self {
            position,
            radius: settings.radius,
            speed: settings.speed,
        }
    }

    /// Where the player would end up moving along `direction` for `delta_time`.
    ///
    /// Pure: nothing is committed until the caller has resolved collisions.
    pub fn proposed_move(&self, direction: Vec2, delta_time: f32) -> Vec2 {
        self.position + direction * self.speed * delta_time
    }

    pub fn commit(&mut self, position: Vec2) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MoveInput;

    fn player_at(x: f32, y: f32, speed: f32) -> Player {
        Player::new(Vec2::new(x, y), PlayerSettings { radius: 10.0, speed })
    }

    #[test]
    fn test_proposed_move_does_not_mutate() {
        let player = player_at(50.0, 50.0, 100.0);
        let next = player.proposed_move(Vec2::new(1.0, 0.0), 0.5);
        assert!((next.x - 100.0).abs() < 0.001);
        assert!((next.y - 50.0).abs() < 0.001);
        assert!((player.position.x - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_diagonal_speed_matches_axis_speed() {
        let player = player_at(0.0, 0.0, 100.0);
        let straight = MoveInput { right: true, ..Default::default() }.direction();
        let diagonal = MoveInput { right: true, up: true, ..Default::default() }.direction();

        let d_straight = player.proposed_move(straight, 1.0) - player.position;
        let d_diagonal = player.proposed_move(diagonal, 1.0) - player.position;

        assert!((d_straight.length() - 100.0).abs() < 0.01);
        assert!((d_diagonal.length() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_zero_delta_stays_put() {
        let player = player_at(12.0, 34.0, 100.0);
        let next = player.proposed_move(Vec2::new(0.0, 1.0), 0.0);
        assert_eq!(next, player.position);
    }
}
