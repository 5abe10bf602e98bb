//! Game state and core simulation types
//!
//! The `Game` aggregate owns every entity exclusively. Bricks live in a
//! single arena (`BrickField`); zones refer to them by index range.

use std::ops::Range;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::layout::generate_bricks;
use crate::consts::PADDLE_HEIGHT;
use crate::tuning::Tuning;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Ball lost below the paddle; nothing moves any more
    GameOver,
    /// Reserved. No transition enters this state yet.
    Pause,
    /// Active gameplay
    GameOn,
    /// Waiting for the start signal
    #[default]
    GameReady,
}

/// The ball (a square of edge length `size`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Velocity in units/second
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        debug_assert!(size > 0.0, "ball size must be positive");
        Self { pos, vel, size }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, Vec2::splat(self.size))
    }

    /// Euler integration over `dt` seconds
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    /// Not decremented by the simulation yet; surfaced for the HUD
    pub lives: u32,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, lives: u32) -> Self {
        debug_assert!(width > 0.0, "paddle width must be positive");
        Self {
            pos,
            width: width.max(1.0),
            lives,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, PADDLE_HEIGHT)
    }

    /// Center the paddle horizontally on a pointer x coordinate (no clamping)
    pub fn follow_pointer(&mut self, pointer_x: f32) {
        self.pos.x = pointer_x - self.width / 2.0;
    }

    /// Keyboard steering: moves only while the paddle is inside the field
    pub fn steer(&mut self, direction: f32, speed: f32, dt: f32, play_width: f32) {
        if direction < 0.0 && self.pos.x > 0.0 {
            self.pos.x -= speed * dt;
        }
        if direction > 0.0 && self.pos.x + self.width < play_width {
            self.pos.x += speed * dt;
        }
    }
}

/// A single brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub broken: bool,
}

impl Brick {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            broken: false,
        }
    }

    /// Mark the brick broken. Returns false if it already was.
    pub fn smash(&mut self) -> bool {
        if self.broken {
            return false;
        }
        self.broken = true;
        true
    }
}

/// One row of bricks plus the padded rectangle used as a coarse filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickZone {
    pub rect: Rect,
    /// Indices into `BrickField::bricks`
    pub bricks: Range<usize>,
}

/// Arena of bricks grouped into zones
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrickField {
    pub bricks: Vec<Brick>,
    pub zones: Vec<BrickZone>,
}

impl BrickField {
    /// Bricks belonging to one zone
    pub fn zone_bricks(&self, zone: usize) -> &[Brick] {
        match self.zones.get(zone) {
            Some(z) => &self.bricks[z.bricks.clone()],
            None => &[],
        }
    }

    /// Look up a brick by (zone, position within zone)
    pub fn get(&self, zone: usize, index: usize) -> Option<&Brick> {
        self.zone_bricks(zone).get(index)
    }

    pub fn get_mut(&mut self, zone: usize, index: usize) -> Option<&mut Brick> {
        let range = self.zones.get(zone)?.bricks.clone();
        self.bricks[range].get_mut(index)
    }

    /// Iterate bricks with their zone index
    pub fn iter_with_zone(&self) -> impl Iterator<Item = (usize, &Brick)> {
        self.zones
            .iter()
            .enumerate()
            .flat_map(move |(z, zone)| self.bricks[zone.bricks.clone()].iter().map(move |b| (z, b)))
    }

    pub fn len(&self) -> usize {
        self.bricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bricks.is_empty()
    }

    /// Number of bricks not yet broken
    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.broken).count()
    }
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub status: GameStatus,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickField,
    /// Not incremented by the simulation yet; surfaced for the HUD
    pub score: i32,
}

impl Game {
    /// Build a fresh game with a newly generated brick layout
    pub fn new(tuning: &Tuning) -> Self {
        let bricks = generate_bricks(tuning.brick_columns, tuning.brick_rows, tuning.play_width);
        log::info!(
            "New game: {}x{} bricks on a {}x{} field",
            tuning.brick_columns,
            tuning.brick_rows,
            tuning.play_width,
            tuning.play_height
        );

        Self {
            status: GameStatus::GameReady,
            paddle: Paddle::new(tuning.paddle_start, tuning.paddle_width, tuning.lives),
            ball: Ball::new(tuning.ball_start, tuning.ball_velocity, tuning.ball_size),
            bricks,
            score: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_ready() {
        let game = Game::new(&Tuning::default());
        assert_eq!(game.status, GameStatus::GameReady);
        assert_eq!(game.score, 0);
        assert_eq!(game.paddle.lives, 3);
        assert_eq!(game.bricks.len(), 50);
        assert_eq!(game.bricks.remaining(), 50);
        assert_eq!(game.ball.rect(), Rect::new(400.0, 280.0, 20.0, 20.0));
        assert_eq!(game.paddle.rect(), Rect::new(400.0, 560.0, 80.0, 20.0));
    }

    #[test]
    fn test_smash_is_one_way() {
        let mut brick = Brick::new(Rect::new(0.0, 0.0, 80.0, 30.0));
        assert!(brick.smash());
        assert!(brick.broken);
        assert!(!brick.smash());
        assert!(brick.broken);
    }

    #[test]
    fn test_zone_indexing() {
        let mut field = generate_bricks(4, 3, 400.0);
        assert_eq!(field.zone_bricks(1).len(), 4);
        assert_eq!(field.get(2, 3).map(|b| b.rect.pos.x), Some(300.0));
        assert!(field.get(3, 0).is_none());
        assert!(field.get(0, 4).is_none());

        if let Some(brick) = field.get_mut(1, 2) {
            brick.smash();
        }
        assert!(field.bricks[6].broken);
        assert_eq!(field.remaining(), 11);
        assert_eq!(field.iter_with_zone().filter(|(z, _)| *z == 2).count(), 4);
    }

    #[test]
    fn test_follow_pointer_is_unclamped() {
        let mut paddle = Paddle::new(Vec2::new(400.0, 560.0), 80.0, 3);
        paddle.follow_pointer(10.0);
        assert_eq!(paddle.pos.x, -30.0);
        paddle.follow_pointer(830.0);
        assert_eq!(paddle.pos.x, 790.0);
    }

    #[test]
    fn test_steer_stops_at_field_edges() {
        let mut paddle = Paddle::new(Vec2::new(0.0, 560.0), 80.0, 3);
        paddle.steer(-1.0, 400.0, 0.1, 800.0);
        assert_eq!(paddle.pos.x, 0.0);
        paddle.steer(1.0, 400.0, 0.1, 800.0);
        assert_eq!(paddle.pos.x, 40.0);

        paddle.pos.x = 720.0;
        paddle.steer(1.0, 400.0, 0.1, 800.0);
        assert_eq!(paddle.pos.x, 720.0);
    }
}
