//! Rendering-agnostic view of one frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::state::{Game, GameStatus};
use crate::tuning::Tuning;

/// An intact brick as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    pub rect: Rect,
    /// Zone (row) index, used for coloring
    pub row: usize,
}

/// Everything needed to draw a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderState {
    pub status: GameStatus,
    pub play_size: Vec2,
    pub paddle: Rect,
    pub ball: Rect,
    /// Intact bricks only
    pub bricks: Vec<BrickView>,
    pub score: i32,
    pub lives: u32,
}

impl RenderState {
    pub fn capture(game: &Game, tuning: &Tuning) -> Self {
        let bricks = game
            .bricks
            .iter_with_zone()
            .filter(|(_, brick)| !brick.broken)
            .map(|(row, brick)| BrickView {
                rect: brick.rect,
                row,
            })
            .collect();

        Self {
            status: game.status,
            play_size: Vec2::new(tuning.play_width, tuning.play_height),
            paddle: game.paddle.rect(),
            ball: game.ball.rect(),
            bricks,
            score: game.score,
            lives: game.paddle.lives,
        }
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.len()
    }
}
