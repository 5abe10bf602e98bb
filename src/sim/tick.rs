//! Per-frame simulation step
//!
//! Advances the game by one variable-length frame. The caller supplies the
//! elapsed time and already-decoded input; nothing here touches a window,
//! a clock or a renderer.

use super::collision::{bounce_bricks, bounce_paddle, bounce_walls};
use super::snapshot::RenderState;
use super::state::{Game, GameStatus};
use crate::consts::LOSS_MARGIN;
use crate::tuning::Tuning;

/// Input commands for a single frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Pointer x position; when present the paddle centers on it
    pub pointer_x: Option<f32>,
    /// Keyboard steering: negative = left, positive = right
    pub steer: f32,
    /// Start signal (edge-triggered, true for one frame only)
    pub start: bool,
}

/// Advance the game by `dt` seconds
pub fn tick(game: &mut Game, input: &FrameInput, dt: f32, tuning: &Tuning) {
    match game.status {
        GameStatus::GameReady => {
            if input.start {
                game.status = GameStatus::GameOn;
                log::info!("Game started");
            }
            return;
        }
        GameStatus::GameOn => {}
        GameStatus::Pause | GameStatus::GameOver => return,
    }

    // Paddle
    if let Some(pointer_x) = input.pointer_x {
        game.paddle.follow_pointer(pointer_x);
    } else if input.steer != 0.0 {
        game.paddle.steer(input.steer, tuning.paddle_speed, dt, tuning.play_width);
    }

    // Ball
    game.ball.integrate(dt);
    bounce_walls(&mut game.ball, tuning.play_width);

    if game.ball.pos.y > game.paddle.pos.y + LOSS_MARGIN {
        game.status = GameStatus::GameOver;
        log::info!(
            "Game over: ball lost at ({:.1}, {:.1}), {} bricks left",
            game.ball.pos.x,
            game.ball.pos.y,
            game.bricks.remaining()
        );
        return;
    }

    bounce_paddle(&mut game.ball, &game.paddle);
    bounce_bricks(
        &mut game.ball,
        &mut game.bricks,
        &game.paddle,
        tuning.brick_speedup,
        tuning.max_ball_speed,
    );
}

/// Owned simulation: one game plus the tuning it runs with
#[derive(Debug, Clone)]
pub struct Simulation {
    game: Game,
    tuning: Tuning,
}

impl Simulation {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            game: Game::new(&tuning),
            tuning,
        }
    }

    /// Run one frame and return what should be drawn
    pub fn step(&mut self, dt: f32, input: &FrameInput) -> RenderState {
        tick(&mut self.game, input, dt, &self.tuning);
        self.render_state()
    }

    pub fn render_state(&self) -> RenderState {
        RenderState::capture(&self.game, &self.tuning)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn status(&self) -> GameStatus {
        self.game.status
    }
}
