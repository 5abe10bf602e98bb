//! Demo autopilot
//!
//! Plays the game through a `HeadlessPlatform`: presses start while the
//! game is ready, then keeps the paddle under the ball with a small random
//! aiming offset so rallies don't loop forever.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::Key;
use super::headless::HeadlessPlatform;
use crate::sim::{GameStatus, RenderState};

/// Paddle-center dead zone for keyboard steering
const STEER_DEAD_ZONE: f32 = 4.0;

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Aim offset as a fraction of paddle width
    offset: f32,
    frames_until_retarget: u32,
}

impl Autopilot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            offset: 0.0,
            frames_until_retarget: 0,
        }
    }

    /// Pointer x that keeps the paddle under the ball
    pub fn aim(&mut self, state: &RenderState) -> f32 {
        if self.frames_until_retarget == 0 {
            self.offset = self.rng.random_range(-0.35..0.35);
            self.frames_until_retarget = self.rng.random_range(30..90);
        }
        self.frames_until_retarget -= 1;

        state.ball.center().x + self.offset * state.paddle.width()
    }

    /// Set up the platform's input for the next frame
    pub fn drive(&mut self, state: &RenderState, platform: &mut HeadlessPlatform) {
        if state.status == GameStatus::GameReady {
            platform.press(Key::Space);
        } else {
            platform.release(Key::Space);
        }

        let target = self.aim(state);
        platform.set_pointer(Vec2::new(target, state.paddle.center().y));

        // Keyboard steering toward the same target
        let paddle_center = state.paddle.center().x;
        platform.release(Key::Left);
        platform.release(Key::Right);
        if paddle_center < target - STEER_DEAD_ZONE {
            platform.press(Key::Right);
        } else if paddle_center > target + STEER_DEAD_ZONE {
            platform.press(Key::Left);
        }
    }
}
