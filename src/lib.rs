//! Brick Breaker - a Breakout-style ball and paddle game
//!
//! Core modules:
//! - `sim`: Simulation (ball integration, collisions, game state machine)
//! - `renderer`: Draw command lists and vertex tessellation
//! - `platform`: Input/timing/drawing boundary and a headless backend
//! - `app`: Frame loop tying the platform to the simulation
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::ConfigError;
pub use settings::{ControlScheme, Settings};
pub use tuning::Tuning;

/// Fixed geometry constants that are not part of the tunable balance
pub mod consts {
    /// Paddle height (the paddle only varies in width)
    pub const PADDLE_HEIGHT: f32 = 20.0;

    /// Brick height; also the spacing between brick rows
    pub const BRICK_HEIGHT: f32 = 30.0;
    /// Zone rectangle starts this far above its row
    pub const ZONE_PAD_TOP: f32 = 5.0;
    /// Extra height added to the zone rectangle beyond the brick height
    pub const ZONE_PAD_HEIGHT: f32 = 10.0;

    /// Ball is lost once its top edge is this far below the paddle's top edge
    pub const LOSS_MARGIN: f32 = 20.0;
    /// Position correction applied on wall and paddle contact (anti-sticking)
    pub const CONTACT_NUDGE: f32 = 1.0;

    /// Samples kept by the FPS counter
    pub const FPS_SAMPLES: usize = 60;
}
