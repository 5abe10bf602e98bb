//! Data-driven game balance
//!
//! Every gameplay number the simulation reads lives here so a run can be
//! reconfigured from JSON without touching code.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Logical play field size
    pub play_width: f32,
    pub play_height: f32,

    // === Bricks ===
    pub brick_columns: u32,
    pub brick_rows: u32,

    // === Ball ===
    /// Edge length of the square ball
    pub ball_size: f32,
    pub ball_start: Vec2,
    /// Initial velocity (units/second)
    pub ball_velocity: Vec2,
    /// Multiplier applied to both speed components on every brick hit
    pub brick_speedup: f32,
    /// Cap on ball speed magnitude after a speed-up
    pub max_ball_speed: f32,

    // === Paddle ===
    pub paddle_width: f32,
    /// Top-left of the paddle at start
    pub paddle_start: Vec2,
    /// Keyboard steering speed (units/second)
    pub paddle_speed: f32,
    pub lives: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            play_width: 800.0,
            play_height: 600.0,

            brick_columns: 10,
            brick_rows: 5,

            ball_size: 20.0,
            ball_start: Vec2::new(400.0, 280.0),
            ball_velocity: Vec2::new(200.0, 200.0),
            brick_speedup: 1.02,
            max_ball_speed: 1500.0,

            paddle_width: 80.0,
            paddle_start: Vec2::new(400.0, 560.0),
            paddle_speed: 400.0,
            lives: 3,
        }
    }
}

impl Tuning {
    /// Reject values the simulation treats as caller contract violations
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.play_width <= 0.0 || self.play_height <= 0.0 {
            return Err(ConfigError::invalid("play field must have a positive size"));
        }
        if self.brick_columns == 0 || self.brick_rows == 0 {
            return Err(ConfigError::invalid(
                "brick_columns and brick_rows must be positive",
            ));
        }
        if self.ball_size <= 0.0 {
            return Err(ConfigError::invalid("ball_size must be positive"));
        }
        if self.paddle_width <= 0.0 {
            return Err(ConfigError::invalid("paddle_width must be positive"));
        }
        if self.brick_speedup < 1.0 {
            return Err(ConfigError::invalid("brick_speedup must be at least 1.0"));
        }
        if self.max_ball_speed <= 0.0 {
            return Err(ConfigError::invalid("max_ball_speed must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_grid() {
        let tuning = Tuning {
            brick_columns: 0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_non_positive_paddle() {
        let tuning = Tuning {
            paddle_width: 0.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"brick_rows": 3}"#).unwrap();
        assert_eq!(tuning.brick_rows, 3);
        assert_eq!(tuning.brick_columns, 10);
        assert_eq!(tuning.ball_velocity, Vec2::new(200.0, 200.0));
    }
}
