//! Simulation module
//!
//! Rendering-agnostic game logic. Given the same inputs and frame times,
//! the simulation produces identical results.

pub mod collision;
pub mod geometry;
pub mod layout;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{bounce_bricks, bounce_paddle, bounce_walls, intersects, reflect};
pub use geometry::Rect;
pub use layout::generate_bricks;
pub use snapshot::{BrickView, RenderState};
pub use state::{Ball, Brick, BrickField, BrickZone, Game, GameStatus, Paddle};
pub use tick::{FrameInput, Simulation, tick};
