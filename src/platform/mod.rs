//! Platform abstraction layer
//!
//! The boundary between the simulation and whatever owns the window:
//! - Input (pointer position, edge- and level-triggered keys)
//! - Time (elapsed seconds per frame)
//! - Drawing (filled rects, outlines, FPS counter)
//! - Lifecycle (quit signal, frame-rate cap)

pub mod autopilot;
pub mod headless;

use glam::Vec2;

use crate::sim::Rect;

pub use autopilot::Autopilot;
pub use headless::HeadlessPlatform;

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Left,
    Right,
    A,
    D,
    Escape,
}

/// Input queries for the current frame
pub trait Input {
    /// Pointer position in play-field coordinates
    fn pointer_position(&self) -> Vec2;

    /// True only on the frame the key went down
    fn is_key_pressed(&self, key: Key) -> bool;

    /// True every frame the key is held
    fn is_key_down(&self, key: Key) -> bool;
}

/// Frame timing
pub trait Clock {
    /// Wall-clock seconds since the previous frame
    fn frame_time(&self) -> f32;
}

/// Drawing commands. Order within a frame does not matter.
pub trait Canvas {
    fn begin_frame(&mut self) {}

    fn draw_filled_rect(&mut self, rect: Rect, color: Color);

    fn draw_rect_outline(&mut self, rect: Rect, color: Color);

    fn draw_fps(&mut self, pos: Vec2, fps: u32);

    fn end_frame(&mut self) {}
}

/// A complete presentation backend
pub trait Platform: Input + Clock + Canvas {
    /// Latch input and timing for the next frame
    fn poll(&mut self);

    /// Window close requested
    fn should_quit(&self) -> bool;

    fn set_target_fps(&mut self, fps: u32);
}
