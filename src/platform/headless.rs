//! In-memory platform backend
//!
//! No window: input is scripted through setters, time advances by a fixed
//! amount per frame, and draw calls are recorded as `DrawCommand`s for
//! inspection. Used by the native demo binary and by tests.

use std::collections::HashSet;
use std::mem;

use glam::Vec2;

use super::{Canvas, Clock, Color, Input, Key, Platform};
use crate::renderer::DrawCommand;
use crate::sim::Rect;

#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    frame_dt: f32,
    frame_limit: Option<u64>,
    frames: u64,
    quit: bool,
    pointer: Vec2,
    /// Keys the script currently holds
    held: HashSet<Key>,
    /// Keys latched down for the current frame
    down: HashSet<Key>,
    /// Keys latched down for the previous frame
    prev_down: HashSet<Key>,
    /// Draw calls of the last completed frame
    recorded: Vec<DrawCommand>,
    pending: Vec<DrawCommand>,
}

impl Default for HeadlessPlatform {
    fn default() -> Self {
        Self::new(1.0 / 60.0)
    }
}

impl HeadlessPlatform {
    pub fn new(frame_dt: f32) -> Self {
        Self {
            frame_dt,
            frame_limit: None,
            frames: 0,
            quit: false,
            pointer: Vec2::ZERO,
            held: HashSet::new(),
            down: HashSet::new(),
            prev_down: HashSet::new(),
            recorded: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Request quit after `limit` frames have been polled
    pub fn with_frame_limit(mut self, limit: u64) -> Self {
        self.frame_limit = Some(limit);
        self
    }

    pub fn set_frame_dt(&mut self, dt: f32) {
        self.frame_dt = dt;
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Hold a key down from the next poll on
    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Frames polled so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw calls issued during the last completed frame
    pub fn draw_commands(&self) -> &[DrawCommand] {
        &self.recorded
    }
}

impl Input for HeadlessPlatform {
    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.down.contains(&key) && !self.prev_down.contains(&key)
    }

    fn is_key_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }
}

impl Clock for HeadlessPlatform {
    fn frame_time(&self) -> f32 {
        self.frame_dt
    }
}

impl Canvas for HeadlessPlatform {
    fn begin_frame(&mut self) {
        self.pending.clear();
    }

    fn draw_filled_rect(&mut self, rect: Rect, color: Color) {
        self.pending.push(DrawCommand::FilledRect { rect, color });
    }

    fn draw_rect_outline(&mut self, rect: Rect, color: Color) {
        self.pending.push(DrawCommand::RectOutline { rect, color });
    }

    fn draw_fps(&mut self, pos: Vec2, fps: u32) {
        self.pending.push(DrawCommand::FpsCounter { pos, fps });
    }

    fn end_frame(&mut self) {
        self.recorded = mem::take(&mut self.pending);
    }
}

impl Platform for HeadlessPlatform {
    fn poll(&mut self) {
        self.frames += 1;
        self.prev_down = mem::replace(&mut self.down, self.held.clone());
    }

    fn should_quit(&self) -> bool {
        self.quit || self.frame_limit.is_some_and(|limit| self.frames >= limit)
    }

    fn set_target_fps(&mut self, fps: u32) {
        if fps > 0 {
            self.frame_dt = 1.0 / fps as f32;
        }
    }
}
