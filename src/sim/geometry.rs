//! Axis-aligned rectangle geometry for collision tests
//!
//! Rectangles are stored as a top-left corner plus a size, with the y axis
//! pointing down the screen. All containment and overlap tests are
//! inclusive on every edge, so touching rectangles count as overlapping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Top-left corner point
    pub fn top_left(&self) -> Vec2 {
        self.pos
    }

    /// Bottom-right corner point
    pub fn bottom_right(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Check whether two rectangles overlap (edges touching counts)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// Check whether a point lies inside the rectangle or on its boundary
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
        assert_eq!(r.bottom_right(), Vec2::new(40.0, 60.0));
    }

    #[test]
    fn test_intersects_overlap_and_miss() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(11.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 10.5, 10.0, 10.0)));
    }

    #[test]
    fn test_intersects_touching_edges() {
        // Ball right edge at x=100, brick left edge at x=100
        let ball = Rect::new(80.0, 50.0, 20.0, 20.0);
        let brick = Rect::new(100.0, 40.0, 80.0, 30.0);
        assert!(ball.intersects(&brick));
        assert!(brick.intersects(&ball));

        // Corner-to-corner contact
        let corner = Rect::new(100.0, 70.0, 5.0, 5.0);
        assert!(ball.intersects(&corner));
    }

    #[test]
    fn test_contains_point_inclusive() {
        let r = Rect::new(0.0, 55.0, 800.0, 40.0);
        assert!(r.contains_point(Vec2::new(0.0, 55.0)));
        assert!(r.contains_point(Vec2::new(800.0, 95.0)));
        assert!(!r.contains_point(Vec2::new(400.0, 95.1)));
        assert!(!r.contains_point(Vec2::new(-0.1, 60.0)));
    }
}
