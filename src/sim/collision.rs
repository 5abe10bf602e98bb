//! Collision detection and response
//!
//! Everything is axis-aligned. Bounces do not compute an angle of
//! incidence: the ball's vertical speed flips and its horizontal speed is
//! pointed away from the center of a reference rectangle (`reflect`).
//! Paddle and brick hits share that rule, with bricks using the paddle as
//! the reference.

use super::geometry::Rect;
use super::state::{Ball, BrickField, Paddle};
use crate::consts::CONTACT_NUDGE;

/// Inclusive axis-aligned overlap test
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Flip vertical speed and send the ball away from `reference`'s center.
///
/// Horizontal speed is inverted only when the ball is moving toward the
/// reference center from the side it is on.
pub fn reflect(ball: &mut Ball, reference: &Rect) {
    ball.vel.y = -ball.vel.y;

    let ball_center = ball.rect().center().x;
    let reference_center = reference.center().x;
    let moving_back_left = ball_center > reference_center && ball.vel.x < 0.0;
    let moving_back_right = ball_center < reference_center && ball.vel.x > 0.0;

    if moving_back_left || moving_back_right {
        ball.vel.x = -ball.vel.x;
    }
}

/// Bounce off the left, right and top edges of the field.
///
/// Returns true if any wall was hit. There is no floor.
pub fn bounce_walls(ball: &mut Ball, play_width: f32) -> bool {
    let mut hit = false;

    if ball.pos.x <= 0.0 {
        ball.pos.x = CONTACT_NUDGE;
        ball.vel.x = -ball.vel.x;
        hit = true;
    }

    if ball.pos.x + ball.size >= play_width {
        ball.pos.x = play_width - ball.size;
        ball.vel.x = -ball.vel.x;
        hit = true;
    }

    if ball.pos.y <= 0.0 {
        ball.pos.y = CONTACT_NUDGE;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }

    hit
}

/// Bounce off the paddle if overlapping. Returns true on contact.
pub fn bounce_paddle(ball: &mut Ball, paddle: &Paddle) -> bool {
    let paddle_rect = paddle.rect();
    if !intersects(&ball.rect(), &paddle_rect) {
        return false;
    }

    ball.pos.y -= CONTACT_NUDGE;
    reflect(ball, &paddle_rect);
    true
}

/// Scale both speed components, then cap the speed magnitude
pub fn speed_up(ball: &mut Ball, factor: f32, max_speed: f32) {
    ball.vel *= factor;
    if ball.vel.length() > max_speed {
        ball.vel = ball.vel.clamp_length_max(max_speed);
    }
}

/// Break every intact brick the ball overlaps.
///
/// Only zones whose padded rectangle contains the ball's top-left or
/// bottom-right corner are searched. Each hit speeds the ball up and
/// reflects it using the paddle as reference. Returns the number of bricks
/// broken.
pub fn bounce_bricks(
    ball: &mut Ball,
    field: &mut BrickField,
    paddle: &Paddle,
    speedup: f32,
    max_speed: f32,
) -> usize {
    let ball_rect = ball.rect();
    let top_left = ball_rect.top_left();
    let bottom_right = ball_rect.bottom_right();
    let reference = paddle.rect();
    let mut hits = 0;

    for (z, zone) in field.zones.iter().enumerate() {
        if !zone.rect.contains_point(top_left) && !zone.rect.contains_point(bottom_right) {
            continue;
        }

        for brick in &mut field.bricks[zone.bricks.clone()] {
            if brick.broken || !intersects(&ball_rect, &brick.rect) {
                continue;
            }

            brick.smash();
            speed_up(ball, speedup, max_speed);
            reflect(ball, &reference);
            hits += 1;

            log::debug!(
                "Brick hit in zone {} at ({}, {}), ball speed now {:.1}",
                z,
                brick.rect.left(),
                brick.rect.top(),
                ball.vel.length()
            );
        }
    }

    hits
}
