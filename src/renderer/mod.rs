//! Rendering module
//!
//! Translates a `RenderState` into backend-neutral draw commands. A
//! backend either replays them on a `Canvas` or uploads the tessellated
//! vertices from `shapes`.

pub mod shapes;
pub mod vertex;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::platform::{Canvas, Color};
use crate::sim::{Rect, RenderState};
use vertex::colors;

/// Where the FPS counter is drawn
pub const FPS_POSITION: Vec2 = Vec2::new(10.0, 10.0);

/// A single fire-and-forget draw call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    FilledRect { rect: Rect, color: Color },
    RectOutline { rect: Rect, color: Color },
    FpsCounter { pos: Vec2, fps: u32 },
}

/// Build the draw list for one frame. `fps` is drawn when present.
pub fn build_scene(state: &RenderState, fps: Option<u32>) -> Vec<DrawCommand> {
    let mut commands = Vec::with_capacity(state.bricks.len() * 2 + 3);

    for brick in &state.bricks {
        commands.push(DrawCommand::FilledRect {
            rect: brick.rect,
            color: colors::brick_row(brick.row),
        });
        commands.push(DrawCommand::RectOutline {
            rect: brick.rect,
            color: colors::BRICK_OUTLINE,
        });
    }

    commands.push(DrawCommand::FilledRect {
        rect: state.paddle,
        color: colors::PADDLE,
    });
    commands.push(DrawCommand::FilledRect {
        rect: state.ball,
        color: colors::BALL,
    });

    if let Some(fps) = fps {
        commands.push(DrawCommand::FpsCounter {
            pos: FPS_POSITION,
            fps,
        });
    }

    commands
}

/// Replay draw commands on a canvas as one frame
pub fn submit<C: Canvas + ?Sized>(commands: &[DrawCommand], canvas: &mut C) {
    canvas.begin_frame();
    for command in commands {
        match *command {
            DrawCommand::FilledRect { rect, color } => canvas.draw_filled_rect(rect, color),
            DrawCommand::RectOutline { rect, color } => canvas.draw_rect_outline(rect, color),
            DrawCommand::FpsCounter { pos, fps } => canvas.draw_fps(pos, fps),
        }
    }
    canvas.end_frame();
}
