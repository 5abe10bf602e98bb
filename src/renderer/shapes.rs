//! Shape generation for 2D primitives
//!
//! Turns draw commands into triangle lists a GPU backend can upload as-is.

use super::DrawCommand;
use super::vertex::Vertex;
use crate::sim::Rect;

/// Stroke width of rectangle outlines
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Two triangles covering `rect`
pub fn filled_rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Four thin quads along the inside of `rect`'s edges
pub fn rect_outline(rect: &Rect, color: [f32; 4], width: f32) -> Vec<Vertex> {
    let w = width.min(rect.width() / 2.0).min(rect.height() / 2.0);
    let inner_height = rect.height() - 2.0 * w;

    let edges = [
        // Top, bottom
        Rect::new(rect.left(), rect.top(), rect.width(), w),
        Rect::new(rect.left(), rect.bottom() - w, rect.width(), w),
        // Left, right (between top and bottom strips)
        Rect::new(rect.left(), rect.top() + w, w, inner_height),
        Rect::new(rect.right() - w, rect.top() + w, w, inner_height),
    ];

    edges.iter().flat_map(|edge| filled_rect(edge, color)).collect()
}

/// Tessellate a frame's draw commands.
///
/// Text (the FPS counter) is left to the backend and produces no vertices.
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(commands.len() * 6);

    for command in commands {
        match command {
            DrawCommand::FilledRect { rect, color } => {
                vertices.extend(filled_rect(rect, *color));
            }
            DrawCommand::RectOutline { rect, color } => {
                vertices.extend(rect_outline(rect, *color, OUTLINE_WIDTH));
            }
            DrawCommand::FpsCounter { .. } => {}
        }
    }

    vertices
}
