//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Size of one vertex in a GPU buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();

    /// View a vertex list as raw bytes for upload
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

/// Colors for game elements
pub mod colors {
    pub const PADDLE: [f32; 4] = [0.9, 0.16, 0.22, 1.0];
    pub const BALL: [f32; 4] = [0.0, 0.47, 0.95, 1.0];
    pub const BRICK_OUTLINE: [f32; 4] = [0.31, 0.31, 0.31, 1.0];

    /// Brick fill per row, repeating
    pub const BRICK_ROWS: [[f32; 4]; 5] = [
        [0.9, 0.16, 0.22, 1.0],
        [1.0, 0.63, 0.0, 1.0],
        [0.99, 0.98, 0.0, 1.0],
        [0.0, 0.89, 0.19, 1.0],
        [0.0, 0.47, 0.95, 1.0],
    ];

    pub fn brick_row(row: usize) -> [f32; 4] {
        BRICK_ROWS[row % BRICK_ROWS.len()]
    }
}
