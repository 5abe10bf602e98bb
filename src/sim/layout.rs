//! Initial brick grid generation

use super::geometry::Rect;
use super::state::{Brick, BrickField, BrickZone};
use crate::consts::{BRICK_HEIGHT, ZONE_PAD_HEIGHT, ZONE_PAD_TOP};

/// Build `rows` zones of `columns` equal-width bricks spanning `play_width`.
///
/// Row 0 sits two brick heights below the top edge and each following row
/// one brick height lower, so rows touch. Zone rectangles span the full
/// width and extend `ZONE_PAD_TOP` above their row.
pub fn generate_bricks(columns: u32, rows: u32, play_width: f32) -> BrickField {
    debug_assert!(columns > 0 && rows > 0, "brick grid must be non-empty");
    if columns == 0 || rows == 0 {
        return BrickField::default();
    }

    let brick_width = play_width / columns as f32;
    let mut bricks = Vec::with_capacity(columns as usize * rows as usize);
    let mut zones = Vec::with_capacity(rows as usize);

    for row in 0..rows {
        let y = 2.0 * BRICK_HEIGHT + row as f32 * BRICK_HEIGHT;
        let first = bricks.len();

        for col in 0..columns {
            let x = col as f32 * brick_width;
            bricks.push(Brick::new(Rect::new(x, y, brick_width, BRICK_HEIGHT)));
        }

        zones.push(BrickZone {
            rect: Rect::new(0.0, y - ZONE_PAD_TOP, play_width, BRICK_HEIGHT + ZONE_PAD_HEIGHT),
            bricks: first..bricks.len(),
        });
    }

    log::info!("Generated {} bricks in {} zones", bricks.len(), zones.len());

    BrickField { bricks, zones }
}
