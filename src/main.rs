//! Brick Breaker entry point
//!
//! Native demo: runs the game headless with the autopilot at the wheel and
//! prints the final frame as JSON.
//!
//! Usage: `brick-breaker [settings.json] [frames]`

use brick_breaker::Settings;
use brick_breaker::app::FrameLoop;
use brick_breaker::platform::{Autopilot, HeadlessPlatform, Platform};
use brick_breaker::renderer::shapes::tessellate;
use brick_breaker::renderer::vertex::Vertex;
use brick_breaker::sim::GameStatus;

/// Frames to run when none are given (one minute at 60 FPS)
const DEFAULT_DEMO_FRAMES: u64 = 60 * 60;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let frames = match args.next() {
        Some(n) => n.parse::<u64>()?,
        None => DEFAULT_DEMO_FRAMES,
    };

    let mut platform = HeadlessPlatform::default().with_frame_limit(frames);
    platform.set_target_fps(settings.target_fps);
    let mut autopilot = Autopilot::new(settings.autopilot_seed);
    let mut frame_loop = FrameLoop::new(settings);

    let mut peak_vertex_bytes = 0;
    while !frame_loop.should_quit(&platform) {
        autopilot.drive(frame_loop.last_state(), &mut platform);
        let status = frame_loop.frame(&mut platform).status;

        let vertices = tessellate(platform.draw_commands());
        peak_vertex_bytes = peak_vertex_bytes.max(Vertex::as_bytes(&vertices).len());

        if status == GameStatus::GameOver {
            break;
        }
    }

    let last = frame_loop.last_state();
    log::info!(
        "Demo finished after {} frames: {:?}, {} of {} bricks left, peak vertex buffer {} bytes",
        platform.frames(),
        last.status,
        last.bricks_remaining(),
        frame_loop.simulation().game().bricks.len(),
        peak_vertex_bytes
    );
    println!("{}", serde_json::to_string_pretty(last)?);

    Ok(())
}
