//! Frame loop
//!
//! One thread, one frame at a time: latch input, step the simulation,
//! draw. Pacing to the target frame rate is the platform's job.

use crate::consts::FPS_SAMPLES;
use crate::platform::{Input, Key, Platform};
use crate::renderer::{build_scene, submit};
use crate::settings::{ControlScheme, Settings};
use crate::sim::{FrameInput, GameStatus, RenderState, Simulation};

/// Frame rate from a ring of recent frame timestamps
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f64; FPS_SAMPLES],
    frame_index: usize,
    samples: usize,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_SAMPLES],
            frame_index: 0,
            samples: 0,
            fps: 0,
        }
    }
}

impl FpsCounter {
    /// Record a frame at `time` seconds and return the current estimate
    pub fn record(&mut self, time: f64) -> u32 {
        self.frame_times[self.frame_index] = time;
        self.frame_index = (self.frame_index + 1) % FPS_SAMPLES;
        self.samples = (self.samples + 1).min(FPS_SAMPLES);

        if self.samples > 1 {
            // Oldest sample sits at frame_index once the ring is full
            let oldest = if self.samples == FPS_SAMPLES {
                self.frame_times[self.frame_index]
            } else {
                self.frame_times[0]
            };
            let elapsed = time - oldest;
            if elapsed > 0.0 {
                self.fps = ((self.samples - 1) as f64 / elapsed).round() as u32;
            }
        }
        self.fps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

/// Drives a `Simulation` from a `Platform`
#[derive(Debug, Clone)]
pub struct FrameLoop {
    sim: Simulation,
    settings: Settings,
    fps: FpsCounter,
    /// Unclamped seconds since the loop started
    wall_clock: f64,
    quit: bool,
    last: RenderState,
}

impl FrameLoop {
    pub fn new(settings: Settings) -> Self {
        let sim = Simulation::new(settings.tuning.clone());
        let last = sim.render_state();
        Self {
            sim,
            settings,
            fps: FpsCounter::default(),
            wall_clock: 0.0,
            quit: false,
            last,
        }
    }

    /// Decode this frame's input according to the control scheme
    pub fn read_input<I: Input + ?Sized>(&self, input: &I) -> FrameInput {
        let start = input.is_key_pressed(Key::Space) || input.is_key_pressed(Key::Enter);

        match self.settings.control {
            ControlScheme::Pointer => FrameInput {
                pointer_x: Some(input.pointer_position().x),
                steer: 0.0,
                start,
            },
            ControlScheme::Keyboard => {
                let left = input.is_key_down(Key::Left) || input.is_key_down(Key::A);
                let right = input.is_key_down(Key::Right) || input.is_key_down(Key::D);
                FrameInput {
                    pointer_x: None,
                    steer: right as i32 as f32 - left as i32 as f32,
                    start,
                }
            }
        }
    }

    /// Run a single frame
    pub fn frame<P: Platform + ?Sized>(&mut self, platform: &mut P) -> &RenderState {
        platform.poll();
        if platform.is_key_pressed(Key::Escape) {
            log::info!("Quit requested");
            self.quit = true;
        }

        let frame_time = platform.frame_time();
        self.wall_clock += frame_time as f64;
        let fps = self.fps.record(self.wall_clock);

        let dt = frame_time.min(self.settings.max_frame_dt);

        let input = self.read_input(&*platform);
        let previous = self.last.status;
        let state = self.sim.step(dt, &input);
        if state.status != previous {
            log::debug!("Status {:?} -> {:?}", previous, state.status);
        }

        let scene = build_scene(&state, self.settings.show_fps.then_some(fps));
        submit(&scene, platform);

        self.last = state;
        &self.last
    }

    /// Run frames until the platform or the player asks to quit.
    /// Returns the number of frames run.
    pub fn run<P: Platform + ?Sized>(&mut self, platform: &mut P) -> u64 {
        platform.set_target_fps(self.settings.target_fps);
        log::info!("Frame loop started at {} FPS target", self.settings.target_fps);

        let mut frames = 0;
        while !self.should_quit(&*platform) {
            self.frame(platform);
            frames += 1;
        }

        log::info!(
            "Frame loop ended after {} frames ({:?}, {} bricks left)",
            frames,
            self.last.status,
            self.last.bricks_remaining()
        );
        frames
    }

    pub fn should_quit<P: Platform + ?Sized>(&self, platform: &P) -> bool {
        self.quit || platform.should_quit()
    }

    pub fn last_state(&self) -> &RenderState {
        &self.last
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn status(&self) -> GameStatus {
        self.last.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HeadlessPlatform;
    use crate::renderer::DrawCommand;
    use glam::Vec2;

    #[test]
    fn test_fps_counter_steady_rate() {
        let mut counter = FpsCounter::default();
        let mut fps = 0;
        for i in 1..=120 {
            fps = counter.record(i as f64 / 60.0);
        }
        assert_eq!(fps, 60);
        assert_eq!(counter.fps(), 60);
    }

    #[test]
    fn test_fps_counter_partial_ring() {
        let mut counter = FpsCounter::default();
        assert_eq!(counter.record(0.0), 0);
        assert_eq!(counter.record(0.5), 2);
        assert_eq!(counter.record(1.0), 2);
    }

    #[test]
    fn test_start_edge_does_not_retrigger() {
        let mut frame_loop = FrameLoop::new(Settings::default());
        let mut platform = HeadlessPlatform::default();
        platform.press(Key::Space);

        assert_eq!(frame_loop.frame(&mut platform).status, GameStatus::GameOn);
        let ball_after_start = frame_loop.last_state().ball;

        // Holding space keeps playing; the ball moves every frame
        frame_loop.frame(&mut platform);
        assert_eq!(frame_loop.status(), GameStatus::GameOn);
        assert_ne!(frame_loop.last_state().ball, ball_after_start);
    }

    #[test]
    fn test_frame_time_is_clamped() {
        let mut frame_loop = FrameLoop::new(Settings::default());
        let mut platform = HeadlessPlatform::new(2.0);
        platform.set_pointer(Vec2::new(440.0, 570.0));
        platform.press(Key::Space);
        frame_loop.frame(&mut platform);
        frame_loop.frame(&mut platform);

        // 0.1 s at (200, 200) from (400, 280)
        assert_eq!(frame_loop.last_state().ball.pos, Vec2::new(420.0, 300.0));
    }

    #[test]
    fn test_fps_reflects_slow_frames() {
        let mut frame_loop = FrameLoop::new(Settings::default());
        let mut platform = HeadlessPlatform::new(0.5);
        for _ in 0..10 {
            frame_loop.frame(&mut platform);
        }

        assert_eq!(
            platform.draw_commands().last(),
            Some(&DrawCommand::FpsCounter {
                pos: crate::renderer::FPS_POSITION,
                fps: 2
            })
        );
    }

    #[test]
    fn test_escape_quits() {
        let mut frame_loop = FrameLoop::new(Settings::default());
        let mut platform = HeadlessPlatform::default().with_frame_limit(1000);
        platform.press(Key::Escape);
        assert_eq!(frame_loop.run(&mut platform), 1);
    }

    #[test]
    fn test_run_until_frame_limit_draws_each_frame() {
        let mut frame_loop = FrameLoop::new(Settings::default());
        let mut platform = HeadlessPlatform::default().with_frame_limit(5);
        assert_eq!(frame_loop.run(&mut platform), 5);
        assert_eq!(frame_loop.status(), GameStatus::GameReady);
        assert!(matches!(
            platform.draw_commands().last(),
            Some(DrawCommand::FpsCounter { .. })
        ));
    }

    #[test]
    fn test_missed_ball_ends_game() {
        let mut frame_loop = FrameLoop::new(Settings::default());
        let mut platform = HeadlessPlatform::default().with_frame_limit(300);
        // Paddle parked far off the field
        platform.set_pointer(Vec2::new(-1000.0, 0.0));
        platform.press(Key::Space);

        frame_loop.run(&mut platform);
        assert_eq!(frame_loop.status(), GameStatus::GameOver);
        assert_eq!(frame_loop.last_state().bricks_remaining(), 50);
    }

    #[test]
    fn test_autopilot_breaks_bricks() {
        use crate::platform::Autopilot;

        let mut frame_loop = FrameLoop::new(Settings::default());
        let mut platform = HeadlessPlatform::default();
        let mut autopilot = Autopilot::new(3);

        for _ in 0..400 {
            autopilot.drive(frame_loop.last_state(), &mut platform);
            frame_loop.frame(&mut platform);
        }
        assert_eq!(frame_loop.status(), GameStatus::GameOn);
        assert!(frame_loop.last_state().bricks_remaining() < 50);
    }

    #[test]
    fn test_keyboard_control_scheme() {
        let settings = Settings {
            control: ControlScheme::Keyboard,
            ..Default::default()
        };
        let frame_loop = FrameLoop::new(settings);
        let mut platform = HeadlessPlatform::default();
        platform.press(Key::A);
        platform.poll();

        let input = frame_loop.read_input(&platform);
        assert_eq!(input.pointer_x, None);
        assert_eq!(input.steer, -1.0);

        platform.press(Key::Right);
        platform.poll();
        assert_eq!(frame_loop.read_input(&platform).steer, 0.0);
    }

    #[test]
    fn test_pointer_control_scheme() {
        let frame_loop = FrameLoop::new(Settings::default());
        let mut platform = HeadlessPlatform::default();
        platform.set_pointer(Vec2::new(123.0, 45.0));
        platform.press(Key::Enter);
        platform.poll();

        let input = frame_loop.read_input(&platform);
        assert_eq!(input.pointer_x, Some(123.0));
        assert!(input.start);
    }
}
