//! Fling Ball entry point
//!
//! Thin macroquad frame driver: window setup, per-frame input sampling,
//! clock sampling, draw calls. All behavior lives in `fling_ball::sim`.

use std::time::Instant;

use glam::Vec2;
use macroquad::color::{BLACK, WHITE, YELLOW};
use macroquad::input::{MouseButton, is_mouse_button_pressed, is_mouse_button_released, mouse_position};
use macroquad::shapes::{draw_circle, draw_line};
use macroquad::text::draw_text;
use macroquad::window::{Conf, clear_background, next_frame};

use fling_ball::consts::{HEIGHT, WIDTH};
use fling_ball::sim::{FrameInput, World, step};

fn window_conf() -> Conf {
    Conf {
        window_title: "Fling Ball".to_owned(),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Snapshot this frame's mouse transitions. macroquad's pressed/released
/// queries report only the first transition of each kind per frame, which
/// is exactly the at-most-one-event model the step expects.
fn sample_input(now_ms: u64) -> FrameInput {
    let cursor = || {
        let (x, y) = mouse_position();
        Vec2::new(x, y)
    };

    FrameInput {
        press: is_mouse_button_pressed(MouseButton::Left).then(cursor),
        release: is_mouse_button_released(MouseButton::Left).then(cursor),
        now_ms,
    }
}

/// Frames-per-second counter for the debug overlay. Counts frames and
/// publishes once per second.
struct FpsCounter {
    window_start: Instant,
    frames: u32,
    fps: u32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
            fps: 0,
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        if self.window_start.elapsed().as_secs_f32() >= 1.0 {
            self.fps = self.frames;
            self.frames = 0;
            self.window_start = Instant::now();
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Fling Ball starting: {}x{} window", WIDTH, HEIGHT);

    let mut world = World::new();
    let mut fps = FpsCounter::new();

    // Two clock domains, sampled independently each frame: an Instant pair
    // for the high-resolution delta time, and milliseconds since start for
    // the coarse gesture clock.
    let epoch = Instant::now();
    let mut last_step = Instant::now();

    loop {
        let now = Instant::now();
        let dt = now.duration_since(last_step).as_secs_f32();
        last_step = now;
        let now_ms = epoch.elapsed().as_millis() as u64;

        let input = sample_input(now_ms);
        for event in step(&mut world, &input, dt) {
            log::debug!("{event:?} at t={now_ms}ms, ball at {}", world.ball.pos);
        }

        clear_background(BLACK);
        draw_circle(world.ball.pos.x, world.ball.pos.y, world.ball.radius, YELLOW);
        draw_line(
            world.barrier.start.x,
            world.barrier.start.y,
            world.barrier.end.x,
            world.barrier.end.y,
            1.0,
            WHITE,
        );

        fps.tick();
        if cfg!(debug_assertions) {
            draw_text(&format!("FPS: {}", fps.fps), 0.0, 16.0, 16.0, WHITE);
        }

        next_frame().await;
    }
}
