//! Per-frame simulation step
//!
//! One call per frame: integrate, reflect off the walls, apply this
//! frame's mouse gestures, run the double-click detector, then the
//! barrier stop. Order matters and is fixed; the double-click reset
//! overrides whatever the gesture handling computed the same frame.

use glam::Vec2;

use super::collision::{line_point_distance, reflect_walls};
use super::state::{Ball, StepEvent, World};
use crate::consts::*;

/// Mouse input snapshot for a single frame.
///
/// At most one press and one release per frame; the driver consumes only
/// the first queued transition of each kind. `now_ms` is the coarse
/// millisecond clock used for double-click and drag-duration timing, a
/// separate domain from the high-resolution clock behind `dt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Left button went down this frame, at this position
    pub press: Option<Vec2>,
    /// Left button came up this frame, at this position
    pub release: Option<Vec2>,
    /// Milliseconds on the coarse monotonic clock
    pub now_ms: u64,
}

/// Advance the world by one frame.
///
/// `dt` is elapsed wall-clock seconds since the previous step. Returns the
/// frame's notable events so the driver can log them.
pub fn step(world: &mut World, input: &FrameInput, dt: f32) -> Vec<StepEvent> {
    let mut events = Vec::new();

    world.ball.pos += world.ball.vel * dt;

    let bounds = Vec2::new(WIDTH, HEIGHT);
    reflect_walls(
        &mut world.ball.pos,
        &mut world.ball.vel,
        world.ball.radius,
        bounds,
    );

    // Any press moves the drag anchor, whether or not it lands on the ball
    if let Some(press) = input.press {
        world.press_pos = press;
    }

    // Grab hit-test uses the post-integration ball position. The release
    // arm is `else if` against the *hit*, not the press: a press that
    // misses the ball does not shadow a same-frame release.
    let grabbed = input.press.is_some()
        && world.ball.pos.distance_squared(world.press_pos)
            <= world.ball.radius * world.ball.radius;

    if grabbed {
        world.ball.vel = Vec2::ZERO;
        world.press_start_ms = input.now_ms;
        events.push(StepEvent::Grabbed);
    } else if let Some(release) = input.release {
        if world.press_start_ms > 0 {
            // Clamp to 1 ms so a same-tick release cannot divide by zero
            let elapsed_ms = input.now_ms.saturating_sub(world.press_start_ms).max(1);
            world.ball.vel = (release - world.press_pos) * FLING_SCALE / elapsed_ms as f32;
            world.press_start_ms = 0;
            events.push(StepEvent::Flung);
        }
    }

    if check_double_click(world, input) {
        events.push(StepEvent::Reset);
    }

    let barrier = world.barrier;
    if line_point_distance(barrier.start, barrier.end, world.ball.pos) <= world.ball.radius {
        world.ball.vel = Vec2::ZERO;
        events.push(StepEvent::BarrierStop);
    }

    events
}

/// Two-state double-click detector on the coarse clock.
///
/// Idle (`last_click_ms == 0`): a press arms it and records the time.
/// Armed: a press within the interval resets the ball and disarms; once
/// the interval passes, the detector disarms without resetting (a press
/// on that same frame is swallowed, as in the original toy).
fn check_double_click(world: &mut World, input: &FrameInput) -> bool {
    let now = input.now_ms;

    if input.press.is_some() && world.last_click_ms == 0 {
        world.last_click_ms = now;
    } else if input.press.is_some() && now - world.last_click_ms <= DOUBLE_CLICK_INTERVAL_MS {
        world.ball = Ball::at_start();
        world.last_click_ms = 0;
        return true;
    } else if now.saturating_sub(world.last_click_ms) > DOUBLE_CLICK_INTERVAL_MS {
        world.last_click_ms = 0;
    }

    false
}
