//! Simulation state and core types
//!
//! Everything the step function mutates lives here as explicit fields.
//! The original toy kept its drag and double-click timers in hidden
//! statics; `World` owns them instead so a step is a plain function of
//! (state, input).

use glam::Vec2;

use crate::consts::*;

/// The one ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    /// Units per second
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball at the start position, at rest
    pub fn at_start() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
        }
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::at_start()
    }
}

/// Static line that kills the ball's velocity on contact.
///
/// Collision treats this as the infinite line through both endpoints, not
/// a bounded segment; the endpoints only bound what gets drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Barrier {
    pub start: Vec2,
    pub end: Vec2,
}

impl Default for Barrier {
    fn default() -> Self {
        Self {
            start: Vec2::new(BARRIER_START_X, BARRIER_START_Y),
            end: Vec2::new(BARRIER_END_X, BARRIER_END_Y),
        }
    }
}

/// Notable things a step did, for the driver to log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// A press landed on the ball; velocity zeroed, drag started
    Grabbed,
    /// A release ended a drag; displacement/duration became velocity
    Flung,
    /// Double-click reset the ball to its start state
    Reset,
    /// Ball center came within radius of the barrier line; velocity zeroed
    BarrierStop,
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub ball: Ball,
    pub barrier: Barrier,
    /// Where the current drag started (last press coordinate). Persists
    /// across frames so a release can measure displacement against it.
    pub press_pos: Vec2,
    /// Coarse-clock time of the grab that started the current drag.
    /// 0 means no drag is active.
    pub press_start_ms: u64,
    /// Coarse-clock time of the press arming the double-click detector.
    /// 0 means the detector is idle.
    pub last_click_ms: u64,
}

impl World {
    pub fn new() -> Self {
        Self {
            ball: Ball::at_start(),
            barrier: Barrier::default(),
            press_pos: Vec2::ZERO,
            press_start_ms: 0,
            last_click_ms: 0,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
