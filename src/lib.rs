//! Fling Ball - a mouse-driven bouncing ball toy
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, reflection, drag gestures)
//!
//! The binary in `main.rs` is a thin macroquad frame driver: it samples
//! input, steps the simulation once per frame, and issues draw calls. All
//! behavior lives in `sim` and is testable without a window.

pub mod sim;

pub use sim::{Ball, Barrier, FrameInput, StepEvent, World, step};

/// Game configuration constants
pub mod consts {
    /// Window dimensions (fixed, non-resizable)
    pub const WIDTH: f32 = 640.0;
    pub const HEIGHT: f32 = 480.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    pub const BALL_START_X: f32 = 320.0;
    pub const BALL_START_Y: f32 = 240.0;

    /// Barrier line endpoints
    pub const BARRIER_START_X: f32 = 640.0;
    pub const BARRIER_START_Y: f32 = 120.0;
    pub const BARRIER_END_X: f32 = 320.0;
    pub const BARRIER_END_Y: f32 = 480.0;

    /// Two presses within this window count as a double-click
    pub const DOUBLE_CLICK_INTERVAL_MS: u64 = 300;

    /// Converts drag displacement over elapsed milliseconds into units/second
    pub const FLING_SCALE: f32 = 1000.0;
}
