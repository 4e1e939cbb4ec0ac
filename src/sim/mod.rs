//! Deterministic simulation module
//!
//! All ball behavior lives here. This module must stay pure:
//! - State is explicit (`World`), no hidden statics
//! - Time enters only through the per-frame `FrameInput` snapshot
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod step;

pub use collision::{line_point_distance, reflect_walls};
pub use state::{Ball, Barrier, StepEvent, World};
pub use step::{FrameInput, step};
