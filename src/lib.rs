//! Fruit Slash - a fruit-slicing arcade minigame
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, ballistics, slice detection, game state)
//! - `tuning`: Data-driven game balance
//!
//! The crate is the simulation core only. A host (canvas, window, or test
//! harness) calls [`sim::tick`] once per frame with the current pointer
//! position, then reads back fruit transforms, the trail polyline and live
//! particles for drawing, and drains [`sim::GameEvent`]s for sound/UI hooks.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per rendered frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Maximum number of retained pointer samples
    pub const TRAIL_LENGTH: usize = 10;

    /// Where dead fruits are parked, far outside any plausible world
    pub const PARK_X: f32 = 30_000.0;
    pub const PARK_Y: f32 = 30_000.0;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (b - a).length()
}

/// Velocity of the given speed directed from `from` toward `to`
///
/// A zero-length direction yields a zero velocity rather than NaN.
#[inline]
pub fn velocity_toward(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    (to - from).normalize_or_zero() * speed
}
