//! Strip Runner - an endless side-scrolling platformer core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, collision, platform generation)
//! - `config`: Host-supplied game configuration
//!
//! The crate contains no rendering, audio, or windowing. The host application
//! owns the draw/update loop: it feeds key state into [`sim::TickInput`], calls
//! [`sim::tick`] once per logical frame, and draws the integer rectangles the
//! world exposes.

pub mod config;
pub mod sim;

pub use config::GameConfig;
pub use sim::{TickInput, WorldState, tick};

/// Fixed simulation constants
///
/// All motion tuning is expressed per tick at the nominal rate; nothing here is
/// scaled by wall-clock time.
pub mod consts {
    /// Nominal logical tick rate (Hz)
    pub const TICK_HZ: u32 = 60;

    /// Max horizontal run speed (units/tick)
    pub const MAX_RUN_SPEED: f32 = 8.0;
    /// Horizontal acceleration while a direction key is held (units/tick²)
    pub const RUN_ACCEL: f32 = 0.5;
    /// Deceleration toward zero when no single direction is held (units/tick²)
    pub const RUN_FRICTION: f32 = 0.5;
    /// Gravity master value (units/tick²). The per-tick integrator runs in
    /// f32 via [`GRAVITY`]; generation-bound derivation divides by this at
    /// full precision, where the widened f32 value would land `2*15/g` just
    /// under 50 and truncation would drop a unit from the gap bound.
    pub const GRAVITY_F64: f64 = 0.6;
    /// Gravity added to vertical velocity every tick (units/tick²)
    pub const GRAVITY: f32 = GRAVITY_F64 as f32;

    /// World scroll speed (units/tick, applied to every platform)
    pub const SCROLL_SPEED: f32 = 2.5;
    /// Screen x the player is pinned to while auto-run is on
    pub const RUNNER_ANCHOR_X: i32 = 160;
    /// Platforms are recycled once their right edge is this far off-screen left
    pub const RECYCLE_MARGIN: i32 = 200;

    /// Ground strip width as a multiple of screen width (wrap headroom)
    pub const GROUND_WIDTH_FACTOR: i32 = 3;
}
