//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed logical timestep (60 Hz); tuning constants are per-tick and are
//!   never scaled by measured wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Per-tick data flow: scroll platforms → integrate the player (horizontal
//! move+resolve, then vertical move+resolve) → re-center the camera by shifting
//! the world → re-pin the ground strip → recycle off-screen platforms.

pub mod collision;
pub mod rect;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Contacts, resolve_horizontal, resolve_vertical};
pub use rect::Rect;
pub use spawn::{GenParams, spawn_next};
pub use state::{Platform, Player, WorldState};
pub use tick::{TickInput, tick};
