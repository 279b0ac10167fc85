//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only; timers are tick counters, never wall-clock
//! - Stable iteration order (level geometry order)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod collision;
pub mod gravity;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::{Axis, AxisResolution, resolve_axis};
pub use gravity::{acceleration, toggle_binding};
pub use state::{Body, GamePhase, GameState, LevelRuntime, Planet, Star};
pub use tick::{TickEvent, TickInput, tick};
