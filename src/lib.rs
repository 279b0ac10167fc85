//! Gravity Platformer - variable-gravity platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, collisions, game state)
//! - `level`: Level description records consumed from the loader
//! - `config`: Explicit simulation tuning, lifted out of global constants
//!
//! Rendering, input polling, audio, and persistence are collaborator
//! concerns: the core consumes plain level records and per-tick input
//! intents, and exposes read access to the resulting state plus the
//! events each tick raised.

pub mod config;
pub mod level;
pub mod sim;

pub use config::SimConfig;
pub use level::Level;

use glam::Vec2;

/// Nominal tuning constants (defaults for [`SimConfig`])
pub mod consts {
    /// World bounds, enforced as an implicit collider on all four edges
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Nominal simulation rate (ticks per second); timers count ticks
    pub const TICK_RATE: u32 = 60;

    /// Default downward gravity per tick
    pub const GRAVITY: f32 = 0.5;
    /// Planet field strength per tick (fixed, not level-configurable)
    pub const PLANET_STRENGTH: f32 = 0.5;
    /// Minimum body-to-planet distance used when normalizing the field
    /// direction, so a body at the planet center never divides by zero
    pub const MIN_FIELD_DISTANCE: f32 = 1.0;

    /// Jump impulse magnitude
    pub const JUMP_STRENGTH: f32 = 10.0;
    /// Horizontal move speed set directly by move intents
    pub const MOVE_SPEED: f32 = 5.0;
    /// Horizontal damping applied once per tick after resolution
    pub const FRICTION: f32 = 0.9;
    /// Jump budget between groundings (double jump)
    pub const MAX_JUMPS: u32 = 2;

    /// Body half-extents (30x50 bounding box)
    pub const BODY_HALF_WIDTH: f32 = 15.0;
    pub const BODY_HALF_HEIGHT: f32 = 25.0;

    /// Health ceiling and hazard damage per invincibility window
    pub const MAX_HEALTH: i32 = 100;
    pub const HAZARD_DAMAGE: i32 = 10;
    /// Invincibility window in ticks (1 second nominal)
    pub const INVINCIBILITY_TICKS: u32 = 60;

    /// Maximum distance at which a gravity toggle can bind a planet
    pub const PLANET_ACTIVATION_RANGE: f32 = 200.0;
    /// Extra reach past a planet's radius that counts as standing on it
    pub const PLANET_SURFACE_MARGIN: f32 = 30.0;

    /// Session defaults
    pub const STARTING_LIVES: u32 = 3;
    pub const STAR_POINTS: u32 = 10;
}

/// Euclidean distance between two points, clamped to a minimum.
///
/// Used wherever a direction is normalized by distance, so degenerate
/// zero-length separations stay finite.
#[inline]
pub fn clamped_distance(from: Vec2, to: Vec2, min: f32) -> f32 {
    from.distance(to).max(min)
}
