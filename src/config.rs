//! Simulation tuning
//!
//! Every constant the fixed-tick assumption bakes in (gravity per tick,
//! friction, timer windows) lives in one explicit struct passed into the
//! systems, so tests can run with non-default parameters.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tuning parameters for one simulation session.
///
/// All per-tick quantities assume the nominal tick rate; callers that
/// tick at a different fixed rate must rescale them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// World bounds (implicit collider on all four edges)
    pub world_width: f32,
    pub world_height: f32,

    /// Default downward acceleration per tick
    pub gravity: f32,
    /// Planet field strength per tick
    pub planet_strength: f32,

    /// Jump impulse magnitude
    pub jump_strength: f32,
    /// Horizontal speed set by move intents
    pub move_speed: f32,
    /// Horizontal damping multiplier, applied once per tick
    pub friction: f32,
    /// Jump budget between groundings
    pub max_jumps: u32,

    /// Body half-extents
    pub body_half_width: f32,
    pub body_half_height: f32,

    /// Health ceiling (spawn health)
    pub max_health: i32,
    /// Damage per hazard contact window
    pub hazard_damage: i32,
    /// Ticks of invincibility after hazard damage
    pub invincibility_ticks: u32,

    /// Maximum distance at which a toggle binds the nearest planet
    pub planet_activation_range: f32,
    /// Reach past a planet's radius that counts as standing on it
    pub planet_surface_margin: f32,

    /// Lives at session start / restart
    pub starting_lives: u32,
    /// Score awarded per collected star
    pub star_points: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            gravity: GRAVITY,
            planet_strength: PLANET_STRENGTH,
            jump_strength: JUMP_STRENGTH,
            move_speed: MOVE_SPEED,
            friction: FRICTION,
            max_jumps: MAX_JUMPS,
            body_half_width: BODY_HALF_WIDTH,
            body_half_height: BODY_HALF_HEIGHT,
            max_health: MAX_HEALTH,
            hazard_damage: HAZARD_DAMAGE,
            invincibility_ticks: INVINCIBILITY_TICKS,
            planet_activation_range: PLANET_ACTIVATION_RANGE,
            planet_surface_margin: PLANET_SURFACE_MARGIN,
            starting_lives: STARTING_LIVES,
            star_points: STAR_POINTS,
        }
    }
}
