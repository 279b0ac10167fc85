//! Game state and core simulation types
//!
//! All state that a level attempt mutates lives here: the body, the active
//! gravity binding, the per-level arenas, and the session bookkeeping
//! (phase, score, lives, level index).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::config::SimConfig;
use crate::level::Level;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu; waiting for a start action
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended (health gone with no lives left)
    GameOver,
    /// Every star in the level collected
    LevelComplete,
}

/// The player's body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Bounding-box center
    pub pos: Vec2,
    pub vel: Vec2,
    /// Half-extents of the bounding box
    pub half: Vec2,
    pub on_ground: bool,
    /// Jumps consumed since the last grounding
    pub jump_count: u32,
    pub facing_right: bool,
    /// Clamped to [0, max_health]
    pub health: i32,
    /// Ticks of hazard invincibility remaining (0 = vulnerable)
    pub invincible_ticks: u32,
}

impl Body {
    pub fn spawn(pos: Vec2, config: &SimConfig) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            half: Vec2::new(config.body_half_width, config.body_half_height),
            on_ground: false,
            jump_count: 0,
            facing_right: true,
            health: config.max_health,
            invincible_ticks: 0,
        }
    }

    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.half)
    }

    #[inline]
    pub fn invincible(&self) -> bool {
        self.invincible_ticks > 0
    }

    /// Reset to a spawn point with full health and zero velocity.
    pub fn respawn(&mut self, pos: Vec2, config: &SimConfig) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.on_ground = false;
        self.jump_count = 0;
        self.health = config.max_health;
        self.invincible_ticks = 0;
    }
}

/// A point gravity source, immutable for the level's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub center: Vec2,
    pub radius: f32,
}

/// Collectible star half-extent (20x20 pickup box)
pub const STAR_HALF_EXTENT: f32 = 10.0;

/// A collectible star
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Star {
    pub center: Vec2,
    /// Set once on first body overlap; never cleared within an attempt
    pub collected: bool,
}

impl Star {
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.center, Vec2::splat(STAR_HALF_EXTENT))
    }
}

/// One level's arenas, built from its description at load time.
///
/// Platforms, hazards, and planets are immutable for the level lifetime;
/// stars only flip their `collected` flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelRuntime {
    pub platforms: Vec<Aabb>,
    pub hazards: Vec<Aabb>,
    pub planets: Vec<Planet>,
    pub stars: Vec<Star>,
    /// Body spawn point (center)
    pub spawn: Vec2,
}

impl LevelRuntime {
    pub fn new(level: &Level) -> Self {
        Self {
            platforms: level.platforms.iter().map(Aabb::from_rect).collect(),
            hazards: level.hazards.iter().map(Aabb::from_rect).collect(),
            planets: level
                .planets
                .iter()
                .map(|p| Planet {
                    center: Vec2::new(p.x, p.y),
                    radius: p.radius,
                })
                .collect(),
            stars: level
                .stars
                .iter()
                .map(|s| Star {
                    // Stars are authored by top-left corner of a 20x20 box
                    center: Vec2::new(s.x, s.y) + Vec2::splat(STAR_HALF_EXTENT),
                    collected: false,
                })
                .collect(),
            spawn: level.spawn.pos(),
        }
    }

    pub fn stars_remaining(&self) -> usize {
        self.stars.iter().filter(|s| !s.collected).count()
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: SimConfig,
    pub phase: GamePhase,
    /// Index into `levels` of the level currently loaded
    pub level_index: usize,
    /// Level descriptions for the whole session, in play order
    pub levels: Vec<Level>,
    pub score: u32,
    pub lives: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub body: Body,
    /// Active gravity binding: index into the level's planet arena,
    /// `None` meaning the default downward field
    pub binding: Option<usize>,
    pub level: LevelRuntime,
}

impl GameState {
    /// Create a session over the given levels, starting in the menu.
    ///
    /// An empty level list falls back to the built-in demo level so the
    /// session always has something to play.
    pub fn new(config: SimConfig, levels: Vec<Level>) -> Self {
        let levels = if levels.is_empty() {
            vec![Level::demo()]
        } else {
            levels
        };
        let runtime = LevelRuntime::new(&levels[0]);
        let body = Body::spawn(runtime.spawn, &config);
        Self {
            lives: config.starting_lives,
            config,
            phase: GamePhase::Menu,
            level_index: 0,
            levels,
            score: 0,
            time_ticks: 0,
            body,
            binding: None,
            level: runtime,
        }
    }

    /// Load a level: rebuild its arenas, respawn the body, clear the
    /// gravity binding.
    pub fn load_level(&mut self, index: usize) {
        self.level_index = index;
        self.level = LevelRuntime::new(&self.levels[index]);
        self.body = Body::spawn(self.level.spawn, &self.config);
        self.binding = None;
        log::info!(
            "loaded level {}/{}: {} platforms, {} planets, {} stars, {} hazards",
            index + 1,
            self.levels.len(),
            self.level.platforms.len(),
            self.level.planets.len(),
            self.level.stars.len(),
            self.level.hazards.len(),
        );
    }

    /// Respawn after a death that left lives remaining. The gravity
    /// binding is kept; only the body resets.
    pub fn respawn(&mut self) {
        let spawn = self.level.spawn;
        self.body.respawn(spawn, &self.config);
    }

    /// The planet the body is currently bound to, if any.
    pub fn bound_planet(&self) -> Option<&Planet> {
        self.binding.and_then(|i| self.level.planets.get(i))
    }

    pub fn stars_remaining(&self) -> usize {
        self.level.stars_remaining()
    }

    pub fn has_next_level(&self) -> bool {
        self.level_index + 1 < self.levels.len()
    }
}
