//! Level description records
//!
//! Plain data handed to the core by the (out-of-scope) level loader.
//! The sets are order-irrelevant; a missing `hazards` key means no
//! hazards. Geometry is assumed well-formed and non-negative; validating
//! it is the loader's job.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A static axis-aligned rectangle (platform or hazard), as authored:
/// top-left corner plus extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectDef {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A point gravity source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetDef {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// A collectible star position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarDef {
    pub x: f32,
    pub y: f32,
}

/// Player spawn point (body center).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnDef {
    pub x: f32,
    pub y: f32,
}

impl Default for SpawnDef {
    fn default() -> Self {
        Self { x: 100.0, y: 100.0 }
    }
}

impl SpawnDef {
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// One level's static geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<RectDef>,
    pub planets: Vec<PlanetDef>,
    pub stars: Vec<StarDef>,
    #[serde(default)]
    pub hazards: Vec<RectDef>,
    #[serde(default)]
    pub spawn: SpawnDef,
}

impl Level {
    /// Parse a level from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// The built-in fallback level: a ground slab, three floating
    /// platforms, one planet, and a row of five stars.
    pub fn demo() -> Self {
        Self {
            platforms: vec![
                RectDef { x: 0.0, y: 560.0, width: 800.0, height: 40.0 },
                RectDef { x: 100.0, y: 400.0, width: 200.0, height: 20.0 },
                RectDef { x: 500.0, y: 300.0, width: 200.0, height: 20.0 },
                RectDef { x: 300.0, y: 200.0, width: 200.0, height: 20.0 },
            ],
            planets: vec![PlanetDef { x: 400.0, y: 300.0, radius: 50.0 }],
            stars: (0..5)
                .map(|i| StarDef { x: 100.0 + i as f32 * 150.0, y: 100.0 })
                .collect(),
            hazards: Vec::new(),
            spawn: SpawnDef::default(),
        }
    }
}
