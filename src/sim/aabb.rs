//! Axis-aligned box geometry
//!
//! All collision shapes in the sim are AABBs: the body's bounding box and
//! the static platform/hazard rectangles. Boxes are stored as a center
//! plus half-extents; level records author them as top-left plus extents.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::level::RectDef;

/// An axis-aligned bounding box: center plus half-extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half: Vec2) -> Self {
        Self { center, half }
    }

    /// Build from an authored rectangle (top-left corner + extents).
    pub fn from_rect(rect: &RectDef) -> Self {
        let half = Vec2::new(rect.width / 2.0, rect.height / 2.0);
        Self {
            center: Vec2::new(rect.x, rect.y) + half,
            half,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    /// Top edge (smaller y; the y axis points down)
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    /// Bottom edge (larger y)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Strict overlap test. Boxes that merely touch along an edge do not
    /// count as overlapping, so a body resting flush on a platform top is
    /// not re-resolved every tick.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half + other.half;
        delta.x < reach.x && delta.y < reach.y
    }

    /// Point containment (inclusive edges).
    pub fn contains_point(&self, point: Vec2) -> bool {
        let delta = (point - self.center).abs();
        delta.x <= self.half.x && delta.y <= self.half.y
    }
}
