//! Per-axis collision resolution against static AABBs
//!
//! Resolution is axis-separated: the horizontal displacement is applied
//! and resolved fully before the vertical one. That ordering is the
//! tie-break that keeps corner cases deterministic; there is no swept
//! detection and no simultaneous two-axis solve.

use glam::Vec2;

use super::aabb::Aabb;
use super::state::{Body, Planet};
use crate::config::SimConfig;

/// Resolution axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Outcome of resolving one axis
#[derive(Debug, Clone, Copy, Default)]
pub struct AxisResolution {
    /// The body overlapped at least one collider after displacement
    pub collided: bool,
    /// Vertical only: the body was pushed up out of a collider it was
    /// falling into, i.e. it landed on a platform top
    pub landed: bool,
}

/// Apply the body's tentative displacement along one axis, then push it
/// out of every collider it now overlaps.
///
/// The push direction is opposite the body's velocity sign on the axis;
/// velocity on the axis is zeroed on any overlap. When several colliders
/// overlap at once, iteration order decides which edge wins - callers
/// must not rely on a stronger tie-break.
pub fn resolve_axis(body: &mut Body, colliders: &[Aabb], axis: Axis) -> AxisResolution {
    let mut result = AxisResolution::default();

    match axis {
        Axis::X => {
            body.pos.x += body.vel.x;
            for collider in colliders {
                if !body.aabb().overlaps(collider) {
                    continue;
                }
                if body.vel.x > 0.0 {
                    body.pos.x = collider.left() - body.half.x;
                } else if body.vel.x < 0.0 {
                    body.pos.x = collider.right() + body.half.x;
                }
                body.vel.x = 0.0;
                result.collided = true;
            }
        }
        Axis::Y => {
            body.pos.y += body.vel.y;
            for collider in colliders {
                if !body.aabb().overlaps(collider) {
                    continue;
                }
                if body.vel.y > 0.0 {
                    // Falling into a platform top
                    body.pos.y = collider.top() - body.half.y;
                    result.landed = true;
                } else if body.vel.y < 0.0 {
                    // Rising into a platform underside
                    body.pos.y = collider.bottom() + body.half.y;
                }
                body.vel.y = 0.0;
                result.collided = true;
            }
        }
    }

    result
}

/// Clamp the body inside the world bounds, treating all four edges as an
/// immovable collider: position clamped, axis velocity zeroed on contact.
///
/// Returns true if the body is resting on the bottom edge (floor
/// contact, which grounds the body).
pub fn clamp_to_world(body: &mut Body, config: &SimConfig) -> bool {
    if body.pos.x - body.half.x < 0.0 {
        body.pos.x = body.half.x;
        body.vel.x = 0.0;
    }
    if body.pos.x + body.half.x > config.world_width {
        body.pos.x = config.world_width - body.half.x;
        body.vel.x = 0.0;
    }
    if body.pos.y - body.half.y < 0.0 {
        body.pos.y = body.half.y;
        body.vel.y = 0.0;
    }
    if body.pos.y + body.half.y >= config.world_height {
        body.pos.y = config.world_height - body.half.y;
        body.vel.y = 0.0;
        return true;
    }
    false
}

/// Proximity grounding: a body within `radius + margin` of any planet
/// center counts as standing on that planet, without circular collision
/// geometry. This also fires for a body airborne near the planet, which
/// resets the jump budget early; preserved as-is.
pub fn near_planet_surface(body_center: Vec2, planets: &[Planet], margin: f32) -> bool {
    planets
        .iter()
        .any(|p| body_center.distance(p.center) < p.radius + margin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::RectDef;
    use proptest::prelude::*;

    fn test_body(x: f32, y: f32, vx: f32, vy: f32) -> Body {
        let mut body = Body::spawn(Vec2::new(x, y), &SimConfig::default());
        body.vel = Vec2::new(vx, vy);
        body
    }

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Aabb {
        Aabb::from_rect(&RectDef { x, y, width: w, height: h })
    }

    #[test]
    fn test_horizontal_push_out_moving_right() {
        // Wall at x=200; body moving right into it
        let wall = rect(200.0, 0.0, 40.0, 600.0);
        let mut body = test_body(180.0, 300.0, 10.0, 0.0);

        let res = resolve_axis(&mut body, &[wall], Axis::X);
        assert!(res.collided);
        assert_eq!(body.pos.x + body.half.x, wall.left());
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn test_horizontal_push_out_moving_left() {
        let wall = rect(100.0, 0.0, 40.0, 600.0);
        let mut body = test_body(160.0, 300.0, -10.0, 0.0);

        let res = resolve_axis(&mut body, &[wall], Axis::X);
        assert!(res.collided);
        assert_eq!(body.pos.x - body.half.x, wall.right());
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn test_vertical_landing() {
        let platform = rect(0.0, 560.0, 800.0, 40.0);
        let mut body = test_body(100.0, 530.0, 0.0, 10.0);

        let res = resolve_axis(&mut body, &[platform], Axis::Y);
        assert!(res.collided);
        assert!(res.landed);
        assert_eq!(body.pos.y + body.half.y, platform.top());
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_vertical_head_bump() {
        let platform = rect(0.0, 200.0, 800.0, 20.0);
        let mut body = test_body(100.0, 250.0, 0.0, -10.0);

        let res = resolve_axis(&mut body, &[platform], Axis::Y);
        assert!(res.collided);
        assert!(!res.landed);
        assert_eq!(body.pos.y - body.half.y, platform.bottom());
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_no_collision_passes_through_nothing() {
        let platform = rect(0.0, 560.0, 800.0, 40.0);
        let mut body = test_body(100.0, 100.0, 0.0, 5.0);

        let res = resolve_axis(&mut body, &[platform], Axis::Y);
        assert!(!res.collided);
        assert_eq!(body.pos.y, 105.0);
        assert_eq!(body.vel.y, 5.0);
    }

    #[test]
    fn test_two_overlaps_first_collider_wins() {
        // Two overlapping slabs; the first one in iteration order decides
        // the resting edge.
        let first = rect(0.0, 500.0, 800.0, 40.0);
        let second = rect(0.0, 510.0, 800.0, 40.0);
        let mut body = test_body(100.0, 490.0, 0.0, 20.0);

        resolve_axis(&mut body, &[first, second], Axis::Y);
        assert_eq!(body.pos.y + body.half.y, first.top());
    }

    #[test]
    fn test_world_floor_grounds() {
        let config = SimConfig::default();
        let mut body = test_body(100.0, 590.0, 0.0, 8.0);

        let floored = clamp_to_world(&mut body, &config);
        assert!(floored);
        assert_eq!(body.pos.y + body.half.y, config.world_height);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_world_side_clamp() {
        let config = SimConfig::default();
        let mut body = test_body(-5.0, 300.0, -4.0, 0.0);

        let floored = clamp_to_world(&mut body, &config);
        assert!(!floored);
        assert_eq!(body.pos.x - body.half.x, 0.0);
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn test_planet_proximity_grounding() {
        let planets = [Planet {
            center: Vec2::new(400.0, 300.0),
            radius: 50.0,
        }];
        // 70 units away, inside radius + 30
        assert!(near_planet_surface(Vec2::new(400.0, 230.0), &planets, 30.0));
        // 90 units away, outside
        assert!(!near_planet_surface(Vec2::new(400.0, 210.0), &planets, 30.0));
        // No planets at all
        assert!(!near_planet_surface(Vec2::new(400.0, 300.0), &[], 30.0));
    }

    proptest! {
        /// Falling into a platform from any height above it always ends
        /// with the body flush on top, never inside.
        #[test]
        fn prop_vertical_resolution_never_penetrates(
            start_y in 0.0f32..535.0,
            vel_y in 0.0f32..200.0,
        ) {
            let platform = rect(0.0, 560.0, 800.0, 40.0);
            let mut body = test_body(100.0, start_y, 0.0, vel_y);

            resolve_axis(&mut body, &[platform], Axis::Y);
            prop_assert!(!body.aabb().overlaps(&platform));
            prop_assert!(body.pos.y + body.half.y <= platform.top());
        }
    }
}
