//! Gravity field and source switching
//!
//! A body is accelerated by exactly one source per tick: the implicit
//! default field (straight down) or the planet it is bound to. The
//! binding is a discrete, player-toggled choice, not a continuous
//! re-evaluation.

use glam::Vec2;

use super::state::Planet;
use crate::config::SimConfig;
use crate::consts::MIN_FIELD_DISTANCE;
use crate::clamped_distance;

/// Acceleration applied to a body this tick.
///
/// Pure function: no binding means the default downward field; a bound
/// planet pulls the body toward its center at the fixed planet strength.
/// The distance is clamped before normalizing so a body sitting exactly
/// on a planet center stays finite.
pub fn acceleration(body_center: Vec2, bound: Option<&Planet>, config: &SimConfig) -> Vec2 {
    match bound {
        None => Vec2::new(0.0, config.gravity),
        Some(planet) => {
            let dist = clamped_distance(body_center, planet.center, MIN_FIELD_DISTANCE);
            (planet.center - body_center) / dist * config.planet_strength
        }
    }
}

/// Unit direction pointing radially away from a planet, for jump
/// impulses under planet gravity.
pub fn outward_direction(body_center: Vec2, planet: &Planet) -> Vec2 {
    let dist = clamped_distance(body_center, planet.center, MIN_FIELD_DISTANCE);
    (body_center - planet.center) / dist
}

/// Handle a gravity-toggle action.
///
/// An existing binding is cleared. Otherwise the nearest planet by
/// Euclidean distance is bound, but only if it lies within the
/// activation range; out-of-range toggles leave the binding unset.
pub fn toggle_binding(
    body_center: Vec2,
    binding: Option<usize>,
    planets: &[Planet],
    config: &SimConfig,
) -> Option<usize> {
    if binding.is_some() {
        return None;
    }

    let nearest = planets
        .iter()
        .enumerate()
        .map(|(i, p)| (i, body_center.distance(p.center)))
        .min_by(|a, b| a.1.total_cmp(&b.1));

    match nearest {
        Some((i, dist)) if dist < config.planet_activation_range => Some(i),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(x: f32, y: f32, radius: f32) -> Planet {
        Planet {
            center: Vec2::new(x, y),
            radius,
        }
    }

    #[test]
    fn test_default_field_points_down() {
        let config = SimConfig::default();
        let a = acceleration(Vec2::new(100.0, 100.0), None, &config);
        assert_eq!(a, Vec2::new(0.0, config.gravity));
    }

    #[test]
    fn test_planet_field_points_at_center() {
        let config = SimConfig::default();
        let p = planet(400.0, 300.0, 50.0);
        // Body directly left of the planet
        let a = acceleration(Vec2::new(300.0, 300.0), Some(&p), &config);
        assert!(a.x > 0.0);
        assert!(a.y.abs() < 1e-6);
        assert!((a.length() - config.planet_strength).abs() < 1e-6);
    }

    #[test]
    fn test_field_finite_at_planet_center() {
        let config = SimConfig::default();
        let p = planet(400.0, 300.0, 50.0);
        let a = acceleration(Vec2::new(400.0, 300.0), Some(&p), &config);
        assert!(a.is_finite());
        assert_eq!(a, Vec2::ZERO); // zero separation, clamped distance
    }

    #[test]
    fn test_outward_direction_is_unit() {
        let p = planet(400.0, 300.0, 50.0);
        let d = outward_direction(Vec2::new(400.0, 200.0), &p);
        assert!((d.length() - 1.0).abs() < 1e-6);
        assert!(d.y < 0.0); // body above the planet, outward is up
    }

    #[test]
    fn test_toggle_binds_nearest_in_range() {
        let config = SimConfig::default();
        let planets = [planet(400.0, 300.0, 50.0), planet(700.0, 300.0, 50.0)];
        let bound = toggle_binding(Vec2::new(450.0, 300.0), None, &planets, &config);
        assert_eq!(bound, Some(0));
    }

    #[test]
    fn test_toggle_out_of_range_stays_unbound() {
        let config = SimConfig::default();
        let planets = [planet(700.0, 500.0, 50.0)];
        let bound = toggle_binding(Vec2::new(50.0, 50.0), None, &planets, &config);
        assert_eq!(bound, None);
    }

    #[test]
    fn test_toggle_clears_existing_binding() {
        let config = SimConfig::default();
        let planets = [planet(400.0, 300.0, 50.0)];
        let bound = toggle_binding(Vec2::new(400.0, 320.0), Some(0), &planets, &config);
        assert_eq!(bound, None);
    }

    #[test]
    fn test_toggle_with_no_planets() {
        let config = SimConfig::default();
        let bound = toggle_binding(Vec2::new(100.0, 100.0), None, &[], &config);
        assert_eq!(bound, None);
    }

    #[test]
    fn test_toggle_on_then_off_restores_default_field() {
        let config = SimConfig::default();
        let planets = [planet(400.0, 300.0, 50.0)];
        let pos = Vec2::new(350.0, 300.0);

        let bound = toggle_binding(pos, None, &planets, &config);
        assert_eq!(bound, Some(0));
        let unbound = toggle_binding(pos, bound, &planets, &config);
        assert_eq!(unbound, None);

        let a = acceleration(pos, None, &config);
        assert_eq!(a, Vec2::new(0.0, config.gravity));
    }
}
