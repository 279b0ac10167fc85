//! Fixed timestep simulation tick
//!
//! Advances the game state by exactly one tick: phase actions first, then
//! input intents, gravity, per-axis collision resolution, hazard damage,
//! friction, world bounds, star collection, and the phase checks.

use super::collision::{Axis, clamp_to_world, near_planet_surface, resolve_axis};
use super::gravity;
use super::state::{GamePhase, GameState};

/// Input for a single tick. Each field is a discrete per-tick intent,
/// not a wire protocol; held keys are re-asserted every tick by the
/// input collaborator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Set horizontal velocity leftward
    pub move_left: bool,
    /// Set horizontal velocity rightward
    pub move_right: bool,
    /// Attempt a jump
    pub jump: bool,
    /// Toggle the active gravity binding
    pub toggle_gravity: bool,
    /// Menu: start playing the stored current level
    pub start: bool,
    /// LevelComplete: advance to the next level, if one exists
    pub next_level: bool,
    /// GameOver: reset lives/score/level and play again
    pub restart: bool,
    /// Return to the menu, valid from any phase
    pub menu: bool,
}

/// Moments the HUD/audio collaborators care about, raised during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    Jumped,
    GravityBound { planet: usize },
    GravityCleared,
    StarCollected { star: usize },
    Damaged { amount: i32 },
    Died,
    Respawned,
    LevelComplete,
    GameOver,
}

/// Advance the game state by one fixed tick.
///
/// Returns the events this tick raised, in the order they occurred.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<TickEvent> {
    let mut events = Vec::new();

    // Cancel to menu is valid from every phase and discards any
    // in-progress simulation state without persisting it.
    if input.menu {
        if state.phase != GamePhase::Menu {
            log::info!("returning to menu");
            state.phase = GamePhase::Menu;
        }
        return events;
    }

    match state.phase {
        GamePhase::Menu => {
            if input.start {
                state.score = 0;
                state.lives = state.config.starting_lives;
                state.load_level(state.level_index);
                state.phase = GamePhase::Playing;
            }
            return events;
        }
        GamePhase::GameOver => {
            if input.restart {
                state.score = 0;
                state.lives = state.config.starting_lives;
                state.load_level(0);
                state.phase = GamePhase::Playing;
            }
            return events;
        }
        GamePhase::LevelComplete => {
            if input.next_level && state.has_next_level() {
                let next = state.level_index + 1;
                state.load_level(next);
                state.phase = GamePhase::Playing;
            }
            return events;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Input intents
    if input.move_left {
        state.body.vel.x = -state.config.move_speed;
        state.body.facing_right = false;
    }
    if input.move_right {
        state.body.vel.x = state.config.move_speed;
        state.body.facing_right = true;
    }
    if input.toggle_gravity {
        let next = gravity::toggle_binding(
            state.body.pos,
            state.binding,
            &state.level.planets,
            &state.config,
        );
        match (state.binding, next) {
            (Some(_), None) => {
                log::debug!("gravity binding cleared");
                events.push(TickEvent::GravityCleared);
            }
            (None, Some(planet)) => {
                log::debug!("gravity bound to planet {planet}");
                events.push(TickEvent::GravityBound { planet });
            }
            _ => {} // out-of-range toggle, nothing bound
        }
        state.binding = next;
    }
    if input.jump {
        try_jump(state, &mut events);
    }

    // Gravity, then axis-separated motion: horizontal fully, then vertical
    let accel = gravity::acceleration(state.body.pos, state.bound_planet(), &state.config);
    state.body.vel += accel;

    resolve_axis(&mut state.body, &state.level.platforms, Axis::X);

    state.body.on_ground = false;
    let vertical = resolve_axis(&mut state.body, &state.level.platforms, Axis::Y);
    if vertical.landed {
        state.body.on_ground = true;
        state.body.jump_count = 0;
    }

    // Standing on a planet, without circular collision geometry
    if near_planet_surface(
        state.body.pos,
        &state.level.planets,
        state.config.planet_surface_margin,
    ) {
        state.body.on_ground = true;
        state.body.jump_count = 0;
    }

    apply_hazard_damage(state, &mut events);

    // Invincibility window counts down every tick it is open, including
    // the tick that opened it, so re-damage lands exactly one window later.
    if state.body.invincible_ticks > 0 {
        state.body.invincible_ticks -= 1;
    }

    // Friction, once per tick, after resolution, regardless of gravity mode
    state.body.vel.x *= state.config.friction;

    if clamp_to_world(&mut state.body, &state.config) {
        state.body.on_ground = true;
        state.body.jump_count = 0;
    }

    collect_stars(state, &mut events);

    // Phase checks, in the original's order: completion before death
    if state.stars_remaining() == 0 {
        log::info!(
            "level {} complete, score {}",
            state.level_index + 1,
            state.score
        );
        state.phase = GamePhase::LevelComplete;
        events.push(TickEvent::LevelComplete);
        return events;
    }

    if state.body.health <= 0 {
        events.push(TickEvent::Died);
        state.lives = state.lives.saturating_sub(1);
        if state.lives == 0 {
            log::info!("game over, final score {}", state.score);
            state.phase = GamePhase::GameOver;
            events.push(TickEvent::GameOver);
        } else {
            log::info!("died, {} lives left", state.lives);
            state.respawn();
            events.push(TickEvent::Respawned);
        }
    }

    events
}

/// Jump, if the budget allows it.
///
/// Grounded or with jumps left: consume one jump and apply the impulse
/// opposite the current gravity direction. Under the default field the
/// vertical velocity is set outright; under a planet the impulse is
/// added radially outward. Anything else is a silent no-op.
fn try_jump(state: &mut GameState, events: &mut Vec<TickEvent>) {
    let body = &state.body;
    if !(body.on_ground || body.jump_count < state.config.max_jumps) {
        return;
    }

    let outward = state
        .bound_planet()
        .map(|p| gravity::outward_direction(state.body.pos, p));

    state.body.jump_count += 1;
    match outward {
        Some(dir) => state.body.vel += dir * state.config.jump_strength,
        None => state.body.vel.y = -state.config.jump_strength,
    }
    state.body.on_ground = false;
    events.push(TickEvent::Jumped);
}

/// Hazard overlap damage, rate-limited by the invincibility window.
fn apply_hazard_damage(state: &mut GameState, events: &mut Vec<TickEvent>) {
    if state.body.invincible() {
        return;
    }
    let body_box = state.body.aabb();
    if state.level.hazards.iter().any(|h| body_box.overlaps(h)) {
        let amount = state.config.hazard_damage;
        state.body.health = (state.body.health - amount).max(0);
        state.body.invincible_ticks = state.config.invincibility_ticks;
        events.push(TickEvent::Damaged { amount });
    }
}

/// Collect every live star the body overlaps. Collection is permanent
/// for the attempt; a collected star's position is inert.
fn collect_stars(state: &mut GameState, events: &mut Vec<TickEvent>) {
    let body_box = state.body.aabb();
    for (i, star) in state.level.stars.iter_mut().enumerate() {
        if !star.collected && body_box.overlaps(&star.aabb()) {
            star.collected = true;
            state.score += state.config.star_points;
            events.push(TickEvent::StarCollected { star: i });
        }
    }
}
