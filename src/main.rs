//! Headless demo run of the simulation core
//!
//! Loads a level from a JSON file given as the first argument (falling
//! back to the built-in demo level), plays a short scripted session at
//! the nominal tick rate, and logs what happens. Useful for eyeballing
//! the sim without any rendering collaborator attached.

use std::env;
use std::error::Error;
use std::fs;

use gravity_platformer::sim::{GamePhase, GameState, TickInput, tick};
use gravity_platformer::{Level, SimConfig};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let level = match env::args().nth(1) {
        Some(path) => {
            let json = fs::read_to_string(&path)?;
            let level = Level::from_json(&json)?;
            log::info!("loaded level from {path}");
            level
        }
        None => {
            log::info!("no level file given, using the built-in demo level");
            Level::demo()
        }
    };

    let mut state = GameState::new(SimConfig::default(), vec![level]);
    tick(&mut state, &TickInput { start: true, ..Default::default() });

    // Scripted session: run right for a while, jump periodically, try a
    // gravity toggle halfway through.
    let total_ticks = 600u64;
    for t in 0..total_ticks {
        let input = TickInput {
            move_right: t < 240,
            jump: t % 90 == 30,
            toggle_gravity: t == 300,
            ..Default::default()
        };

        let events = tick(&mut state, &input);
        for event in &events {
            log::info!("tick {t}: {event:?}");
        }

        if state.phase != GamePhase::Playing {
            break;
        }

        if t % 60 == 0 {
            log::debug!(
                "tick {t}: pos=({:.1}, {:.1}) vel=({:.2}, {:.2}) health={} score={}",
                state.body.pos.x,
                state.body.pos.y,
                state.body.vel.x,
                state.body.vel.y,
                state.body.health,
                state.score,
            );
        }
    }

    println!(
        "finished in phase {:?}: score {}, lives {}, {} star(s) left, health {}",
        state.phase,
        state.score,
        state.lives,
        state.stars_remaining(),
        state.body.health,
    );

    Ok(())
}
