//! Per-frame simulation step
//!
//! Advances the whole simulation one fixed step in a strict order: input,
//! player, obstacles, scroll layers, score, collision. Every entity has
//! moved before the collision sweep runs, so hits are always evaluated at
//! post-motion positions.

use super::collision;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::Config;

/// Input commands for a single tick. `flap` is a key-press edge delivered
/// by the host, not held-key repeat.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub flap: bool,
}

/// Advance the game state by one frame. Returned events are fire-and-forget
/// signals for the audio collaborator, in the order they occurred.
pub fn tick(state: &mut GameState, input: &TickInput, config: &Config) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if input.flap {
        // The first flap both starts the run and applies the impulse
        if state.phase == GamePhase::Ready {
            state.phase = GamePhase::Playing;
            log::info!("run started at tick {}", state.time_ticks);
        }
        if state.phase == GamePhase::Playing {
            state.player.jump();
        }
    }

    state.time_ticks += 1;

    let grounded = state.player.tick(state.phase);
    if grounded && state.phase != GamePhase::Dead {
        // Ground contact ends the run silently; only collisions are sounded
        state.phase = GamePhase::Dead;
        log::info!("dead: ground contact at tick {}", state.time_ticks);
    }

    state
        .obstacles
        .tick(state.phase, config, &mut state.rng);
    state.background.tick(state.phase);
    state.base.tick(state.phase);

    if let Some(event) = state.score.tick(&mut state.obstacles, config) {
        log::debug!(
            "score {} at tick {}",
            state.score.current(),
            state.time_ticks
        );
        events.push(event);
    }

    if state.phase != GamePhase::Dead
        && collision::player_hits_field(&state.player, &state.obstacles, config)
    {
        state.phase = GamePhase::Dead;
        events.push(GameEvent::Hit);
        events.push(GameEvent::Die);
        log::info!("dead: collision at tick {}", state.time_ticks);
    }

    events
}
