//! Headless demo runner
//!
//! Drives the simulation with a naive autopilot and logs the outcome. Handy
//! for eyeballing tuning changes and checking determinism without a
//! renderer attached.
//!
//! Usage: gapwing [seed] [max_ticks] [config.json]

use std::error::Error;

use gapwing::config::Config;
use gapwing::consts::*;
use gapwing::sim::{GamePhase, GameState, TickInput, tick};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let max_ticks: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(20_000);
    let config = match args.next() {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };

    log::info!(
        "seed {seed}, screen {}x{}, up to {max_ticks} ticks",
        config.screen_width,
        config.screen_height
    );

    let mut state = GameState::new(seed, &config);
    while state.phase != GamePhase::Dead && state.time_ticks < max_ticks {
        let input = TickInput {
            flap: autopilot(&state, &config),
        };
        for event in tick(&mut state, &input, &config) {
            log::debug!("play {}", event.sound_asset());
        }
    }

    println!(
        "score {} after {} ticks ({:?})",
        state.score.current(),
        state.time_ticks,
        state.phase
    );
    Ok(())
}

/// Flap whenever the player is sinking below the center of the next gap.
fn autopilot(state: &GameState, config: &Config) -> bool {
    if state.phase == GamePhase::Ready {
        return true;
    }

    let player_left = config.center_x() - PLAYER_WIDTH / 2.0;
    let target = state
        .obstacles
        .obstacles()
        .iter()
        .filter(|o| o.x + PIPE_WIDTH > player_left)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
        .map(|o| o.gap_center())
        .unwrap_or_else(|| config.center_y());

    state.player.position + state.player.velocity < target - PLAYER_HEIGHT / 2.0
        && state.player.velocity < 1.0
}
