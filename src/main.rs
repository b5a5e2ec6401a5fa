//! Tank Arena headless driver
//!
//! Runs a session on a synthetic 60 Hz clock with a scripted patrol input and
//! prints the final snapshot as JSON.
//!
//! Usage: `tank-arena [seed] [ticks]`. Settings are read from the file named
//! by `TANK_ARENA_SETTINGS`, falling back to the defaults.

#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

#[cfg(not(target_arch = "wasm32"))]
use tank_arena::Settings;
#[cfg(not(target_arch = "wasm32"))]
use tank_arena::sim::{ArenaSnapshot, ArenaState, Steer, TickInput, tick};

#[cfg(not(target_arch = "wasm32"))]
const SETTINGS_ENV: &str = "TANK_ARENA_SETTINGS";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_SEED: u64 = 42;
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_TICKS: u64 = 3_600;
/// 60 Hz frame length
#[cfg(not(target_arch = "wasm32"))]
const FRAME_MICROS: u64 = 16_667;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = parse_arg(args.next(), "seed", DEFAULT_SEED);
    let ticks = parse_arg(args.next(), "ticks", DEFAULT_TICKS);

    let settings = match std::env::var(SETTINGS_ENV) {
        Ok(path) => Settings::load_or_default(path),
        Err(_) => Settings::default(),
    };

    log::info!("Tank Arena (headless) starting: seed {seed}, {ticks} ticks");
    let mut state = ArenaState::with_settings(settings, seed);

    for n in 0..ticks {
        let input = patrol_input(n);
        tick(&mut state, &input, frame_time(n));
        for event in state.drain_events() {
            log::trace!("tick {n}: {event:?}");
        }
        if state.is_game_over() {
            break;
        }
    }

    let snapshot = ArenaSnapshot::capture(&state);
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            log::error!("Failed to serialize snapshot: {e}");
            std::process::exit(1);
        }
    }
}

/// Timestamp of frame `n` on the synthetic clock
#[cfg(not(target_arch = "wasm32"))]
fn frame_time(n: u64) -> Duration {
    Duration::from_micros(FRAME_MICROS.saturating_mul(n))
}

/// Parse a positional argument, exiting with a message if it is malformed
#[cfg(not(target_arch = "wasm32"))]
fn parse_arg(arg: Option<String>, name: &str, default: u64) -> u64 {
    let Some(raw) = arg else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            log::error!("Invalid {name} {raw:?}: {e}");
            std::process::exit(2);
        }
    }
}

/// Drive a square patrol, turning every second and firing twice a second
#[cfg(not(target_arch = "wasm32"))]
fn patrol_input(n: u64) -> TickInput {
    const LEGS: [Steer; 4] = [Steer::Right, Steer::Down, Steer::Left, Steer::Up];
    TickInput {
        steer: LEGS[(n / 60 % 4) as usize],
        fire: n % 30 == 0,
        ..Default::default()
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless driver in the browser; embed the library instead
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_frame_time_past_u32_ticks() {
        let n = u64::from(u32::MAX) + 10;
        assert_eq!(frame_time(n), Duration::from_micros(16_667 * n));
        assert!(frame_time(n) > frame_time(u64::from(u32::MAX)));
    }
}
