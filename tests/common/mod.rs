//! Integration test harness.
//!
//! Keep integration tests headless and deterministic:
//! - arenas are built from explicit settings and layouts
//! - time is a synthetic 60 Hz clock

#![allow(dead_code)]

use std::time::Duration;

use tank_arena::Settings;
use tank_arena::sim::{ArenaState, ObstacleLayout, TickInput, tick};

/// Wall-free arena with no starting hostiles and the spawner pushed out of reach
pub fn open_arena(seed: u64) -> ArenaState {
    let settings = Settings {
        initial_hostiles: Vec::new(),
        min_spawn_interval_ms: 3_600_000,
        max_spawn_interval_ms: 3_600_000,
        ..Default::default()
    };
    ArenaState::with_layout(settings, ObstacleLayout::empty(), seed)
}

/// Timestamp of frame `n` on a 60 Hz clock
pub fn frame(n: u64) -> Duration {
    Duration::from_micros(16_667 * n)
}

/// Run `count` idle ticks starting after frame `start`; returns the last frame index
pub fn run_idle(state: &mut ArenaState, start: u64, count: u64) -> u64 {
    let idle = TickInput::default();
    for n in start + 1..=start + count {
        tick(state, &idle, frame(n));
    }
    start + count
}
