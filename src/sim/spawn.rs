//! Hostile spawn scheduler
//!
//! At randomized intervals, pick one of the fixed spawn points and place a
//! new hostile there unless the spot is crowded. A crowded pick is dropped
//! silently; the next attempt is scheduled either way.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::hostile::roll_heading;
use super::state::{ArenaEvent, ArenaState};
use crate::ms;

/// What a spawner update did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnAttempt {
    /// Deadline not reached yet
    NotDue,
    /// Deadline reached but the arena is full; retried next tick
    AtCapacity,
    /// Candidate too close to another tank
    Rejected(Vec2),
    Spawned(u32),
    /// No spawn points configured
    NoSpawnPoints,
}

/// Set the next spawn deadline to `now` plus a random interval in the configured window
///
/// An inverted window is read with its bounds swapped.
pub fn schedule_next(state: &mut ArenaState, now: Duration) {
    let a = state.settings.min_spawn_interval_ms;
    let b = state.settings.max_spawn_interval_ms;
    let delay = state.rng.random_range(a.min(b)..=a.max(b));
    state.next_spawn_at = now + ms(delay);
}

/// True if a hostile at `candidate` keeps its distance from every live hostile and the player
pub fn placement_clear(state: &ArenaState, candidate: Vec2) -> bool {
    let hostile_gap = state.settings.min_spawn_separation;
    let crowded = state
        .hostiles
        .iter()
        .filter(|h| h.alive)
        .any(|h| h.motion.pos.distance(candidate) < hostile_gap);
    if crowded {
        return false;
    }

    state.player.exploded()
        || state.player.motion.pos.distance(candidate) >= state.settings.min_player_separation
}

/// Run the spawn scheduler for simulation time `now`
pub fn update_spawner(state: &mut ArenaState, now: Duration) -> SpawnAttempt {
    if now < state.next_spawn_at {
        return SpawnAttempt::NotDue;
    }
    if state.live_hostiles() >= state.settings.max_enemy_tanks {
        return SpawnAttempt::AtCapacity;
    }

    let Some(&candidate) = state.settings.spawn_points.choose(&mut state.rng) else {
        schedule_next(state, now);
        return SpawnAttempt::NoSpawnPoints;
    };

    let attempt = if placement_clear(state, candidate) {
        let heading = roll_heading(&mut state.rng);
        let id = state.add_hostile(candidate, heading, now);
        state.events.push(ArenaEvent::HostileSpawned { id, pos: candidate });
        log::debug!("Spawned hostile {id} at {candidate:?} ({} live)", state.live_hostiles());
        SpawnAttempt::Spawned(id)
    } else {
        state.events.push(ArenaEvent::SpawnRejected { candidate });
        log::debug!("Spawn point {candidate:?} crowded, skipping");
        SpawnAttempt::Rejected(candidate)
    };

    schedule_next(state, now);
    attempt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::layout::ObstacleLayout;
    use proptest::prelude::*;

    fn open_arena(settings: Settings, seed: u64) -> ArenaState {
        ArenaState::with_layout(settings, ObstacleLayout::empty(), seed)
    }

    #[test]
    fn test_not_due_before_deadline() {
        let mut state = ArenaState::new(3);
        let deadline = state.next_spawn_at;
        assert_eq!(
            update_spawner(&mut state, deadline - ms(1)),
            SpawnAttempt::NotDue
        );
        assert_eq!(state.next_spawn_at, deadline);
    }

    #[test]
    fn test_rejects_occupied_point() {
        let settings = Settings {
            initial_hostiles: vec![Vec2::new(100.0, 100.0)],
            spawn_points: vec![Vec2::new(120.0, 120.0)],
            ..Default::default()
        };
        let mut state = open_arena(settings, 11);
        let deadline = state.next_spawn_at;

        let attempt = update_spawner(&mut state, deadline);
        assert_eq!(attempt, SpawnAttempt::Rejected(Vec2::new(120.0, 120.0)));
        assert_eq!(state.hostiles.len(), 1);
        // Rescheduled even though nothing spawned
        assert!(state.next_spawn_at > deadline);
    }

    #[test]
    fn test_rejects_point_near_player() {
        let settings = Settings {
            initial_hostiles: Vec::new(),
            spawn_points: vec![Vec2::new(600.0, 344.0)],
            ..Default::default()
        };
        let mut state = open_arena(settings, 2);
        let deadline = state.next_spawn_at;
        assert!(matches!(
            update_spawner(&mut state, deadline),
            SpawnAttempt::Rejected(_)
        ));
        assert!(state.hostiles.is_empty());
    }

    #[test]
    fn test_spawns_on_clear_point() {
        let settings = Settings {
            initial_hostiles: Vec::new(),
            spawn_points: vec![Vec2::new(100.0, 600.0)],
            ..Default::default()
        };
        let mut state = open_arena(settings, 4);
        let deadline = state.next_spawn_at;

        let SpawnAttempt::Spawned(id) = update_spawner(&mut state, deadline) else {
            panic!("expected a spawn");
        };
        assert_eq!(state.hostiles.len(), 1);
        assert_eq!(state.hostiles[0].id, id);
        assert_eq!(state.hostiles[0].motion.pos, Vec2::new(100.0, 600.0));
        assert!(state.next_spawn_at >= deadline + ms(3_000));
        assert!(state.next_spawn_at <= deadline + ms(8_000));
    }

    #[test]
    fn test_full_arena_waits_without_rescheduling() {
        let settings = Settings {
            max_enemy_tanks: 4,
            ..Default::default()
        };
        let mut state = open_arena(settings, 8);
        let deadline = state.next_spawn_at;
        assert_eq!(update_spawner(&mut state, deadline), SpawnAttempt::AtCapacity);
        assert_eq!(state.next_spawn_at, deadline);
    }

    #[test]
    fn test_misconfigured_spawner_stays_quiet() {
        let settings = Settings {
            initial_hostiles: Vec::new(),
            spawn_points: Vec::new(),
            min_spawn_interval_ms: 9_000,
            max_spawn_interval_ms: 1_000,
            ..Default::default()
        };
        let mut state = open_arena(settings, 21);
        let deadline = state.next_spawn_at;
        assert!(deadline >= ms(1_000) && deadline <= ms(9_000));

        assert_eq!(update_spawner(&mut state, deadline), SpawnAttempt::NoSpawnPoints);
        assert!(state.hostiles.is_empty());
        assert!(state.next_spawn_at > deadline);
    }

    proptest! {
        #[test]
        fn prop_spawner_respects_capacity_and_spacing(seed in any::<u64>(), attempts in 1usize..60) {
            let mut state = ArenaState::new(seed);
            let max = state.settings.max_enemy_tanks;
            let gap = state.settings.min_spawn_separation;

            for _ in 0..attempts {
                let now = state.next_spawn_at;
                let before: Vec<Vec2> = state.hostiles.iter().map(|h| h.motion.pos).collect();
                if let SpawnAttempt::Spawned(id) = update_spawner(&mut state, now) {
                    let spawned = state.hostiles.iter().find(|h| h.id == id).map(|h| h.motion.pos);
                    let spawned = spawned.expect("spawned hostile is tracked");
                    for pos in before {
                        prop_assert!(pos.distance(spawned) >= gap);
                    }
                }
                prop_assert!(state.live_hostiles() <= max);
            }
        }
    }
}
