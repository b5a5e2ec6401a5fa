mod common;

use glam::Vec2;
use proptest::prelude::*;
use tank_arena::Settings;
use tank_arena::sim::{
    ArenaEvent, ArenaSnapshot, ArenaState, DamageOutcome, EffectKind, Facing, KillCause,
    ObstacleLayout, Owner, Steer, TickInput, tick,
};

use common::{frame, open_arena, run_idle};

#[test]
fn projectile_destroys_approaching_hostile() {
    let mut state = open_arena(1);
    let id = state.add_hostile(Vec2::new(100.0, 100.0), Some(Facing::Right), frame(0));
    // Projectile box with its top-left corner at (100, 100), flying left
    let half = state.settings.projectile_size / 2.0;
    state.fire_projectile(Owner::Player, Vec2::new(100.0 + half, 100.0 + half), Facing::Left);

    tick(&mut state, &TickInput::default(), frame(1));

    assert!(state.hostiles.is_empty());
    assert!(state.player_projectiles.is_empty());
    assert_eq!(state.score, 1);
    assert_eq!(state.effects.len(), 1);
    assert_eq!(state.effects[0].kind, EffectKind::Standard);
    // Hostile had moved 1.5 px right before it was hit
    assert_eq!(state.effects[0].center, Vec2::new(117.5, 116.0));
    assert!(state.events.contains(&ArenaEvent::HostileDestroyed {
        id,
        cause: KillCause::Projectile
    }));
}

#[test]
fn last_life_lost_ends_the_game() {
    let settings = Settings {
        starting_lives: 1,
        initial_hostiles: Vec::new(),
        ..Default::default()
    };
    let mut state = ArenaState::with_layout(settings, ObstacleLayout::empty(), 2);
    let target = state.player.center();
    state.fire_projectile(Owner::Hostile, target - Vec2::new(8.0, 0.0), Facing::Right);

    tick(&mut state, &TickInput::default(), frame(1));

    assert_eq!(state.player.lives(), 0);
    assert!(state.player.exploded());
    assert!(state.is_game_over());
    assert!(state.events.contains(&ArenaEvent::PlayerExploded));
    assert_eq!(state.player.take_damage(frame(500)), DamageOutcome::Ignored);

    // Ticks keep running; the embedding decides when to stop
    let fire = TickInput {
        steer: Steer::Left,
        fire: true,
        ..Default::default()
    };
    let pos = state.player.motion.pos;
    tick(&mut state, &fire, frame(2));
    assert_eq!(state.time_ticks, 2);
    assert_eq!(state.player.motion.pos, pos);
    assert!(state.player_projectiles.is_empty());
    assert!(ArenaSnapshot::capture(&state).game_over);
}

#[test]
fn restart_after_game_over_is_a_fresh_session() {
    let settings = Settings {
        starting_lives: 1,
        ..Default::default()
    };
    let mut state = ArenaState::with_settings(settings, 3);
    state.player.take_damage(frame(0));
    assert!(state.is_game_over());

    let restart = TickInput {
        restart: true,
        ..Default::default()
    };
    tick(&mut state, &restart, frame(10));

    assert!(!state.is_game_over());
    assert_eq!(state.player.lives(), 1);
    assert_eq!(state.player.motion.pos, state.settings.player_spawn());
    assert!(!state.player.is_invulnerable(state.sim_now));
    assert_eq!(state.score, 0);
    assert_eq!(state.hostiles.len(), state.settings.initial_hostiles.len());
}

#[test]
fn player_reset_restores_default_lives() {
    let mut state = open_arena(4);
    for n in 0..3u64 {
        state.player.take_damage(frame(n * 200));
    }
    assert!(state.player.exploded());

    state.player.reset();
    assert_eq!(state.player.lives(), 3);
    assert!(!state.player.exploded());
    assert_eq!(state.player.motion.pos, Vec2::new(624.0, 344.0));
    assert_eq!(state.player.respawn_at(), None);
    assert_eq!(
        state.player.take_damage(frame(2_000)),
        DamageOutcome::Respawned { lives: 2 }
    );
}

#[test]
fn ramming_and_shooting_score_independently() {
    let mut state = open_arena(5);
    let spawn = state.player.motion.pos;
    state.add_hostile(spawn + Vec2::new(24.0, 0.0), None, frame(0));
    state.add_hostile(Vec2::new(100.0, 600.0), None, frame(0));

    tick(&mut state, &TickInput::default(), frame(1));
    assert_eq!(state.hostiles.len(), 1);
    assert_eq!(state.score, 0);
    assert_eq!(state.player.lives(), 2);

    state.fire_projectile(Owner::Player, Vec2::new(140.0, 616.0), Facing::Left);
    run_idle(&mut state, 1, 10);
    assert!(state.hostiles.is_empty());
    assert_eq!(state.score, 1);
}

#[test]
fn pause_holds_hostile_timers() {
    let mut state = open_arena(6);
    state.add_hostile(Vec2::new(100.0, 500.0), None, frame(0));
    let toggle = TickInput {
        pause: true,
        ..Default::default()
    };

    tick(&mut state, &TickInput::default(), frame(1));
    tick(&mut state, &toggle, frame(2));
    assert!(state.is_paused());
    assert!(ArenaSnapshot::capture(&state).paused);

    // Ten seconds paused, far past the shoot interval
    tick(&mut state, &toggle, frame(602));
    assert!(!state.is_paused());
    assert!(state.hostile_projectiles.is_empty());

    // Fires once 1.5 s of running time has passed
    run_idle(&mut state, 602, 85);
    assert!(state.hostile_projectiles.is_empty());
    run_idle(&mut state, 687, 5);
    assert_eq!(state.hostile_projectiles.len(), 1);
}

#[test]
fn hostile_reverses_once_at_the_arena_edge() {
    let mut state = open_arena(7);
    let edge = state.settings.arena_width - state.settings.tank_size;
    state.add_hostile(Vec2::new(edge - 1.0, 300.0), Some(Facing::Right), frame(0));

    tick(&mut state, &TickInput::default(), frame(1));
    assert_eq!(state.hostiles[0].motion.pos.x, edge - 1.0);
    assert_eq!(state.hostiles[0].motion.facing, Facing::Left);

    run_idle(&mut state, 1, 10);
    assert_eq!(state.hostiles[0].motion.facing, Facing::Left);
    assert!(state.hostiles[0].motion.pos.x < edge - 10.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn tanks_stay_clear_of_walls(seed in any::<u64>()) {
        let mut state = ArenaState::new(seed);
        let legs = [Steer::Up, Steer::Right, Steer::Down, Steer::Left];

        for n in 1..=900u64 {
            let input = TickInput {
                steer: legs[(n / 45 % 4) as usize],
                fire: n % 20 == 0,
                ..Default::default()
            };
            tick(&mut state, &input, frame(n));

            prop_assert!(!state.walls.blocks(&state.player.bounds()));
            prop_assert!(state.hostiles.len() <= state.settings.max_enemy_tanks);
            for hostile in &state.hostiles {
                prop_assert!(!state.walls.blocks(&hostile.bounds()));
            }
        }
    }
}
