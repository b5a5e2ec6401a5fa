//! Per-tick arena update
//!
//! The order of the steps below is fixed: later steps rely on earlier ones
//! having already swept destroyed entities.

use std::time::Duration;

use glam::Vec2;

use super::effect::EffectKind;
use super::motion::{Facing, Steer};
use super::player::DamageOutcome;
use super::projectile::Owner;
use super::spawn;
use super::state::{ArenaEvent, ArenaState, KillCause};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional command for the player tank
    pub steer: Steer,
    /// Fire one projectile this tick
    pub fire: bool,
    /// Pause toggle
    pub pause: bool,
    /// Full session restart
    pub restart: bool,
}

/// Advance the arena by one tick; `now` is the embedding's monotonic timestamp
pub fn tick(state: &mut ArenaState, input: &TickInput, now: Duration) {
    state.events.clear();

    if input.restart {
        state.restart(now);
    }

    // Handle pause toggle
    if input.pause {
        if state.is_paused() {
            state.resume(now);
        } else {
            state.pause(now);
        }
    }
    if state.is_paused() {
        return;
    }

    let now = state.clock.sim_time(now);
    state.sim_now = now;
    state.time_ticks += 1;

    update_player(state, input);
    spawn::update_spawner(state, now);
    update_hostiles(state, now);
    resolve_ramming(state, now);
    resolve_player_projectiles(state);
    resolve_hostile_projectiles(state, now);
    age_effects(state, now);

    if state.is_game_over() && !state.game_over_reported {
        state.game_over_reported = true;
        log::info!(
            "Game over at tick {} with score {}",
            state.time_ticks,
            state.score
        );
    }
}

/// Steering, movement and the fire command
fn update_player(state: &mut ArenaState, input: &TickInput) {
    if state.player.exploded() {
        return;
    }

    state.player.steer(input.steer);
    state.player.update(&state.walls, &state.arena);

    if input.fire {
        let origin = state.player.center();
        let facing = state.player.motion.facing;
        state.fire_projectile(Owner::Player, origin, facing);
    }
}

/// Wander, move, and queue shots for every live hostile
fn update_hostiles(state: &mut ArenaState, now: Duration) {
    // Shots are collected first, projectiles need fresh IDs from the state
    let mut shots: Vec<(Vec2, Facing)> = Vec::new();

    let ArenaState {
        hostiles,
        walls,
        arena,
        rng,
        ..
    } = state;
    for hostile in hostiles.iter_mut().filter(|h| h.alive) {
        hostile.update(now, walls, arena, &mut *rng);
        if hostile.ready_to_fire(now) {
            shots.push((hostile.center(), hostile.motion.facing));
        }
    }

    for (origin, facing) in shots {
        state.fire_projectile(Owner::Hostile, origin, facing);
    }
}

/// Player body against hostile bodies: at most one collision per tick, first in spawn order
fn resolve_ramming(state: &mut ArenaState, now: Duration) {
    if state.player.exploded() {
        return;
    }

    let player_bounds = state.player.bounds();
    let Some(index) = state
        .hostiles
        .iter()
        .position(|h| h.alive && h.bounds().intersects(&player_bounds))
    else {
        return;
    };

    let player_center = state.player.center();
    let hostile_center = state.hostiles[index].center();
    state.add_effect(player_center, EffectKind::Standard);
    state.add_effect(hostile_center, EffectKind::Standard);

    damage_player(state, now);

    let hostile = &mut state.hostiles[index];
    hostile.destroy();
    let id = hostile.id;
    state.events.push(ArenaEvent::HostileDestroyed {
        id,
        cause: KillCause::Ramming,
    });
    log::debug!("Hostile {id} rammed the player");

    state.sweep_hostiles();
}

/// Player projectiles: hostile hit, then wall hit, then leaving the arena
fn resolve_player_projectiles(state: &mut ArenaState) {
    for i in 0..state.player_projectiles.len() {
        let bounds = {
            let projectile = &mut state.player_projectiles[i];
            projectile.advance();
            projectile.bounds()
        };

        if let Some(hostile) = state
            .hostiles
            .iter_mut()
            .find(|h| h.alive && h.bounds().intersects(&bounds))
        {
            hostile.destroy();
            let id = hostile.id;
            let center = hostile.center();

            state.player_projectiles[i].spent = true;
            state.score += state.settings.score_per_kill;
            state.add_effect(center, EffectKind::Standard);
            state.events.push(ArenaEvent::HostileDestroyed {
                id,
                cause: KillCause::Projectile,
            });
            log::debug!("Hostile {id} destroyed, score {}", state.score);
            continue;
        }

        retire_on_wall_or_edge(state, Owner::Player, i);
    }

    state.player_projectiles.retain(|p| !p.spent);
    state.sweep_hostiles();
}

/// Hostile projectiles: player hit, then wall hit, then leaving the arena
fn resolve_hostile_projectiles(state: &mut ArenaState, now: Duration) {
    for i in 0..state.hostile_projectiles.len() {
        let (bounds, center) = {
            let projectile = &mut state.hostile_projectiles[i];
            projectile.advance();
            (projectile.bounds(), projectile.pos)
        };

        if !state.player.exploded() && state.player.bounds().intersects(&bounds) {
            state.hostile_projectiles[i].spent = true;
            state.add_effect(center, EffectKind::Standard);
            damage_player(state, now);
            continue;
        }

        retire_on_wall_or_edge(state, Owner::Hostile, i);
    }

    state.hostile_projectiles.retain(|p| !p.spent);
}

/// Mark a projectile spent if it hit a wall (leaving a brief effect) or left the arena
fn retire_on_wall_or_edge(state: &mut ArenaState, owner: Owner, index: usize) {
    let projectiles = match owner {
        Owner::Player => &mut state.player_projectiles,
        Owner::Hostile => &mut state.hostile_projectiles,
    };
    let projectile = &mut projectiles[index];
    let bounds = projectile.bounds();

    if state.walls.blocks(&bounds) {
        projectile.spent = true;
        let center = projectile.pos;
        state.add_effect(center, EffectKind::Brief);
    } else if projectile.is_offscreen(&state.arena, state.settings.offscreen_margin) {
        projectile.spent = true;
    }
}

fn damage_player(state: &mut ArenaState, now: Duration) {
    match state.player.take_damage(now) {
        DamageOutcome::Ignored => {}
        DamageOutcome::Respawned { lives } => {
            state.events.push(ArenaEvent::PlayerDamaged { lives });
            log::debug!("Player hit, {lives} lives left");
        }
        DamageOutcome::Exploded => {
            state.events.push(ArenaEvent::PlayerDamaged { lives: 0 });
            state.events.push(ArenaEvent::PlayerExploded);
            log::info!("Player tank exploded");
        }
    }
}

fn age_effects(state: &mut ArenaState, now: Duration) {
    for effect in &mut state.effects {
        effect.update(now);
    }
    state.effects.retain(|e| !e.expired());
}
