//! Read-only view of the arena for renderers and tooling
//!
//! Captured after a tick; holds plain values only, so it can be handed to a
//! draw pass or serialized without borrowing the live state.

use glam::Vec2;
use serde::Serialize;

use super::aabb::Aabb;
use super::effect::EffectKind;
use super::motion::Facing;
use super::projectile::Owner;
use super::state::ArenaState;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityView {
    pub id: u32,
    pub bounds: Aabb,
    pub facing: Facing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileView {
    pub id: u32,
    pub owner: Owner,
    pub bounds: Aabb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EffectView {
    pub center: Vec2,
    pub kind: EffectKind,
    /// Display edge length
    pub size: f32,
}

/// Everything a frame needs to draw the arena and its HUD
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArenaSnapshot {
    pub time_ticks: u64,
    pub score: u64,
    pub lives: u32,
    pub exploded: bool,
    /// Player is inside the post-respawn window (renderers may blink it)
    pub invulnerable: bool,
    pub game_over: bool,
    pub paused: bool,
    pub walls: Vec<Aabb>,
    pub player: EntityView,
    pub hostiles: Vec<EntityView>,
    /// Player shots first, then hostile shots
    pub projectiles: Vec<ProjectileView>,
    pub effects: Vec<EffectView>,
}

impl ArenaSnapshot {
    pub fn capture(state: &ArenaState) -> Self {
        // Entity ids start at 1, so 0 is free for the player
        let player = EntityView {
            id: 0,
            bounds: state.player.bounds(),
            facing: state.player.motion.facing,
        };

        let hostiles = state
            .hostiles
            .iter()
            .filter(|h| h.alive)
            .map(|h| EntityView {
                id: h.id,
                bounds: h.bounds(),
                facing: h.motion.facing,
            })
            .collect();

        let projectiles = state
            .player_projectiles
            .iter()
            .chain(&state.hostile_projectiles)
            .filter(|p| !p.spent)
            .map(|p| ProjectileView {
                id: p.id,
                owner: p.owner,
                bounds: p.bounds(),
            })
            .collect();

        let effects = state
            .effects
            .iter()
            .filter(|e| !e.expired())
            .map(|e| EffectView {
                center: e.center,
                kind: e.kind,
                size: e.kind.size(&state.settings),
            })
            .collect();

        Self {
            time_ticks: state.time_ticks,
            score: state.score,
            lives: state.player.lives(),
            exploded: state.player.exploded(),
            invulnerable: state.player.is_invulnerable(state.sim_now),
            game_over: state.is_game_over(),
            paused: state.is_paused(),
            walls: state.walls.walls().to_vec(),
            player,
            hostiles,
            projectiles,
            effects,
        }
    }
}
