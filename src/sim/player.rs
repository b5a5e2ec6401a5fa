//! The player's tank
//!
//! Lives, respawn and a short invulnerability window after each respawn.
//! Once the last life is lost the tank is exploded until an explicit reset.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::layout::ObstacleLayout;
use super::motion::{Motion, Steer};
use crate::elapsed;
use crate::settings::Settings;

/// Result of a damage attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invulnerable or already exploded; nothing changed
    Ignored,
    /// One life lost, tank respawned at the arena center
    Respawned { lives: u32 },
    /// Last life lost
    Exploded,
}

/// The player-controlled tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerTank {
    pub motion: Motion,
    lives: u32,
    exploded: bool,
    /// When the last respawn happened; `None` when no window is running
    respawn_at: Option<Duration>,
    invulnerability: Duration,
    speed: f32,
    starting_lives: u32,
    spawn_point: Vec2,
}

impl PlayerTank {
    pub fn new(settings: &Settings) -> Self {
        let spawn_point = settings.player_spawn();
        Self {
            motion: Motion::new(spawn_point, Vec2::splat(settings.tank_size)),
            lives: settings.starting_lives,
            exploded: false,
            respawn_at: None,
            invulnerability: settings.invulnerability(),
            speed: settings.player_speed,
            starting_lives: settings.starting_lives,
            spawn_point,
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn exploded(&self) -> bool {
        self.exploded
    }

    pub fn respawn_at(&self) -> Option<Duration> {
        self.respawn_at
    }

    pub fn bounds(&self) -> Aabb {
        self.motion.bounds()
    }

    pub fn center(&self) -> Vec2 {
        self.motion.center()
    }

    /// Damage is suppressed while the post-respawn window is running
    pub fn is_invulnerable(&self, now: Duration) -> bool {
        self.respawn_at
            .is_some_and(|at| elapsed(now, at) < self.invulnerability)
    }

    /// Apply a directional command (stopping keeps the current facing)
    pub fn steer(&mut self, steer: Steer) {
        if self.exploded {
            return;
        }
        self.motion.set_heading(steer.facing(), self.speed);
    }

    /// Move one tick; exploded tanks stay put
    pub fn update(&mut self, walls: &ObstacleLayout, arena: &Aabb) {
        if self.exploded {
            return;
        }
        self.motion.step(walls, arena);
    }

    pub fn take_damage(&mut self, now: Duration) -> DamageOutcome {
        if self.exploded || self.is_invulnerable(now) {
            return DamageOutcome::Ignored;
        }

        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.exploded = true;
            self.motion.vel = Vec2::ZERO;
            return DamageOutcome::Exploded;
        }

        self.motion.pos = self.spawn_point;
        self.respawn_at = Some(now);
        DamageOutcome::Respawned { lives: self.lives }
    }

    /// Full session restart: fresh lives, back at the center, no invulnerability
    pub fn reset(&mut self) {
        self.lives = self.starting_lives;
        self.exploded = false;
        self.respawn_at = None;
        self.motion.pos = self.spawn_point;
        self.motion.vel = Vec2::ZERO;
    }
}
