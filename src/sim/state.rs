//! Arena state and core simulation types
//!
//! The arena exclusively owns every entity collection. Entities report their
//! own motion and timers; only the tick decides kills, damage and spawns.

use std::time::Duration;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::effect::{Effect, EffectKind};
use super::hostile::{HostileTank, roll_heading};
use super::layout::ObstacleLayout;
use super::motion::Facing;
use super::player::PlayerTank;
use super::projectile::{Owner, Projectile};
use super::spawn;
use crate::settings::Settings;

/// Whether ticks currently advance the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArenaPhase {
    Running,
    Paused,
}

/// How a hostile was destroyed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KillCause {
    /// Hit by a player projectile (scores)
    Projectile,
    /// Collided with the player's tank (no score)
    Ramming,
}

/// Something that happened during the last tick, for sound and UI cues
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArenaEvent {
    ProjectileFired { id: u32, owner: Owner },
    HostileSpawned { id: u32, pos: Vec2 },
    SpawnRejected { candidate: Vec2 },
    HostileDestroyed { id: u32, cause: KillCause },
    PlayerDamaged { lives: u32 },
    PlayerExploded,
    Paused,
    Resumed,
    Restarted,
}

/// Maps the embedding's monotonic timestamps onto simulation time
///
/// Time spent paused is subtracted, so timers neither advance nor fire in a
/// burst across a pause.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionClock {
    paused_total: Duration,
    paused_at: Option<Duration>,
}

impl SessionClock {
    pub fn sim_time(&self, now: Duration) -> Duration {
        let frozen = self.paused_at.unwrap_or(now).min(now);
        frozen.saturating_sub(self.paused_total)
    }

    pub fn pause(&mut self, now: Duration) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    pub fn resume(&mut self, now: Duration) {
        if let Some(at) = self.paused_at.take() {
            self.paused_total += now.saturating_sub(at);
        }
    }
}

/// Complete arena state (deterministic for a given seed, inputs and timestamps)
#[derive(Debug, Clone)]
pub struct ArenaState {
    pub settings: Settings,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub phase: ArenaPhase,
    pub clock: SessionClock,
    /// Static walls, fixed for the whole session
    pub walls: ObstacleLayout,
    /// Outer arena rectangle
    pub arena: Aabb,
    pub player: PlayerTank,
    /// Live hostiles in spawn order
    pub hostiles: Vec<HostileTank>,
    pub player_projectiles: Vec<Projectile>,
    pub hostile_projectiles: Vec<Projectile>,
    pub effects: Vec<Effect>,
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulation time of the most recent tick
    pub sim_now: Duration,
    /// Simulation time of the next spawn attempt
    pub next_spawn_at: Duration,
    /// Events from the most recent tick
    pub events: Vec<ArenaEvent>,
    pub(crate) game_over_reported: bool,
    next_id: u32,
}

impl ArenaState {
    /// Default settings on the standard map
    pub fn new(seed: u64) -> Self {
        Self::with_settings(Settings::default(), seed)
    }

    /// Custom settings on the standard map
    pub fn with_settings(settings: Settings, seed: u64) -> Self {
        let walls = ObstacleLayout::standard(settings.arena_width, settings.arena_height);
        Self::with_layout(settings, walls, seed)
    }

    /// Custom settings and walls; the session starts at time zero
    pub fn with_layout(settings: Settings, walls: ObstacleLayout, seed: u64) -> Self {
        if let Err(e) = settings.validate() {
            log::warn!("Arena built from questionable settings: {e}");
        }

        let arena = Aabb::new(0.0, 0.0, settings.arena_width, settings.arena_height);
        let player = PlayerTank::new(&settings);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: ArenaPhase::Running,
            clock: SessionClock::default(),
            walls,
            arena,
            player,
            hostiles: Vec::new(),
            player_projectiles: Vec::new(),
            hostile_projectiles: Vec::new(),
            effects: Vec::new(),
            score: 0,
            time_ticks: 0,
            sim_now: Duration::ZERO,
            next_spawn_at: Duration::ZERO,
            events: Vec::new(),
            game_over_reported: false,
            next_id: 1,
            settings,
        };
        state.populate(Duration::ZERO);
        log::info!(
            "Arena session started (seed {}, {} walls, {} hostiles)",
            seed,
            state.walls.walls().len(),
            state.hostiles.len()
        );
        state
    }

    /// Initial hostiles plus the first spawn deadline
    fn populate(&mut self, now: Duration) {
        let initial = self.settings.initial_hostiles.clone();
        for pos in initial {
            let heading = roll_heading(&mut self.rng);
            self.add_hostile(pos, heading, now);
        }
        spawn::schedule_next(self, now);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place a hostile at `pos` (top-left) with its timers starting at simulation time `now`
    pub fn add_hostile(&mut self, pos: Vec2, heading: Option<Facing>, now: Duration) -> u32 {
        let id = self.next_entity_id();
        let hostile = HostileTank::new(id, pos, &self.settings, now).with_heading(heading);
        self.hostiles.push(hostile);
        id
    }

    /// Launch a projectile from `origin` (shooter center) along `facing`
    pub fn fire_projectile(&mut self, owner: Owner, origin: Vec2, facing: Facing) -> u32 {
        let id = self.next_entity_id();
        let projectile = Projectile::fire(
            id,
            owner,
            origin,
            facing,
            self.settings.projectile_speed,
            self.settings.projectile_size,
        );
        match owner {
            Owner::Player => self.player_projectiles.push(projectile),
            Owner::Hostile => self.hostile_projectiles.push(projectile),
        }
        self.events.push(ArenaEvent::ProjectileFired { id, owner });
        id
    }

    pub fn add_effect(&mut self, center: Vec2, kind: EffectKind) {
        self.effects.push(Effect::new(center, kind, &self.settings));
    }

    /// Drop destroyed hostiles, keeping spawn order
    pub fn sweep_hostiles(&mut self) {
        self.hostiles.retain(|h| h.alive);
    }

    pub fn live_hostiles(&self) -> usize {
        self.hostiles.iter().filter(|h| h.alive).count()
    }

    /// The player is out of lives
    pub fn is_game_over(&self) -> bool {
        self.player.exploded()
    }

    pub fn is_paused(&self) -> bool {
        self.phase == ArenaPhase::Paused
    }

    /// Freeze the simulation; `now` is the embedding's monotonic timestamp
    pub fn pause(&mut self, now: Duration) {
        if self.is_paused() {
            return;
        }
        self.clock.pause(now);
        self.phase = ArenaPhase::Paused;
        self.events.push(ArenaEvent::Paused);
        log::info!("Arena paused at tick {}", self.time_ticks);
    }

    pub fn resume(&mut self, now: Duration) {
        if !self.is_paused() {
            return;
        }
        self.clock.resume(now);
        self.phase = ArenaPhase::Running;
        self.events.push(ArenaEvent::Resumed);
        log::info!("Arena resumed at tick {}", self.time_ticks);
    }

    /// Discard hostiles, projectiles and effects and start the session over
    ///
    /// Walls and the RNG stream carry over; the player gets a full reset.
    pub fn restart(&mut self, now: Duration) {
        self.clock.resume(now);
        self.phase = ArenaPhase::Running;
        let now = self.clock.sim_time(now);

        self.player.reset();
        self.hostiles.clear();
        self.player_projectiles.clear();
        self.hostile_projectiles.clear();
        self.effects.clear();
        self.score = 0;
        self.game_over_reported = false;
        self.sim_now = now;
        self.populate(now);

        self.events.push(ArenaEvent::Restarted);
        log::info!("Arena restarted ({} hostiles)", self.hostiles.len());
    }

    /// Take the events recorded by the most recent tick
    pub fn drain_events(&mut self) -> Vec<ArenaEvent> {
        std::mem::take(&mut self.events)
    }
}
