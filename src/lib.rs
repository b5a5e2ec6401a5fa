//! Tank Arena - a tick-driven tank combat simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, AI, arena state)
//! - `settings`: Data-driven arena tuning
//!
//! Rendering, input devices and menus live in the embedding application.
//! It feeds a [`sim::TickInput`] and a monotonic timestamp into [`sim::tick`]
//! once per frame and reads back a [`sim::ArenaSnapshot`].

pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use std::time::Duration;

use glam::Vec2;

/// Arena configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Arena dimensions (pixels)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;
    /// Thickness of one wall tile in the standard layout
    pub const WALL_SIZE: f32 = 16.0;

    /// Tanks are square
    pub const TANK_SIZE: f32 = 32.0;
    /// Per-tick displacement of the player tank
    pub const PLAYER_SPEED: f32 = 2.0;
    /// Per-tick displacement of hostile tanks (a little slower than the player)
    pub const HOSTILE_SPEED: f32 = 1.5;

    pub const STARTING_LIVES: u32 = 3;
    pub const INVULNERABILITY_MS: u64 = 2_000;

    pub const DIRECTION_CHANGE_MS: u64 = 2_000;
    pub const SHOOT_INTERVAL_MS: u64 = 1_500;

    /// Projectiles
    pub const PROJECTILE_SPEED: f32 = 5.0;
    pub const PROJECTILE_SIZE: f32 = 8.0;
    /// How far past the arena edge a projectile may travel before it is dropped
    pub const OFFSCREEN_MARGIN: f32 = 10.0;

    /// Spawn scheduler
    pub const MIN_SPAWN_INTERVAL_MS: u64 = 3_000;
    pub const MAX_SPAWN_INTERVAL_MS: u64 = 8_000;
    pub const MAX_ENEMY_TANKS: usize = 8;
    pub const MIN_SPAWN_SEPARATION: f32 = 150.0;

    pub const SCORE_PER_KILL: u64 = 1;

    /// Transient effects
    pub const EFFECT_DURATION_MS: u64 = 200;
    pub const BRIEF_EFFECT_SIZE: f32 = 24.0;
    pub const STANDARD_EFFECT_SIZE: f32 = 64.0;
}

/// Unit vector for a facing angle in degrees (screen coordinates, y down)
#[inline]
pub fn heading_vector(degrees: f32) -> Vec2 {
    let radians = degrees.to_radians();
    Vec2::new(radians.cos(), radians.sin())
}

/// Time elapsed between two session timestamps, zero if `since` is in the future
#[inline]
pub fn elapsed(now: Duration, since: Duration) -> Duration {
    now.saturating_sub(since)
}

/// Milliseconds to a [`Duration`]
#[inline]
pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
