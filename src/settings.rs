//! Arena tuning
//!
//! Every gameplay number the simulation uses lives here, so an embedding
//! application can ship alternative balance as a JSON file. Durations are
//! stored as whole milliseconds.

use std::path::Path;
use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::ms;

/// Errors raised while loading or validating [`Settings`]
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Arena tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Tanks ===
    pub tank_size: f32,
    pub player_speed: f32,
    pub hostile_speed: f32,
    pub starting_lives: u32,
    /// Damage is ignored for this long after a respawn
    pub invulnerability_ms: u64,
    pub direction_change_ms: u64,
    pub shoot_interval_ms: u64,

    // === Projectiles ===
    pub projectile_speed: f32,
    pub projectile_size: f32,
    pub offscreen_margin: f32,

    // === Spawning ===
    pub min_spawn_interval_ms: u64,
    pub max_spawn_interval_ms: u64,
    pub max_enemy_tanks: usize,
    /// Minimum distance between a new hostile and any live hostile
    pub min_spawn_separation: f32,
    /// Minimum distance between a new hostile and the player
    pub min_player_separation: f32,
    /// Hostiles placed at session start (top-left corners)
    pub initial_hostiles: Vec<Vec2>,
    /// Candidate positions for the spawn scheduler (top-left corners)
    pub spawn_points: Vec<Vec2>,

    // === Scoring ===
    pub score_per_kill: u64,

    // === Effects ===
    pub brief_effect_ms: u64,
    pub standard_effect_ms: u64,
    pub brief_effect_size: f32,
    pub standard_effect_size: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            tank_size: TANK_SIZE,
            player_speed: PLAYER_SPEED,
            hostile_speed: HOSTILE_SPEED,
            starting_lives: STARTING_LIVES,
            invulnerability_ms: INVULNERABILITY_MS,
            direction_change_ms: DIRECTION_CHANGE_MS,
            shoot_interval_ms: SHOOT_INTERVAL_MS,

            projectile_speed: PROJECTILE_SPEED,
            projectile_size: PROJECTILE_SIZE,
            offscreen_margin: OFFSCREEN_MARGIN,

            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
            max_spawn_interval_ms: MAX_SPAWN_INTERVAL_MS,
            max_enemy_tanks: MAX_ENEMY_TANKS,
            min_spawn_separation: MIN_SPAWN_SEPARATION,
            min_player_separation: MIN_SPAWN_SEPARATION,
            initial_hostiles: vec![
                Vec2::new(100.0, 100.0),
                Vec2::new(1100.0, 100.0),
                Vec2::new(100.0, 600.0),
                Vec2::new(640.0, 100.0),
            ],
            spawn_points: vec![
                Vec2::new(100.0, 100.0),
                Vec2::new(1100.0, 100.0),
                Vec2::new(100.0, 600.0),
                Vec2::new(1100.0, 600.0),
                Vec2::new(640.0, 50.0),
                Vec2::new(50.0, 360.0),
                Vec2::new(1200.0, 360.0),
                Vec2::new(640.0, 650.0),
            ],

            score_per_kill: SCORE_PER_KILL,

            brief_effect_ms: EFFECT_DURATION_MS,
            standard_effect_ms: EFFECT_DURATION_MS,
            brief_effect_size: BRIEF_EFFECT_SIZE,
            standard_effect_size: STANDARD_EFFECT_SIZE,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read, parse and validate a JSON settings file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load settings from `path`, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded arena settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Using default arena settings ({}): {err}", path.display());
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("tank_size", self.tank_size),
            ("player_speed", self.player_speed),
            ("hostile_speed", self.hostile_speed),
            ("projectile_speed", self.projectile_speed),
            ("projectile_size", self.projectile_size),
            ("brief_effect_size", self.brief_effect_size),
            ("standard_effect_size", self.standard_effect_size),
        ];
        for (name, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(SettingsError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.starting_lives == 0 {
            return Err(SettingsError::Invalid("starting_lives must be at least 1".into()));
        }
        if self.min_spawn_interval_ms > self.max_spawn_interval_ms {
            return Err(SettingsError::Invalid(format!(
                "min_spawn_interval_ms ({}) exceeds max_spawn_interval_ms ({})",
                self.min_spawn_interval_ms, self.max_spawn_interval_ms
            )));
        }
        if self.spawn_points.is_empty() {
            return Err(SettingsError::Invalid("spawn_points must not be empty".into()));
        }
        if self.offscreen_margin < 0.0
            || self.min_spawn_separation < 0.0
            || self.min_player_separation < 0.0
        {
            return Err(SettingsError::Invalid(
                "margins and separations must not be negative".into(),
            ));
        }
        Ok(())
    }

    pub fn invulnerability(&self) -> Duration {
        ms(self.invulnerability_ms)
    }

    pub fn direction_change_interval(&self) -> Duration {
        ms(self.direction_change_ms)
    }

    pub fn shoot_interval(&self) -> Duration {
        ms(self.shoot_interval_ms)
    }

    /// Arena center spawn point for a tank (top-left corner)
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(
            (self.arena_width - self.tank_size) / 2.0,
            (self.arena_height - self.tank_size) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.initial_hostiles.len(), 4);
        assert_eq!(settings.spawn_points.len(), 8);
        assert_eq!(settings.player_spawn(), Vec2::new(624.0, 344.0));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "max_enemy_tanks": 3, "player_speed": 4.0 }"#)
            .expect("valid settings");
        assert_eq!(settings.max_enemy_tanks, 3);
        assert_eq!(settings.player_speed, 4.0);
        assert_eq!(settings.arena_width, ARENA_WIDTH);
    }

    #[test]
    fn test_json_roundtrip_preserves_settings() {
        let settings = Settings::default();
        let json = settings.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("valid"), settings);
    }

    #[test]
    fn test_rejects_inverted_spawn_window() {
        let err = Settings::from_json(
            r#"{ "min_spawn_interval_ms": 9000, "max_spawn_interval_ms": 1000 }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_non_positive_sizes() {
        let settings = Settings {
            tank_size: 0.0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(SettingsError::Invalid(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load_or_default("/definitely/not/here.json");
        assert_eq!(settings, Settings::default());
    }
}
