//! Transient explosion markers
//!
//! Purely cosmetic bookkeeping: an effect has no physics, it only records
//! where a hit happened and reports when its display time is over.

use std::time::Duration;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::elapsed;
use crate::settings::Settings;

/// Display class of an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Small puff (projectile hitting a wall)
    Brief,
    /// Full explosion (kills and player hits)
    Standard,
}

impl EffectKind {
    pub fn size(self, settings: &Settings) -> f32 {
        match self {
            EffectKind::Brief => settings.brief_effect_size,
            EffectKind::Standard => settings.standard_effect_size,
        }
    }

    pub fn duration(self, settings: &Settings) -> Duration {
        match self {
            EffectKind::Brief => crate::ms(settings.brief_effect_ms),
            EffectKind::Standard => crate::ms(settings.standard_effect_ms),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Effect {
    pub center: Vec2,
    pub kind: EffectKind,
    duration: Duration,
    /// Set on the first tick the effect is aged
    started_at: Option<Duration>,
    expired: bool,
}

impl Effect {
    pub fn new(center: Vec2, kind: EffectKind, settings: &Settings) -> Self {
        Self {
            center,
            kind,
            duration: kind.duration(settings),
            started_at: None,
            expired: false,
        }
    }

    pub fn update(&mut self, now: Duration) {
        if self.expired {
            return;
        }
        let started = *self.started_at.get_or_insert(now);
        if elapsed(now, started) >= self.duration {
            self.expired = true;
        }
    }

    pub fn expired(&self) -> bool {
        self.expired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ms;

    #[test]
    fn test_effect_starts_lazily() {
        let settings = Settings::default();
        let mut e = Effect::new(Vec2::ZERO, EffectKind::Standard, &settings);

        // First update anchors the clock, however late it comes
        e.update(ms(10_000));
        assert!(!e.expired());
        e.update(ms(10_199));
        assert!(!e.expired());
        e.update(ms(10_200));
        assert!(e.expired());
    }

    #[test]
    fn test_kind_sizes() {
        let settings = Settings::default();
        assert_eq!(EffectKind::Brief.size(&settings), 24.0);
        assert_eq!(EffectKind::Standard.size(&settings), 64.0);
        assert_eq!(EffectKind::Brief.duration(&settings), ms(200));
    }
}
