//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Timestamps come from the caller, never from the system clock
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod aabb;
pub mod effect;
pub mod hostile;
pub mod layout;
pub mod motion;
pub mod player;
pub mod projectile;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use aabb::{Aabb, intersects};
pub use effect::{Effect, EffectKind};
pub use hostile::HostileTank;
pub use layout::ObstacleLayout;
pub use motion::{BlockedAxes, Facing, Motion, Steer};
pub use player::{DamageOutcome, PlayerTank};
pub use projectile::{Owner, Projectile};
pub use snapshot::{ArenaSnapshot, EffectView, EntityView, ProjectileView};
pub use spawn::{SpawnAttempt, update_spawner};
pub use state::{ArenaEvent, ArenaPhase, ArenaState, KillCause, SessionClock};
pub use tick::{TickInput, tick};
