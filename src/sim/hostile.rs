//! Autonomous hostile tanks
//!
//! Each hostile wanders on a timer (one of four directions or idle), turns
//! around when it runs into something, and fires on its own cadence.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::layout::ObstacleLayout;
use super::motion::{Facing, Motion};
use crate::elapsed;
use crate::settings::Settings;

/// Pick one of the five wander states uniformly: four headings or idle (`None`)
pub fn roll_heading(rng: &mut impl Rng) -> Option<Facing> {
    match rng.random_range(0..5) {
        0 => Some(Facing::Right),
        1 => Some(Facing::Left),
        2 => Some(Facing::Down),
        3 => Some(Facing::Up),
        _ => None,
    }
}

/// A computer-controlled tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostileTank {
    pub id: u32,
    pub motion: Motion,
    /// False once destroyed; dead hostiles are swept and never reused
    pub alive: bool,
    last_direction_change: Duration,
    last_shot: Duration,
    /// Blocked on the previous tick (reversal fires only on the rising edge)
    was_blocked: bool,
    speed: f32,
    direction_change_interval: Duration,
    shoot_interval: Duration,
}

impl HostileTank {
    /// New hostile at `pos`, idle, with both timers starting at `now`
    pub fn new(id: u32, pos: Vec2, settings: &Settings, now: Duration) -> Self {
        Self {
            id,
            motion: Motion::new(pos, Vec2::splat(settings.tank_size)),
            alive: true,
            last_direction_change: now,
            last_shot: now,
            was_blocked: false,
            speed: settings.hostile_speed,
            direction_change_interval: settings.direction_change_interval(),
            shoot_interval: settings.shoot_interval(),
        }
    }

    pub fn with_heading(mut self, heading: Option<Facing>) -> Self {
        self.set_heading(heading);
        self
    }

    /// Drive along `heading`; an idle hostile stops and faces right
    pub fn set_heading(&mut self, heading: Option<Facing>) {
        self.motion.set_heading(heading, self.speed);
        if heading.is_none() {
            self.motion.facing = Facing::Right;
        }
    }

    pub fn bounds(&self) -> Aabb {
        self.motion.bounds()
    }

    pub fn center(&self) -> Vec2 {
        self.motion.center()
    }

    pub fn is_blocked(&self) -> bool {
        self.was_blocked
    }

    pub fn destroy(&mut self) {
        self.alive = false;
    }

    /// Wander timer, movement, and reversal on the tick it first gets blocked
    pub fn update(
        &mut self,
        now: Duration,
        walls: &ObstacleLayout,
        arena: &Aabb,
        rng: &mut impl Rng,
    ) {
        if !self.alive {
            return;
        }

        if elapsed(now, self.last_direction_change) >= self.direction_change_interval {
            let heading = roll_heading(rng);
            self.set_heading(heading);
            self.last_direction_change = now;
        }

        let blocked = self.motion.step(walls, arena).any();
        if blocked && !self.was_blocked {
            self.motion.reverse();
        }
        self.was_blocked = blocked;
    }

    /// True once per shoot interval; resets the cadence timer when it fires
    pub fn ready_to_fire(&mut self, now: Duration) -> bool {
        if !self.alive {
            return false;
        }
        if elapsed(now, self.last_shot) >= self.shoot_interval {
            self.last_shot = now;
            return true;
        }
        false
    }
}
