//! Shared motion component for tanks
//!
//! Movement is axis-decomposed: the horizontal and vertical displacements are
//! tested against the walls independently, so a tank blocked on one axis
//! still slides along the other.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::layout::ObstacleLayout;

/// One of the four axis-aligned facings (screen coordinates, y down)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    /// 0°
    #[default]
    Right,
    /// 90°
    Down,
    /// 180°
    Left,
    /// 270°
    Up,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::Right, Facing::Down, Facing::Left, Facing::Up];

    pub fn degrees(self) -> f32 {
        match self {
            Facing::Right => 0.0,
            Facing::Down => 90.0,
            Facing::Left => 180.0,
            Facing::Up => 270.0,
        }
    }

    /// Unit step along this facing
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Right => Vec2::X,
            Facing::Down => Vec2::Y,
            Facing::Left => Vec2::NEG_X,
            Facing::Up => Vec2::NEG_Y,
        }
    }

    pub fn opposite(self) -> Facing {
        match self {
            Facing::Right => Facing::Left,
            Facing::Down => Facing::Up,
            Facing::Left => Facing::Right,
            Facing::Up => Facing::Down,
        }
    }

    /// Facing that matches a non-zero axis-aligned velocity
    pub fn from_velocity(vel: Vec2) -> Option<Facing> {
        if vel.x > 0.0 {
            Some(Facing::Right)
        } else if vel.x < 0.0 {
            Some(Facing::Left)
        } else if vel.y > 0.0 {
            Some(Facing::Down)
        } else if vel.y < 0.0 {
            Some(Facing::Up)
        } else {
            None
        }
    }
}

/// Directional command from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Steer {
    #[default]
    Stop,
    Up,
    Down,
    Left,
    Right,
}

impl Steer {
    pub fn facing(self) -> Option<Facing> {
        match self {
            Steer::Stop => None,
            Steer::Up => Some(Facing::Up),
            Steer::Down => Some(Facing::Down),
            Steer::Left => Some(Facing::Left),
            Steer::Right => Some(Facing::Right),
        }
    }
}

/// Which axes were blocked during a motion step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockedAxes {
    pub x: bool,
    pub y: bool,
}

impl BlockedAxes {
    pub fn any(self) -> bool {
        self.x || self.y
    }
}

/// Position, velocity, footprint and facing of a moving tank
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motion {
    /// Top-left corner
    pub pos: Vec2,
    /// Per-tick displacement
    pub vel: Vec2,
    pub size: Vec2,
    pub facing: Facing,
}

impl Motion {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            facing: Facing::default(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        Aabb::at(self.pos, self.size)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Drive along `heading` at `speed`, or stop in place keeping the current facing
    pub fn set_heading(&mut self, heading: Option<Facing>, speed: f32) {
        match heading {
            Some(facing) => {
                self.vel = facing.unit() * speed;
                self.facing = facing;
            }
            None => self.vel = Vec2::ZERO,
        }
    }

    /// Flip the velocity and turn to match; a stationary tank keeps its facing
    pub fn reverse(&mut self) {
        self.vel = -self.vel;
        if let Some(facing) = Facing::from_velocity(self.vel) {
            self.facing = facing;
        }
    }

    /// Advance one tick, applying each axis only if it stays clear of walls and inside `arena`
    pub fn step(&mut self, walls: &ObstacleLayout, arena: &Aabb) -> BlockedAxes {
        let mut blocked = BlockedAxes::default();

        if self.vel.x != 0.0 {
            let moved = Aabb::new(self.pos.x + self.vel.x, self.pos.y, self.size.x, self.size.y);
            blocked.x = !arena.contains(&moved) || walls.blocks(&moved);
        }
        if self.vel.y != 0.0 {
            let moved = Aabb::new(self.pos.x, self.pos.y + self.vel.y, self.size.x, self.size.y);
            blocked.y = !arena.contains(&moved) || walls.blocks(&moved);
        }

        if self.vel.x != 0.0 && !blocked.x {
            self.pos.x += self.vel.x;
        }
        if self.vel.y != 0.0 && !blocked.y {
            self.pos.y += self.vel.y;
        }
        blocked
    }
}
