//! Straight-line projectiles
//!
//! A projectile only knows how to move and whether it has left the arena.
//! Hits are resolved by the tick, which owns both sides' collections.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::motion::Facing;
use crate::heading_vector;

/// Which side fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Hostile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub owner: Owner,
    /// Center point
    pub pos: Vec2,
    /// Constant per-tick displacement
    pub vel: Vec2,
    pub size: Vec2,
    /// Set when the projectile hits something or leaves the arena; swept at the end of its pass
    pub spent: bool,
}

impl Projectile {
    /// Fire from `origin` (the shooter's center) along `facing`
    pub fn fire(id: u32, owner: Owner, origin: Vec2, facing: Facing, speed: f32, size: f32) -> Self {
        Self {
            id,
            owner,
            pos: origin,
            vel: heading_vector(facing.degrees()) * speed,
            size: Vec2::splat(size),
            spent: false,
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::centered(self.pos, self.size)
    }

    /// True once the projectile is entirely outside `arena` grown by `margin`
    pub fn is_offscreen(&self, arena: &Aabb, margin: f32) -> bool {
        !arena.expanded(margin).intersects(&self.bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_along_facing() {
        let mut p = Projectile::fire(1, Owner::Player, Vec2::new(100.0, 100.0), Facing::Up, 5.0, 8.0);
        p.advance();
        assert!((p.pos - Vec2::new(100.0, 95.0)).length() < 1e-4);
        assert_eq!(p.bounds().size(), Vec2::splat(8.0));
    }

    #[test]
    fn test_offscreen_with_margin() {
        let arena = Aabb::new(0.0, 0.0, 1280.0, 720.0);
        let mut p = Projectile::fire(1, Owner::Hostile, Vec2::new(2.0, 300.0), Facing::Left, 5.0, 8.0);
        assert!(!p.is_offscreen(&arena, 10.0));

        // Still within the margin
        p.pos.x = -12.0;
        assert!(!p.is_offscreen(&arena, 10.0));

        p.pos.x = -15.0;
        assert!(p.is_offscreen(&arena, 10.0));
    }
}
