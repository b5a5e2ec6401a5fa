//! Static obstacle layout
//!
//! Built once per arena session and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use crate::consts::WALL_SIZE;

/// Immutable set of wall rectangles
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleLayout {
    walls: Vec<Aabb>,
}

impl ObstacleLayout {
    /// No walls at all (open field, bounded only by the arena edge)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_walls(walls: Vec<Aabb>) -> Self {
        Self { walls }
    }

    /// The classic map: a one-tile border plus a small labyrinth of interior walls
    ///
    /// Interior walls are placed in absolute coordinates designed for a
    /// 1280x720 arena; the border follows `width` and `height`.
    pub fn standard(width: f32, height: f32) -> Self {
        let t = WALL_SIZE;
        let walls = vec![
            // Border
            Aabb::new(0.0, 0.0, width, t),
            Aabb::new(0.0, height - t, width, t),
            Aabb::new(0.0, 0.0, t, height),
            Aabb::new(width - t, 0.0, t, height),
            // Vertical walls
            Aabb::new(300.0, 100.0, t, 32.0 * t),
            Aabb::new(800.0, 0.0, t, 38.0 * t),
            Aabb::new(992.0, 576.0, t, 8.0 * t),
            // Horizontal walls
            Aabb::new(400.0, 480.0, 25.0 * t, t),
            Aabb::new(800.0, 320.0, 20.0 * t, 2.0 * t),
        ];
        log::debug!("Standard layout: {} walls for {}x{} arena", walls.len(), width, height);
        Self { walls }
    }

    pub fn walls(&self) -> &[Aabb] {
        &self.walls
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// True if `bounds` overlaps any wall
    pub fn blocks(&self, bounds: &Aabb) -> bool {
        self.walls.iter().any(|wall| wall.intersects(bounds))
    }
}
