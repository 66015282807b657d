use crate::config::{LevelConfig, WrapBounds};
use crate::math::{Point, Rect};

/// Geometry oracle over the fixed obstacle table. Pure queries only; the
/// wall set is small enough that a linear scan beats any spatial index.
pub struct World {
    arena: Rect,
    walls: Vec<Rect>,
    wrap: WrapBounds,
}

impl World {
    pub fn new(level: &LevelConfig) -> World {
        World {
            arena: level.arena,
            walls: level.walls.clone(),
            wrap: level.wrap,
        }
    }

    pub fn is_in_bounds(&self, p: Point) -> bool {
        self.arena.contains(p)
    }

    pub fn is_wall(&self, p: Point) -> bool {
        self.walls.iter().any(|wall| wall.contains(p))
    }

    /// True when the playfield would report a collision at `p`: either a
    /// wall block or the arena border.
    pub fn blocks(&self, p: Point) -> bool {
        !self.is_in_bounds(p) || self.is_wall(p)
    }

    pub fn arena(&self) -> Rect {
        self.arena
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    pub fn wrap(&self) -> WrapBounds {
        self.wrap
    }
}
