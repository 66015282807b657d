use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::Orientation;
use crate::math::{point, Point, Rect};

/// Tank actions are processed on every 6th tick of the frame loop.
pub const ACTION_FRAME_INTERVAL: u32 = 6;
/// Ticks a tank must wait between shots, counted on every frame and
/// independent of whether the missile is still in flight.
pub const FIRE_COOLDOWN_TICKS: u32 = 60;
/// Action frames spent spinning after a confirmed hit.
pub const STUN_TICKS: u32 = 12;
/// Bounded wall-correction magnitude: the opposite of the last intended
/// move is repeated this many times, not until clear.
pub const WALL_NUDGE_STEPS: u32 = 4;
/// Scores start at the display baseline and count up to the win mark,
/// so a round is 9 confirmed hits.
pub const BASE_SCORE: i32 = 16;
pub const WIN_SCORE: i32 = 25;
/// Action frames during which the AI drives forward before engaging.
pub const AI_WARMUP_TICKS: u32 = 50;
/// Length of the explosion-flash animation in action frames.
pub const FLASH_TICKS: u32 = 12;
/// Tank sprites are 8x8 cells.
pub const TANK_SIZE: i32 = 8;
/// Offset between the pixel frame and the logical grid frame the AI
/// reasons in.
pub const AI_GRID_OFFSET: Point = point(48, 0);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub pos: Point,
    pub orientation: Orientation,
}

/// Teleport thresholds for the toroidal wraparound applied while a tank
/// is spinning from a hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapBounds {
    pub x_low: i32,
    pub x_high: i32,
    pub y_low: i32,
    pub y_high: i32,
}

/// Static level geometry handed to the core once at match start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub arena: Rect,
    pub walls: Vec<Rect>,
    pub wrap: WrapBounds,
    pub spawns: [SpawnPoint; 2],
}

impl LevelConfig {
    /// The stock six-block arena with its border bounds and spawn
    /// positions.
    pub fn standard() -> LevelConfig {
        LevelConfig {
            arena: Rect::new(52, 55, 196, 208),
            walls: vec![
                Rect::new(60, 104, 76, 159),
                Rect::new(88, 120, 108, 143),
                Rect::new(140, 120, 160, 143),
                Rect::new(116, 80, 132, 111),
                Rect::new(116, 152, 132, 183),
                Rect::new(172, 104, 188, 159),
            ],
            wrap: WrapBounds {
                x_low: 50,
                x_high: 195,
                y_low: 57,
                y_high: 207,
            },
            spawns: [
                SpawnPoint {
                    pos: point(57, 131),
                    orientation: Orientation::East,
                },
                SpawnPoint {
                    pos: point(190, 131),
                    orientation: Orientation::West,
                },
            ],
        }
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        if !self.arena.is_well_formed() {
            return Err(LevelError::InvertedArena);
        }
        for (index, wall) in self.walls.iter().enumerate() {
            if !wall.is_well_formed() {
                return Err(LevelError::InvertedWall(index));
            }
            if !self.arena.contains_rect(wall) {
                return Err(LevelError::WallOutsideArena(index));
            }
        }
        for (index, spawn) in self.spawns.iter().enumerate() {
            if !self.arena.contains(spawn.pos) {
                return Err(LevelError::SpawnOutOfBounds(index));
            }
            if self.walls.iter().any(|wall| wall.contains(spawn.pos)) {
                return Err(LevelError::SpawnInsideWall(index));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LevelError {
    InvertedArena,
    InvertedWall(usize),
    WallOutsideArena(usize),
    SpawnOutOfBounds(usize),
    SpawnInsideWall(usize),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::InvertedArena => write!(f, "arena rectangle has inverted bounds"),
            LevelError::InvertedWall(i) => write!(f, "wall {i} has inverted bounds"),
            LevelError::WallOutsideArena(i) => write!(f, "wall {i} extends outside the arena"),
            LevelError::SpawnOutOfBounds(i) => write!(f, "spawn {i} lies outside the arena"),
            LevelError::SpawnInsideWall(i) => write!(f, "spawn {i} lies inside a wall"),
        }
    }
}

impl Error for LevelError {}
