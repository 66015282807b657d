use serde::{Deserialize, Serialize};

use crate::config::TANK_SIZE;
use crate::game::InputFlags;
use crate::math::{point, Point, Rect};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TankId {
    P0,
    P1,
}

impl TankId {
    pub fn index(self) -> usize {
        match self {
            TankId::P0 => 0,
            TankId::P1 => 1,
        }
    }

    pub fn enemy(self) -> TankId {
        match self {
            TankId::P0 => TankId::P1,
            TankId::P1 => TankId::P0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TankId::P0 => "P0",
            TankId::P1 => "P1",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

/// One of the 16 discrete tank headings, 22.5 degrees per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    North,
    North15,
    NorthEast,
    North60,
    East,
    East15,
    EastSouth,
    East60,
    South,
    South15,
    SouthWest,
    South60,
    West,
    West15,
    WestNorth,
    West60,
}

impl Orientation {
    pub const COUNT: usize = 16;

    pub const ALL: [Orientation; 16] = [
        Orientation::North,
        Orientation::North15,
        Orientation::NorthEast,
        Orientation::North60,
        Orientation::East,
        Orientation::East15,
        Orientation::EastSouth,
        Orientation::East60,
        Orientation::South,
        Orientation::South15,
        Orientation::SouthWest,
        Orientation::South60,
        Orientation::West,
        Orientation::West15,
        Orientation::WestNorth,
        Orientation::West60,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Orientation {
        debug_assert!(index < Orientation::COUNT, "orientation index {index} out of range");
        Orientation::ALL[index % Orientation::COUNT]
    }

    /// One rotation step left or right, wrapping at the North/West60 boundary.
    pub fn turned(self, turn: Turn) -> Orientation {
        let index = self.index();
        match turn {
            Turn::Left => Orientation::from_index((index + Orientation::COUNT - 1) % Orientation::COUNT),
            Turn::Right => Orientation::from_index((index + 1) % Orientation::COUNT),
        }
    }

    pub fn opposite(self) -> Orientation {
        Orientation::from_index((self.index() + 8) % Orientation::COUNT)
    }

    /// Odd headings are the intermediate directions that take a settling
    /// tick before displacement begins.
    pub fn is_diagonal(self) -> bool {
        self.index() % 2 == 1
    }
}

#[derive(Clone, Debug)]
pub struct Tank {
    pub id: TankId,
    pub pos: Point,
    pub orientation: Orientation,
    pub stun_ticks: u32,
    pub hit_from: Orientation,
    pub fire_ready: bool,
    pub cooldown_ticks: u32,
    /// Set when a diagonal settling tick has been consumed; cleared by any
    /// actual displacement.
    pub diag_primed: bool,
    pub last_input: InputFlags,
    pub prev_input: InputFlags,
}

impl Tank {
    pub fn is_stunned(&self) -> bool {
        self.stun_ticks > 0
    }

    /// Screen footprint of the 8x8 tank sprite, anchored at `pos`.
    pub fn rect(&self) -> Rect {
        Rect {
            min: self.pos,
            max: point(self.pos.x + TANK_SIZE - 1, self.pos.y + TANK_SIZE - 1),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Missile {
    pub owner: TankId,
    pub pos: Point,
    /// Inherited from the owner at fire time and frozen for the flight.
    pub orientation: Orientation,
    pub exists: bool,
}

impl Missile {
    pub fn empty(owner: TankId) -> Missile {
        Missile {
            owner,
            pos: point(0, 0),
            orientation: Orientation::North,
            exists: false,
        }
    }
}
