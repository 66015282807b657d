use std::ops::BitOr;

use crate::entities::Turn;

/// Per-tick joystick bitmask shared by the human input surface and the
/// AI controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFlags(u8);

impl InputFlags {
    pub const NONE: InputFlags = InputFlags(0x00);
    pub const UP: InputFlags = InputFlags(0x01);
    pub const DOWN: InputFlags = InputFlags(0x02);
    pub const LEFT: InputFlags = InputFlags(0x04);
    pub const RIGHT: InputFlags = InputFlags(0x08);
    pub const FIRE: InputFlags = InputFlags(0x10);

    const MASK: u8 = 0x1f;

    pub fn from_bits(bits: u8) -> InputFlags {
        InputFlags(bits & InputFlags::MASK)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn up(self) -> bool {
        self.0 & InputFlags::UP.0 != 0
    }

    pub fn down(self) -> bool {
        self.0 & InputFlags::DOWN.0 != 0
    }

    pub fn left(self) -> bool {
        self.0 & InputFlags::LEFT.0 != 0
    }

    pub fn right(self) -> bool {
        self.0 & InputFlags::RIGHT.0 != 0
    }

    pub fn fire(self) -> bool {
        self.0 & InputFlags::FIRE.0 != 0
    }
}

impl BitOr for InputFlags {
    type Output = InputFlags;

    fn bitor(self, rhs: InputFlags) -> InputFlags {
        InputFlags(self.0 | rhs.0)
    }
}

/// The single action a tank performs on a processed tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Fire,
    Forward,
    Backward,
    Turn(Turn),
}

/// Collapses simultaneous joystick bits to one action. Priority is
/// fire > forward > backward > turn; the rest of the mask is ignored.
pub fn resolve_action(flags: InputFlags) -> Option<Action> {
    if flags.fire() {
        Some(Action::Fire)
    } else if flags.up() {
        Some(Action::Forward)
    } else if flags.down() {
        Some(Action::Backward)
    } else if flags.left() {
        Some(Action::Turn(Turn::Left))
    } else if flags.right() {
        Some(Action::Turn(Turn::Right))
    } else {
        None
    }
}
