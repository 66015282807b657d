use crate::config::{WrapBounds, STUN_TICKS};
use crate::entities::{Orientation, Tank};

pub(super) fn apply_hit(tank: &mut Tank, from: Orientation) {
    tank.hit_from = from;
    tank.stun_ticks = STUN_TICKS;
}

/// Which side the hit came from, bucketed into the four spin reactions.
/// The East60/North60 memberships are deliberately swapped across the
/// north and east buckets.
enum HitQuadrant {
    North,
    South,
    West,
    East,
}

fn hit_quadrant(from: Orientation) -> HitQuadrant {
    use Orientation::*;
    match from {
        North | North15 | NorthEast | East60 => HitQuadrant::North,
        South | South15 | SouthWest | West60 => HitQuadrant::South,
        West | West15 | WestNorth | South60 => HitQuadrant::West,
        East | East15 | EastSouth | North60 => HitQuadrant::East,
    }
}

fn spin_right(orientation: Orientation) -> Orientation {
    // Both top wraparound cases land on North.
    match orientation {
        Orientation::WestNorth | Orientation::West60 => Orientation::North,
        _ => Orientation::from_index(orientation.index() + 2),
    }
}

fn spin_left(orientation: Orientation) -> Orientation {
    match orientation {
        Orientation::North | Orientation::North15 => Orientation::West60,
        _ => Orientation::from_index(orientation.index() - 2),
    }
}

/// One spin step of a stunned tank: drift one unit away from the hit,
/// rotate two steps, then apply the toroidal border correction that only
/// exists while spinning.
pub(super) fn spin_tick(tank: &mut Tank, wrap: WrapBounds) {
    debug_assert!(tank.stun_ticks > 0);
    match hit_quadrant(tank.hit_from) {
        HitQuadrant::North => {
            tank.pos.x += 1;
            tank.orientation = spin_right(tank.orientation);
        }
        HitQuadrant::South => {
            tank.pos.x -= 1;
            tank.orientation = spin_left(tank.orientation);
        }
        HitQuadrant::West => {
            tank.pos.y += 1;
            tank.orientation = spin_left(tank.orientation);
        }
        HitQuadrant::East => {
            tank.pos.y -= 1;
            tank.orientation = spin_left(tank.orientation);
        }
    }
    tank.stun_ticks -= 1;
    correct_border_wrap(tank, wrap);
}

pub(super) fn correct_border_wrap(tank: &mut Tank, wrap: WrapBounds) {
    if tank.pos.x <= wrap.x_low {
        tank.pos.x = wrap.x_high;
    } else if tank.pos.x >= wrap.x_high {
        tank.pos.x = wrap.x_low;
    }
    if tank.pos.y <= wrap.y_low {
        tank.pos.y = wrap.y_high;
    } else if tank.pos.y >= wrap.y_high {
        tank.pos.y = wrap.y_low;
    }
}
