use log::debug;

use crate::config::FIRE_COOLDOWN_TICKS;
use crate::entities::{Missile, Orientation, Tank};
use crate::game::render::{AudioSink, RenderSink};
use crate::math::{point, point_add, Point};

/// Muzzle-tip offset from the tank anchor, per heading. The missile
/// spawns at the end of the barrel so it cannot hit its own tank.
const MUZZLE_OFFSETS: [Point; 16] = [
    point(4, 0), // North
    point(5, 0), // North15
    point(7, 0), // NorthEast
    point(7, 2), // North60
    point(7, 4), // East
    point(7, 5), // East15
    point(7, 7), // EastSouth
    point(5, 7), // East60
    point(4, 7), // South
    point(2, 7), // South15
    point(0, 7), // SouthWest
    point(0, 5), // South60
    point(0, 4), // West
    point(0, 2), // West15
    point(0, 0), // WestNorth
    point(2, 2), // West60
];

/// Missile velocity per heading, one application per tick.
const MISSILE_STEPS: [Point; 16] = [
    point(0, -1),  // North
    point(1, -2),  // North15
    point(1, -1),  // NorthEast
    point(2, -1),  // North60
    point(1, 0),   // East
    point(2, 1),   // East15
    point(1, 1),   // EastSouth
    point(1, 2),   // East60
    point(0, 1),   // South
    point(-1, 2),  // South15
    point(-1, 1),  // SouthWest
    point(-2, 1),  // South60
    point(-1, 0),  // West
    point(-2, -1), // West15
    point(-1, -1), // WestNorth
    point(-1, -2), // West60
];

pub(super) fn muzzle_offset(orientation: Orientation) -> Point {
    MUZZLE_OFFSETS[orientation.index()]
}

pub(super) fn missile_step(orientation: Orientation) -> Point {
    MISSILE_STEPS[orientation.index()]
}

/// Launches the tank's missile. No-op while the previous missile is in
/// flight, while fire is cooling down, or while the tank is stunned.
pub(super) fn fire(tank: &mut Tank, missile: &mut Missile, audio: &mut dyn AudioSink) {
    if missile.exists || !tank.fire_ready || tank.is_stunned() {
        return;
    }
    missile.pos = point_add(tank.pos, muzzle_offset(tank.orientation));
    missile.orientation = tank.orientation;
    missile.exists = true;
    tank.fire_ready = false;
    tank.cooldown_ticks = 0;
    debug!(
        "{} fired {:?} from ({}, {})",
        tank.id.name(),
        missile.orientation,
        missile.pos.x,
        missile.pos.y
    );
    audio.play_fire_sound(tank.id);
}

/// Advances the fire-cooldown window. Runs every frame; the counter is
/// independent of whether the missile is still flying.
pub(in crate::game) fn tick_cooldown(tank: &mut Tank) {
    if tank.fire_ready {
        return;
    }
    tank.cooldown_ticks += 1;
    if tank.cooldown_ticks >= FIRE_COOLDOWN_TICKS {
        tank.fire_ready = true;
        tank.cooldown_ticks = 0;
    }
}

/// Moves every in-flight missile one velocity step and redraws it. When
/// both missiles occupy the same cell the shared footprint is flagged;
/// that is purely cosmetic and never triggers collision logic.
pub(in crate::game) fn advance_missiles(missiles: &mut [Missile; 2], render: &mut dyn RenderSink) {
    for missile in missiles.iter_mut() {
        if missile.exists {
            missile.pos = point_add(missile.pos, missile_step(missile.orientation));
        }
    }
    let overlapping =
        missiles[0].exists && missiles[1].exists && missiles[0].pos == missiles[1].pos;
    for missile in missiles.iter() {
        if missile.exists {
            render.draw_missile_frame(missile.owner, missile.pos, overlapping);
        }
    }
}
