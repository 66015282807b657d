use crate::entities::{Orientation, Tank, Turn};
use crate::math::{point, point_add, point_neg, Point};

/// Forward displacement per heading. The diagonal entries are asymmetric
/// on purpose and must not be normalized to true 45-degree steps.
const FORWARD_STEPS: [Point; 16] = [
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

pub(super) fn forward_step(orientation: Orientation) -> Point {
    FORWARD_STEPS[orientation.index()]
}

pub(super) fn turn_tank(tank: &mut Tank, turn: Turn) {
    if tank.is_stunned() {
        return;
    }
    tank.orientation = tank.orientation.turned(turn);
}

pub(super) fn move_forward(tank: &mut Tank) {
    tank.diag_primed = false;
    tank.pos = point_add(tank.pos, forward_step(tank.orientation));
}

pub(super) fn move_backward(tank: &mut Tank) {
    tank.diag_primed = false;
    tank.pos = point_add(tank.pos, point_neg(forward_step(tank.orientation)));
}

/// Movement input gate. On a diagonal heading the first move input is
/// consumed as a settling tick; displacement starts on the next one.
pub(super) fn apply_move_input(tank: &mut Tank, backward: bool) {
    if tank.is_stunned() {
        return;
    }
    if tank.orientation.is_diagonal() && !tank.diag_primed {
        tank.diag_primed = true;
        return;
    }
    if backward {
        move_backward(tank);
    } else {
        move_forward(tank);
    }
}
