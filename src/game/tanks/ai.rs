use rand::{rngs::SmallRng, Rng};

use crate::config::{AI_GRID_OFFSET, AI_WARMUP_TICKS};
use crate::entities::{Orientation, Tank};
use crate::game::{Game, InputFlags};
use crate::math::{point_sub, Point};

use super::movement;

/// Controller for the second tank's input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiMode {
    /// Line up on the opponent along one of the 16 headings and fire.
    Reactive,
    /// Uniformly random legal input every poll.
    Random,
}

impl Game {
    /// One input poll for tank 1, same bitmask shape as the joystick.
    /// The first polls of a round always drive forward so the tank
    /// leaves its spawn corner before the geometry takes over.
    pub(in crate::game) fn ai_input(&mut self) -> InputFlags {
        if self.ai_ticks < AI_WARMUP_TICKS {
            self.ai_ticks += 1;
            return InputFlags::UP;
        }
        match self.ai_mode {
            AiMode::Reactive => reactive_move(&self.tanks[1], &self.tanks[0]),
            AiMode::Random => random_move(&mut self.rng),
        }
    }
}

/// The AI reasons on a grid whose columns start at the playfield edge
/// rather than at the sprite-register origin. The translation cancels
/// in the row/column deltas, so it only matters to anyone logging or
/// inspecting the logical coordinates themselves.
fn to_logical(pos: Point) -> Point {
    point_sub(pos, AI_GRID_OFFSET)
}

/// Headings that can point from `me` toward the opponent, given which
/// quadrant the opponent sits in. The comparisons are half-open so the
/// axis-aligned cases land in exactly one quadrant.
fn quadrant_candidates(d_row: i32, d_col: i32) -> Option<[Orientation; 4]> {
    use Orientation::*;
    if d_row < 0 && d_col >= 0 {
        Some([North, North15, NorthEast, North60])
    } else if d_row >= 0 && d_col > 0 {
        Some([East, East15, EastSouth, East60])
    } else if d_row > 0 && d_col <= 0 {
        Some([South, South15, SouthWest, South60])
    } else if d_row <= 0 && d_col < 0 {
        Some([West, West15, WestNorth, West60])
    } else {
        None
    }
}

/// Fire if already facing the target heading, otherwise turn one step
/// along the shorter arc.
fn rotate_or_fire(current: Orientation, target: Orientation) -> InputFlags {
    let diff = (target.index() + Orientation::COUNT - current.index()) % Orientation::COUNT;
    match diff {
        0 => InputFlags::FIRE,
        1..=7 => InputFlags::RIGHT,
        _ => InputFlags::LEFT,
    }
}

/// Reactive controller: find a heading whose displacement line passes
/// exactly through the opponent's cell, then rotate onto it and fire.
/// With no collinear heading available the tank holds still.
fn reactive_move(me: &Tank, opponent: &Tank) -> InputFlags {
    let mine = to_logical(me.pos);
    let theirs = to_logical(opponent.pos);
    let d_row = theirs.y - mine.y;
    let d_col = theirs.x - mine.x;

    let Some(candidates) = quadrant_candidates(d_row, d_col) else {
        return InputFlags::NONE;
    };
    for candidate in candidates {
        let step = movement::forward_step(candidate);
        // Exact collinearity by integer cross product; no rounding.
        if step.x * d_row == step.y * d_col {
            return rotate_or_fire(me.orientation, candidate);
        }
    }
    InputFlags::NONE
}

fn random_move(rng: &mut SmallRng) -> InputFlags {
    const MOVES: [InputFlags; 5] = [
        InputFlags::UP,
        InputFlags::DOWN,
        InputFlags::LEFT,
        InputFlags::RIGHT,
        InputFlags::FIRE,
    ];
    MOVES[rng.random_range(0..MOVES.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LevelConfig;
    use crate::entities::TankId;
    use crate::math::point;
    use rand::SeedableRng;

    fn tank_at(id: TankId, x: i32, y: i32, orientation: Orientation) -> Tank {
        Tank {
            id,
            pos: point(x, y),
            orientation,
            stun_ticks: 0,
            hit_from: Orientation::North,
            fire_ready: true,
            cooldown_ticks: 0,
            diag_primed: false,
            last_input: InputFlags::NONE,
            prev_input: InputFlags::NONE,
        }
    }

    #[test]
    fn warm_up_drives_forward_for_the_first_polls() {
        let mut game = Game::new(LevelConfig::standard(), 1);
        for _ in 0..AI_WARMUP_TICKS {
            assert_eq!(game.ai_input(), InputFlags::UP);
        }
        // 51st poll switches to the reactive geometry.
        assert_ne!(game.ai_input(), InputFlags::UP);
    }

    #[test]
    fn facing_a_same_row_opponent_fires() {
        let me = tank_at(TankId::P1, 190, 131, Orientation::West);
        let opponent = tank_at(TankId::P0, 57, 131, Orientation::East);
        assert_eq!(reactive_move(&me, &opponent), InputFlags::FIRE);
    }

    #[test]
    fn one_step_clockwise_from_the_target_turns_right() {
        let me = tank_at(TankId::P1, 100, 131, Orientation::North60);
        let opponent = tank_at(TankId::P0, 180, 131, Orientation::West);
        assert_eq!(reactive_move(&me, &opponent), InputFlags::RIGHT);
    }

    #[test]
    fn far_side_of_the_circle_turns_left() {
        let me = tank_at(TankId::P1, 100, 131, Orientation::South15);
        let opponent = tank_at(TankId::P0, 180, 131, Orientation::West);
        assert_eq!(reactive_move(&me, &opponent), InputFlags::LEFT);
    }

    #[test]
    fn true_diagonal_lines_are_recognized() {
        // Opponent exactly on the north-east 45-degree line.
        let me = tank_at(TankId::P1, 100, 131, Orientation::NorthEast);
        let opponent = tank_at(TankId::P0, 120, 111, Orientation::West);
        assert_eq!(reactive_move(&me, &opponent), InputFlags::FIRE);
    }

    #[test]
    fn off_line_positions_produce_no_input() {
        // North quadrant but on none of the four displacement lines.
        let me = tank_at(TankId::P1, 100, 131, Orientation::North);
        let opponent = tank_at(TankId::P0, 105, 130, Orientation::West);
        assert_eq!(reactive_move(&me, &opponent), InputFlags::NONE);
    }

    #[test]
    fn shared_cell_produces_no_input() {
        let me = tank_at(TankId::P1, 100, 131, Orientation::North);
        let opponent = tank_at(TankId::P0, 100, 131, Orientation::West);
        assert_eq!(reactive_move(&me, &opponent), InputFlags::NONE);
    }

    #[test]
    fn random_mode_emits_exactly_one_legal_bit() {
        let mut rng = SmallRng::seed_from_u64(99);
        for _ in 0..200 {
            let flags = random_move(&mut rng);
            assert_eq!(flags.bits().count_ones(), 1);
            assert_eq!(flags, InputFlags::from_bits(flags.bits()));
        }
    }
}
