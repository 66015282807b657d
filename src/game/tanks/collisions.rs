use log::debug;

use crate::config::WALL_NUDGE_STEPS;
use crate::entities::TankId;
use crate::game::render::{AudioSink, RenderSink};
use crate::game::Game;

use super::{movement, stun};

/// Edge-triggered overlap flags, one per detector pair, mirroring the
/// hardware collision registers. Latched from fresh geometry each tick
/// and explicitly cleared after every pass whether or not they fired.
#[derive(Clone, Copy, Debug, Default)]
pub(in crate::game) struct CollisionLatches {
    tank_wall: [bool; 2],
    missile_wall: [bool; 2],
    missile_tank: [bool; 2],
}

impl CollisionLatches {
    pub(in crate::game) fn clear(&mut self) {
        *self = CollisionLatches::default();
    }
}

impl Game {
    /// Collision pass, run once per tick after movement and missile
    /// advancement. The order is a committed convention: tank 0's wall
    /// correction before tank 1's, then missile 1 before missile 0 for
    /// both the wall and the tank checks. Score timing in simultaneous
    /// mutual-kill ticks depends on it.
    pub(in crate::game) fn resolve_collisions(
        &mut self,
        render: &mut dyn RenderSink,
        audio: &mut dyn AudioSink,
    ) {
        self.latch_collisions();

        self.nudge_tank_off_wall(TankId::P0);
        self.nudge_tank_off_wall(TankId::P1);
        self.retire_missile_on_wall(TankId::P1, render);
        self.retire_missile_on_wall(TankId::P0, render);
        self.score_missile_hit(TankId::P1, render, audio);
        self.score_missile_hit(TankId::P0, render, audio);

        self.latches.clear();
    }

    fn latch_collisions(&mut self) {
        for index in 0..2 {
            let enemy = 1 - index;
            self.latches.tank_wall[index] = self.world.blocks(self.tanks[index].pos);
            self.latches.missile_wall[index] =
                self.missiles[index].exists && self.world.blocks(self.missiles[index].pos);
            self.latches.missile_tank[index] = self.missiles[index].exists
                && self.tanks[enemy].rect().contains(self.missiles[index].pos);
        }
    }

    /// Bounded wall correction: repeat the opposite of the previous
    /// tick's intended move a fixed number of times. The detector only
    /// says that an overlap happened, not against which edge, so the
    /// direction comes from the one-tick-stale input cache. A tank may
    /// still overlap afterwards; that residue is accepted.
    fn nudge_tank_off_wall(&mut self, id: TankId) {
        let index = id.index();
        if !self.latches.tank_wall[index] {
            return;
        }
        let prev = self.tanks[index].prev_input;
        if prev.up() {
            for _ in 0..WALL_NUDGE_STEPS {
                movement::move_backward(&mut self.tanks[index]);
            }
        } else if prev.down() {
            for _ in 0..WALL_NUDGE_STEPS {
                movement::move_forward(&mut self.tanks[index]);
            }
        } else {
            return;
        }
        debug!(
            "{} nudged off a wall to ({}, {})",
            id.name(),
            self.tanks[index].pos.x,
            self.tanks[index].pos.y
        );
    }

    fn retire_missile_on_wall(&mut self, owner: TankId, render: &mut dyn RenderSink) {
        let index = owner.index();
        if !self.latches.missile_wall[index] {
            return;
        }
        self.missiles[index].exists = false;
        render.clear_cell(self.missiles[index].pos);
    }

    fn score_missile_hit(
        &mut self,
        shooter: TankId,
        render: &mut dyn RenderSink,
        audio: &mut dyn AudioSink,
    ) {
        let index = shooter.index();
        if !self.latches.missile_tank[index] {
            return;
        }
        let victim = shooter.enemy();
        stun::apply_hit(
            &mut self.tanks[victim.index()],
            self.missiles[index].orientation,
        );
        self.missiles[index].exists = false;
        render.clear_cell(self.missiles[index].pos);
        self.record_hit(shooter, render);
        self.flash_ticks = 0;
        audio.play_hit_sound();
        debug!("{} hit {}", shooter.name(), victim.name());
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{LevelConfig, SpawnPoint, WrapBounds, STUN_TICKS, WALL_NUDGE_STEPS};
    use crate::entities::{Orientation, TankId};
    use crate::game::{Game, InputFlags, NullSink};
    use crate::math::{point, Rect};

    fn open_level() -> LevelConfig {
        LevelConfig {
            arena: Rect::new(0, 0, 400, 400),
            walls: Vec::new(),
            wrap: WrapBounds {
                x_low: 2,
                x_high: 398,
                y_low: 2,
                y_high: 398,
            },
            spawns: [
                SpawnPoint {
                    pos: point(100, 100),
                    orientation: Orientation::East,
                },
                SpawnPoint {
                    pos: point(300, 100),
                    orientation: Orientation::West,
                },
            ],
        }
    }

    #[test]
    fn missile_hit_scores_stuns_and_retires() {
        let mut game = Game::new(open_level(), 7);
        // Missile 1 one step short of tank 0's footprint, flying west.
        game.missiles[1].exists = true;
        game.missiles[1].pos = point(108, 103);
        game.missiles[1].orientation = Orientation::West;

        game.tick(InputFlags::NONE, &mut NullSink, &mut NullSink);

        assert_eq!(game.score(TankId::P1), 17);
        assert_eq!(game.score(TankId::P0), 16);
        assert!(!game.missile(TankId::P1).exists);
        assert!(game.tank(TankId::P0).is_stunned());
        assert_eq!(game.tank(TankId::P0).stun_ticks, STUN_TICKS);
        assert_eq!(game.tank(TankId::P0).hit_from, Orientation::West);
        assert_eq!(game.flash_ticks(), 0);
    }

    #[test]
    fn wall_overlap_repeats_the_opposite_move_four_times() {
        let mut level = open_level();
        level.walls.push(Rect::new(150, 90, 170, 120));
        let mut game = Game::new(level, 7);

        game.tanks[0].pos = point(152, 100);
        game.tanks[0].prev_input = InputFlags::UP;
        game.resolve_collisions(&mut NullSink, &mut NullSink);
        // Facing East, so "undo forward" walks back west.
        assert_eq!(game.tanks[0].pos, point(152 - WALL_NUDGE_STEPS as i32, 100));
    }

    #[test]
    fn nudge_correction_is_bounded_not_until_clear() {
        let mut level = open_level();
        level.walls.push(Rect::new(100, 90, 200, 120));
        let mut game = Game::new(level, 7);

        game.tanks[0].pos = point(180, 100);
        game.tanks[0].prev_input = InputFlags::UP;
        game.resolve_collisions(&mut NullSink, &mut NullSink);
        // Four steps west is not enough to leave this block; the
        // residual overlap is left standing.
        assert_eq!(game.tanks[0].pos, point(176, 100));
        assert!(game.world.is_wall(game.tanks[0].pos));
    }

    #[test]
    fn wall_overlap_without_a_recorded_move_is_left_alone() {
        let mut level = open_level();
        level.walls.push(Rect::new(150, 90, 170, 120));
        let mut game = Game::new(level, 7);

        game.tanks[0].pos = point(152, 100);
        game.tanks[0].prev_input = InputFlags::LEFT;
        game.resolve_collisions(&mut NullSink, &mut NullSink);
        assert_eq!(game.tanks[0].pos, point(152, 100));
    }

    #[test]
    fn missile_retires_on_walls_and_out_of_bounds() {
        let mut level = open_level();
        level.walls.push(Rect::new(150, 90, 170, 120));
        let mut game = Game::new(level, 7);

        game.missiles[0].exists = true;
        game.missiles[0].pos = point(155, 100);
        game.missiles[1].exists = true;
        game.missiles[1].pos = point(500, 100);
        game.resolve_collisions(&mut NullSink, &mut NullSink);
        assert!(!game.missiles[0].exists);
        assert!(!game.missiles[1].exists);
    }

    #[test]
    fn simultaneous_mutual_kill_scores_both_in_one_tick() {
        let mut game = Game::new(open_level(), 7);
        game.missiles[0].exists = true;
        game.missiles[0].pos = point(303, 103);
        game.missiles[0].orientation = Orientation::East;
        game.missiles[1].exists = true;
        game.missiles[1].pos = point(103, 103);
        game.missiles[1].orientation = Orientation::West;

        game.resolve_collisions(&mut NullSink, &mut NullSink);
        assert_eq!(game.score(TankId::P0), 17);
        assert_eq!(game.score(TankId::P1), 17);
        assert!(game.tank(TankId::P0).is_stunned());
        assert!(game.tank(TankId::P1).is_stunned());
    }
}
