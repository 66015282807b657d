use log::info;

use crate::config::{ACTION_FRAME_INTERVAL, WIN_SCORE};
use crate::entities::TankId;

use super::render::{AudioSink, RenderSink};
use super::tanks;
use super::{Game, InputFlags};

impl Game {
    /// One simulation tick. Tank actions only resolve on every sixth
    /// tick; cooldowns, missile flight and collisions run every tick.
    /// After a win the game is frozen and ticks are no-ops.
    pub fn tick(
        &mut self,
        input0: InputFlags,
        render: &mut dyn RenderSink,
        audio: &mut dyn AudioSink,
    ) {
        if !self.game_on {
            return;
        }
        self.ticks += 1;

        if self.actions_ready() {
            self.frame_delay = 0;
            self.process_actions(input0, render, audio);
        } else {
            self.frame_delay += 1;
        }

        for tank in self.tanks.iter_mut() {
            tanks::tick_cooldown(tank);
        }
        tanks::advance_missiles(&mut self.missiles, render);
        self.resolve_collisions(render, audio);

        // Commit this tick's inputs as next tick's stale history.
        for tank in self.tanks.iter_mut() {
            tank.prev_input = tank.last_input;
        }

        self.check_win(render);
    }

    /// True on the ticks that consume an input sample. Hosts can use
    /// this to decide when a joystick read actually matters.
    pub fn actions_ready(&self) -> bool {
        self.frame_delay == ACTION_FRAME_INTERVAL - 1
    }

    fn check_win(&mut self, render: &mut dyn RenderSink) {
        for id in [TankId::P0, TankId::P1] {
            if self.scores[id.index()] >= WIN_SCORE {
                self.game_on = false;
                self.winner = Some(id);
                render.show_winner(id);
                info!(
                    "{} wins {} to {}",
                    id.name(),
                    self.scores[id.index()],
                    self.scores[id.enemy().index()]
                );
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LevelConfig, BASE_SCORE};
    use crate::entities::Orientation;
    use crate::game::NullSink;
    use crate::math::point;

    #[test]
    fn actions_resolve_on_every_sixth_tick() {
        let mut game = Game::new(LevelConfig::standard(), 5);
        let start = game.tank(TankId::P0).pos;
        for _ in 0..5 {
            game.tick(InputFlags::UP, &mut NullSink, &mut NullSink);
            assert_eq!(game.tank(TankId::P0).pos, start);
        }
        game.tick(InputFlags::UP, &mut NullSink, &mut NullSink);
        assert_eq!(game.tank(TankId::P0).pos, point(start.x + 1, start.y));

        // The cadence repeats: five quiet ticks after an action tick,
        // and the next move lands on the sixth.
        for _ in 0..5 {
            game.tick(InputFlags::UP, &mut NullSink, &mut NullSink);
            assert_eq!(game.tank(TankId::P0).pos, point(start.x + 1, start.y));
        }
        game.tick(InputFlags::UP, &mut NullSink, &mut NullSink);
        assert_eq!(game.tank(TankId::P0).pos, point(start.x + 2, start.y));
    }

    #[test]
    fn reaching_the_winning_score_freezes_the_game() {
        let mut game = Game::new(LevelConfig::standard(), 5);
        game.scores[0] = WIN_SCORE;
        game.tick(InputFlags::NONE, &mut NullSink, &mut NullSink);
        assert!(!game.game_on());
        assert_eq!(game.winner(), Some(TankId::P0));

        let frozen = game.ticks();
        for _ in 0..10 {
            game.tick(InputFlags::UP, &mut NullSink, &mut NullSink);
        }
        assert_eq!(game.ticks(), frozen);
        assert_eq!(game.tank(TankId::P0).pos, point(57, 131));
    }

    #[test]
    fn simultaneous_winning_hits_go_to_tank_zero() {
        let mut level = LevelConfig::standard();
        level.walls.clear();
        let mut game = Game::new(level, 5);
        game.scores = [WIN_SCORE - 1, WIN_SCORE - 1];
        game.missiles[0].exists = true;
        game.missiles[0].pos = point(191, 134);
        game.missiles[0].orientation = Orientation::East;
        game.missiles[1].exists = true;
        game.missiles[1].pos = point(65, 134);
        game.missiles[1].orientation = Orientation::West;

        game.tick(InputFlags::NONE, &mut NullSink, &mut NullSink);
        assert_eq!(game.score(TankId::P0), WIN_SCORE);
        assert_eq!(game.score(TankId::P1), WIN_SCORE);
        assert_eq!(game.winner(), Some(TankId::P0));
    }

    #[test]
    fn scores_start_at_the_handicap_base() {
        let game = Game::new(LevelConfig::standard(), 5);
        assert_eq!(game.score(TankId::P0), BASE_SCORE);
        assert_eq!(game.score(TankId::P1), BASE_SCORE);
    }
}
