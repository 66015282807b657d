mod input;
mod render;
mod tanks;
mod update;

pub use input::{resolve_action, Action, InputFlags};
pub use render::{AudioSink, NullSink, RenderSink};
pub use tanks::AiMode;

use rand::{rngs::SmallRng, SeedableRng};

use crate::config::{LevelConfig, BASE_SCORE, FLASH_TICKS};
use crate::entities::{Missile, Tank, TankId};
use crate::world::World;

use tanks::CollisionLatches;

/// The whole match state. Hosts drive it by calling [`Game::tick`] once
/// per frame with player 0's input; tank 1 is controlled internally.
pub struct Game {
    world: World,
    level: LevelConfig,
    tanks: [Tank; 2],
    missiles: [Missile; 2],
    scores: [i32; 2],
    latches: CollisionLatches,
    game_on: bool,
    winner: Option<TankId>,
    ticks: u64,
    frame_delay: u32,
    /// Ticks since the last hit, saturating; hosts render the explosion
    /// flash while this is below its cap.
    flash_ticks: u32,
    ai_ticks: u32,
    ai_mode: AiMode,
    rng: SmallRng,
}

impl Game {
    pub fn new(level: LevelConfig, seed: u64) -> Game {
        Game {
            world: World::new(&level),
            tanks: tanks::spawn_tanks(&level),
            missiles: tanks::spawn_missiles(),
            level,
            scores: [BASE_SCORE; 2],
            latches: CollisionLatches::default(),
            game_on: true,
            winner: None,
            ticks: 0,
            frame_delay: 0,
            flash_ticks: FLASH_TICKS,
            ai_ticks: 0,
            ai_mode: AiMode::Reactive,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Puts everything back to the spawn table for a fresh round. The
    /// RNG keeps its stream so successive rounds differ in random mode.
    pub fn reset_round(&mut self) {
        self.tanks = tanks::spawn_tanks(&self.level);
        self.missiles = tanks::spawn_missiles();
        self.scores = [BASE_SCORE; 2];
        self.latches.clear();
        self.game_on = true;
        self.winner = None;
        self.ticks = 0;
        self.frame_delay = 0;
        self.flash_ticks = FLASH_TICKS;
        self.ai_ticks = 0;
    }

    pub fn set_ai_mode(&mut self, mode: AiMode) {
        self.ai_mode = mode;
    }

    pub fn tank(&self, id: TankId) -> &Tank {
        &self.tanks[id.index()]
    }

    pub fn missile(&self, owner: TankId) -> &Missile {
        &self.missiles[owner.index()]
    }

    pub fn score(&self, id: TankId) -> i32 {
        self.scores[id.index()]
    }

    pub fn game_on(&self) -> bool {
        self.game_on
    }

    pub fn winner(&self) -> Option<TankId> {
        self.winner
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn flash_ticks(&self) -> u32 {
        self.flash_ticks
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    fn record_hit(&mut self, scorer: TankId, render: &mut dyn RenderSink) {
        self.scores[scorer.index()] += 1;
        render.update_score_display(self.scores[0], self.scores[1]);
    }
}

#[cfg(test)]
mod game_tests {
    use super::*;
    use crate::math::point;

    #[test]
    fn new_game_matches_the_spawn_table() {
        let game = Game::new(LevelConfig::standard(), 11);
        assert!(game.game_on());
        assert_eq!(game.winner(), None);
        assert_eq!(game.tank(TankId::P0).pos, point(57, 131));
        assert_eq!(game.tank(TankId::P1).pos, point(190, 131));
        assert!(!game.missile(TankId::P0).exists);
    }

    #[test]
    fn reset_round_restores_spawns_and_scores() {
        let mut game = Game::new(LevelConfig::standard(), 11);
        for _ in 0..120 {
            game.tick(InputFlags::UP, &mut NullSink, &mut NullSink);
        }
        game.scores = [24, 25];
        game.tick(InputFlags::NONE, &mut NullSink, &mut NullSink);
        assert!(!game.game_on());

        game.reset_round();
        assert!(game.game_on());
        assert_eq!(game.winner(), None);
        assert_eq!(game.score(TankId::P0), BASE_SCORE);
        assert_eq!(game.tank(TankId::P0).pos, point(57, 131));
        assert_eq!(game.ticks(), 0);
    }
}
