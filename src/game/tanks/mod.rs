mod ai;
mod collisions;
mod combat;
mod movement;
mod spawn;
mod stun;

pub use ai::AiMode;

pub(super) use collisions::CollisionLatches;
pub(super) use combat::{advance_missiles, tick_cooldown};
pub(super) use spawn::{spawn_missiles, spawn_tanks};

use crate::config::FLASH_TICKS;
use crate::entities::TankId;

use super::render::{AudioSink, RenderSink};
use super::{resolve_action, Action, Game, InputFlags};

impl Game {
    /// One action phase: resolve both tanks' inputs into at most one
    /// action each, spin whoever is stunned, then advance the hit-flash
    /// counter and redraw both tanks.
    pub(super) fn process_actions(
        &mut self,
        input0: InputFlags,
        render: &mut dyn RenderSink,
        audio: &mut dyn AudioSink,
    ) {
        let input1 = self.ai_input();
        self.apply_action(TankId::P0, input0, audio);
        self.apply_action(TankId::P1, input1, audio);

        let wrap = self.world.wrap();
        for tank in self.tanks.iter_mut() {
            if tank.is_stunned() {
                stun::spin_tick(tank, wrap);
            }
        }
        if self.flash_ticks < FLASH_TICKS {
            self.flash_ticks += 1;
        }
        for tank in self.tanks.iter() {
            render.draw_tank_frame(tank.id, tank.orientation, tank.pos);
        }
    }

    fn apply_action(&mut self, id: TankId, flags: InputFlags, audio: &mut dyn AudioSink) {
        let index = id.index();
        // Recorded even when no action resolves; the collision pass
        // reads last tick's value to undo a move into a wall.
        self.tanks[index].last_input = flags;
        match resolve_action(flags) {
            Some(Action::Fire) => {
                let (tank, missile) = (&mut self.tanks[index], &mut self.missiles[index]);
                combat::fire(tank, missile, audio);
            }
            Some(Action::Forward) => movement::apply_move_input(&mut self.tanks[index], false),
            Some(Action::Backward) => movement::apply_move_input(&mut self.tanks[index], true),
            Some(Action::Turn(turn)) => movement::turn_tank(&mut self.tanks[index], turn),
            None => {}
        }
    }
}
