use crate::config::LevelConfig;
use crate::entities::{Missile, Tank, TankId};
use crate::game::InputFlags;

pub(in crate::game) fn spawn_tanks(level: &LevelConfig) -> [Tank; 2] {
    [
        spawn_tank(TankId::P0, level),
        spawn_tank(TankId::P1, level),
    ]
}

fn spawn_tank(id: TankId, level: &LevelConfig) -> Tank {
    let spawn = level.spawns[id.index()];
    Tank {
        id,
        pos: spawn.pos,
        orientation: spawn.orientation,
        stun_ticks: 0,
        hit_from: spawn.orientation,
        fire_ready: true,
        cooldown_ticks: 0,
        diag_primed: false,
        last_input: InputFlags::NONE,
        prev_input: InputFlags::NONE,
    }
}

pub(in crate::game) fn spawn_missiles() -> [Missile; 2] {
    [Missile::empty(TankId::P0), Missile::empty(TankId::P1)]
}
