use crate::entities::{Orientation, TankId};
use crate::math::Point;

/// Rendering surface the core draws into. Calls are fire-and-forget; no
/// return value feeds back into the simulation.
pub trait RenderSink {
    fn draw_tank_frame(&mut self, tank: TankId, orientation: Orientation, pos: Point);
    fn draw_missile_frame(&mut self, owner: TankId, pos: Point, overlapping: bool);
    fn clear_cell(&mut self, pos: Point);
    fn update_score_display(&mut self, score0: i32, score1: i32);
    fn show_winner(&mut self, tank: TankId);
}

/// Audio cue surface, same fire-and-forget contract.
pub trait AudioSink {
    fn play_fire_sound(&mut self, tank: TankId);
    fn play_hit_sound(&mut self);
}

/// Sink that discards everything, for headless simulation and tests.
pub struct NullSink;

impl RenderSink for NullSink {
    fn draw_tank_frame(&mut self, _tank: TankId, _orientation: Orientation, _pos: Point) {}
    fn draw_missile_frame(&mut self, _owner: TankId, _pos: Point, _overlapping: bool) {}
    fn clear_cell(&mut self, _pos: Point) {}
    fn update_score_display(&mut self, _score0: i32, _score1: i32) {}
    fn show_winner(&mut self, _tank: TankId) {}
}

impl AudioSink for NullSink {
    fn play_fire_sound(&mut self, _tank: TankId) {}
    fn play_hit_sound(&mut self) {}
}
