//! Headless simulation core for a two-tank arena duel.
//!
//! The crate owns the whole match state: two tanks on a 16-heading
//! compass, one missile per tank, a walled arena, the collision and
//! scoring rules, and a built-in controller for the second tank.
//! Rendering, audio and input sampling stay outside; hosts implement
//! [`game::RenderSink`] and [`game::AudioSink`] and feed player 0's
//! input bitmask into [`game::Game::tick`] once per frame.

pub mod config;
pub mod entities;
pub mod game;
pub mod math;
pub mod world;

pub use config::{LevelConfig, LevelError};
pub use entities::{Missile, Orientation, Tank, TankId, Turn};
pub use game::{AiMode, AudioSink, Game, InputFlags, NullSink, RenderSink};
