//! Session context, tick orchestration and tuning constants.

pub mod constants;
pub mod game;
pub mod tick;

pub use game::{FishingGame, MenuCommand};
pub use tick::{game_tick, TickEvent, TickResult};
