//! Fish actors: spawning and the per-tick behavior of every live fish.

pub mod generation;
pub mod logic;
pub mod types;

pub use generation::{roll_size_ratio, spawn_fish, stock_pond};
pub use logic::{hook, mark_caught, notices_bait, release, update_fish, FishEvent};
pub use types::{FishInstance, FishState};
