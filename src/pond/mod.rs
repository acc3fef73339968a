//! Pond setup and the fishing state persisted between sessions.

pub mod logic;
pub mod persistence;
pub mod types;

pub use logic::random_count;
pub use persistence::{
    load_fishing_state, load_fishing_state_from, save_fishing_state, save_fishing_state_to,
};
pub use types::{Backdrop, FishingState};
