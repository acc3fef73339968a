use std::io;
use std::path::Path;

use super::types::FishingState;
use crate::core::constants::FISHING_SAVE_FILE;
use crate::utils::persistence::{
    load_json_at_or_default, load_json_or_default, save_json, save_json_at,
};

/// Load the fishing state from ~/.angler/, or a fresh one.
pub fn load_fishing_state() -> FishingState {
    load_json_or_default(FISHING_SAVE_FILE)
}

pub fn save_fishing_state(state: &FishingState) -> io::Result<()> {
    save_json(FISHING_SAVE_FILE, state)
}

pub fn load_fishing_state_from(path: &Path) -> FishingState {
    load_json_at_or_default(path)
}

pub fn save_fishing_state_to(path: &Path, state: &FishingState) -> io::Result<()> {
    save_json_at(path, state)
}
