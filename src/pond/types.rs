//! Pond configuration and the persisted fishing state.

use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_FLOW_OPACITY, DEFAULT_MUSIC_TRACK};
use crate::records::FishRecords;
use crate::species::SpeciesId;

/// Background layers shown behind the pond. Keys are opaque to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backdrop {
    pub upper: u32,
    pub lower: u32,
    pub flow: u32,
    pub flow_opacity: u8,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            upper: 0,
            lower: 0,
            flow: 0,
            flow_opacity: DEFAULT_FLOW_OPACITY,
        }
    }
}

/// Everything about fishing that outlives a single session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishingState {
    #[serde(default)]
    pub records: FishRecords,
    #[serde(default)]
    pub backdrop: Backdrop,
    #[serde(default = "default_music")]
    pub music: String,
    /// Species of the most recent catch, for scripted follow-ups.
    #[serde(default)]
    pub last_catch: Option<SpeciesId>,
    /// Species to stock the next session with. Cleared when a session starts.
    #[serde(skip)]
    pub manifest: Vec<SpeciesId>,
}

fn default_music() -> String {
    DEFAULT_MUSIC_TRACK.to_string()
}

impl Default for FishingState {
    fn default() -> Self {
        Self {
            records: FishRecords::default(),
            backdrop: Backdrop::default(),
            music: default_music(),
            last_catch: None,
            manifest: Vec::new(),
        }
    }
}
