//! The player's side of the minigame: cast, wait, reel and fight.

pub mod logic;
pub mod tension;
pub mod types;

pub use logic::{
    begin_cast, cast_distance, return_to_idle, starting_line_strength, update_angler,
    update_struggle,
};
pub use tension::{resolve_tension, HookedFish, TensionOutcome};
pub use types::{AnglerEvent, AnglerInput, AnglerPhase, AnglerSession, HookSlot, LinePose};
