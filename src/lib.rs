//! Angler - fishing minigame engine
//!
//! Casting, a live fish population, the reel-in struggle with line tension,
//! and persistent catch records, all advanced one tick at a time by
//! [`core::game_tick`]. Rendering, audio and menus belong to the host; the
//! engine reports what happened through [`core::TickEvent`]s.

pub mod angler;
pub mod core;
pub mod equipment;
pub mod fish;
pub mod pond;
pub mod records;
pub mod species;
pub mod utils;
