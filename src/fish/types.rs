//! Live fish instances.

use std::sync::Arc;

use crate::core::constants::DEPTH_BAND_TOLERANCE;
use crate::species::{SpeciesDefinition, SpeciesId};

/// Coarse behavioral state of a fish, derived from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishState {
    /// Wandering (or approaching bait) on its own.
    Roaming,
    /// On the line.
    Hooked,
    /// Landed and gone for the rest of the session.
    Caught,
}

/// One fish swimming in the pond.
#[derive(Debug, Clone)]
pub struct FishInstance {
    pub species: Arc<SpeciesDefinition>,
    /// Position in spawn order; also the id used to claim the hook slot.
    pub slot: usize,
    pub x: f64,
    pub y: f64,
    pub alive: bool,
    pub hooked: bool,
    /// Ticks left on the current action. Counts below zero while idle.
    pub move_timer: i32,
    /// Horizontal velocity; negative swims away from the angler.
    pub dir: f64,
    /// Vertical velocity; positive swims deeper.
    pub vdir: f64,
    /// Species speed scaled to pixels per tick.
    pub speed: f64,
    pub length: f64,
    pub weight: f64,
}

impl FishInstance {
    pub fn species_id(&self) -> SpeciesId {
        self.species.id
    }

    pub fn state(&self) -> FishState {
        if !self.alive {
            FishState::Caught
        } else if self.hooked {
            FishState::Hooked
        } else {
            FishState::Roaming
        }
    }

    pub fn is_moving(&self) -> bool {
        self.move_timer > 0
    }

    /// Deepest y this fish may roam at.
    pub fn band_floor_y(&self) -> f64 {
        self.species.depth.floor_y()
    }

    /// Shallowest y this fish may roam at.
    pub fn band_surface_y(&self) -> f64 {
        self.species.depth.surface_y()
    }

    /// Drifted further outside its depth band than the tolerance allows.
    pub fn out_of_band(&self) -> bool {
        self.y < self.band_surface_y() - DEPTH_BAND_TOLERANCE
            || self.y > self.band_floor_y() + DEPTH_BAND_TOLERANCE
    }

    /// Within `radius` of a point on both axes.
    pub fn within(&self, x: f64, y: f64, radius: f64) -> bool {
        (self.x - x).abs() <= radius && (self.y - y).abs() <= radius
    }
}
