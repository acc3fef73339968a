//! Session setup commands issued by the host before a session starts.

use rand::Rng;

use super::types::{Backdrop, FishingState};
use crate::core::constants::MAX_RANDOM_FISH;
use crate::species::SpeciesId;

impl FishingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_backdrop(&mut self, upper: u32, lower: u32, flow: u32, flow_opacity: u8) {
        self.backdrop = Backdrop {
            upper,
            lower,
            flow,
            flow_opacity,
        };
    }

    pub fn set_music(&mut self, track: impl Into<String>) {
        self.music = track.into();
    }

    /// Append species to the next session's manifest, in order.
    pub fn add_fish(&mut self, species: &[SpeciesId]) {
        self.manifest.extend_from_slice(species);
    }

    /// Append a random number of `species` to the manifest and return the count.
    pub fn rand_fish(&mut self, species: SpeciesId, min: i32, max: i32, rng: &mut impl Rng) -> u32 {
        let count = random_count(min, max, rng);
        self.manifest
            .extend(std::iter::repeat(species).take(count as usize));
        count
    }

    /// Hand the manifest over to a starting session, leaving it empty.
    pub fn take_manifest(&mut self) -> Vec<SpeciesId> {
        std::mem::take(&mut self.manifest)
    }
}

/// Draw a count within the bounds in either order.
///
/// A draw below zero counts as zero, so a negative minimum makes "none" more
/// likely without ever producing a negative count. Both bounds are capped at
/// `MAX_RANDOM_FISH`.
pub fn random_count(a: i32, b: i32, rng: &mut impl Rng) -> u32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let (lo, hi) = (lo.min(MAX_RANDOM_FISH), hi.min(MAX_RANDOM_FISH));
    rng.gen_range(lo..=hi).max(0) as u32
}
