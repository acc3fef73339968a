//! Line tension and reel displacement while a fish is on the line.

use crate::core::constants::{INANIMATE_SINK_RATE, STRUGGLE_DRAG_FACTOR};
use crate::fish::FishInstance;
use crate::species::MovementType;

/// The fish currently holding the hook.
///
/// Only constructed from a fish that actually holds the session's hook slot,
/// so the resolver never has to handle "no fish".
#[derive(Debug, Clone, Copy)]
pub struct HookedFish<'a> {
    pub fish: &'a FishInstance,
}

impl<'a> HookedFish<'a> {
    pub fn new(fish: &'a FishInstance) -> Self {
        Self { fish }
    }

    pub fn slot(&self) -> usize {
        self.fish.slot
    }

    pub fn pull(&self) -> i32 {
        self.fish.species.pull
    }

    pub fn movement(&self) -> MovementType {
        self.fish.species.movement
    }
}

/// Result of one tension step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TensionOutcome {
    Holding { line_strength: f64, stress: f64 },
    Broken { stress: f64 },
}

/// How far one tick of reeling drags the bait toward the dock.
///
/// A fish with negative pull gives no purchase to the reel at all.
pub fn reel_step(rod_strength: u32, pull: i32) -> f64 {
    if pull < 0 {
        return 0.0;
    }
    (rod_strength as i64 - pull as i64).max(1) as f64
}

/// Stress put on the line this tick.
///
/// Only reeling stresses the line, and only while the fish swims away from
/// the angler or is something that never gives way.
pub fn line_stress(rod_strength: u32, hooked: HookedFish<'_>, reeling: bool) -> f64 {
    let resisting = hooked.fish.dir < 0.0 || hooked.movement().always_resists();
    if reeling && resisting {
        (hooked.pull() as i64 - rod_strength as i64).max(1) as f64
    } else {
        0.0
    }
}

/// Apply one tick of stress; the line breaks once strength reaches zero.
pub fn resolve_tension(
    line_strength: f64,
    rod_strength: u32,
    hooked: HookedFish<'_>,
    reeling: bool,
) -> TensionOutcome {
    let stress = line_stress(rod_strength, hooked, reeling);
    let remaining = line_strength - stress;
    if remaining <= 0.0 {
        TensionOutcome::Broken { stress }
    } else {
        TensionOutcome::Holding {
            line_strength: remaining,
            stress,
        }
    }
}

/// Combined bait displacement from the reel and the fish's struggle.
pub fn struggle_displacement(
    rod_strength: u32,
    hooked: HookedFish<'_>,
    reeling: bool,
) -> (f64, f64) {
    let reel = if reeling {
        reel_step(rod_strength, hooked.pull())
    } else {
        0.0
    };
    match hooked.movement() {
        MovementType::Stationary => (0.0, 0.0),
        MovementType::Inanimate => (reel, -reel + INANIMATE_SINK_RATE),
        MovementType::Passive | MovementType::Erratic => (
            reel + STRUGGLE_DRAG_FACTOR * hooked.fish.dir,
            -reel + STRUGGLE_DRAG_FACTOR * hooked.fish.vdir,
        ),
    }
}
