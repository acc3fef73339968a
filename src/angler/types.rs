//! Angler session data structures.
//!
//! One `AnglerSession` exists per active fishing session. It owns the bait,
//! the line and the single hooked-fish slot that fish compete for.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::constants::{BASE_LINE_STRENGTH, DOCK_X, FLOOR_Y, SURFACE_Y};
use crate::equipment::Tackle;
use crate::records::CatchReport;

/// Phase of the angler's cast-and-reel cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnglerPhase {
    /// In the session menu; nothing in the water.
    #[default]
    Idle,
    /// Power meter running, waiting for confirm.
    CastPower,
    /// Fixed-length cast animation.
    CastAnimation,
    /// Bait in the water, sinking or being reeled.
    Fishing,
    /// A fish is on the line.
    FishStruggle,
    /// Showing the catch.
    Victory,
}

impl AnglerPhase {
    /// Phases the global cancel input aborts from.
    pub fn accepts_cancel(&self) -> bool {
        matches!(
            self,
            Self::CastPower | Self::CastAnimation | Self::Fishing | Self::FishStruggle
        )
    }
}

/// Rod animation pattern the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinePose {
    Sinking,
    #[default]
    Idle,
    Reeling,
}

/// Player input sampled for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnglerInput {
    /// Confirm pressed this tick (freeze power, dismiss catch).
    pub confirm: bool,
    /// Reel button held.
    pub reel: bool,
    /// Cancel pressed this tick.
    pub cancel: bool,
}

impl AnglerInput {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    pub fn reel() -> Self {
        Self {
            reel: true,
            ..Self::default()
        }
    }

    pub fn cancel() -> Self {
        Self {
            cancel: true,
            ..Self::default()
        }
    }
}

/// Something the angler's phase update did this tick.
#[derive(Debug, Clone, PartialEq)]
pub enum AnglerEvent {
    /// Cast power frozen and the line is on its way out.
    CastReleased { power: f64, bait_x: f64 },
    /// Cast animation reached the whoosh frame.
    CastSound,
    /// Bait hit the water.
    Splash { bait_x: f64 },
    /// Bait reeled all the way back with nothing on it.
    ReeledIn,
    /// Cancel pressed outside of a struggle.
    Aborted { from: AnglerPhase },
    /// Hooked fish reached the dock.
    Landed { slot: usize },
    /// Player let the hooked fish go.
    Lost { slot: usize },
    /// Line tension ran out.
    LineBroken { slot: usize },
    /// Catch presentation dismissed.
    VictoryDismissed,
}

const NO_FISH: usize = usize::MAX;

/// The single "fish on the line" slot.
///
/// Claiming is a compare-and-swap so exactly one fish can ever hold it,
/// however fish updates are scheduled.
#[derive(Debug)]
pub struct HookSlot {
    holder: AtomicUsize,
}

impl HookSlot {
    pub fn new() -> Self {
        Self {
            holder: AtomicUsize::new(NO_FISH),
        }
    }

    /// Claim the slot for `slot_id`. On failure returns the current holder.
    pub fn claim(&self, slot_id: usize) -> Result<(), usize> {
        self.holder
            .compare_exchange(NO_FISH, slot_id, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| ())
    }

    /// Empty the slot, returning whoever held it.
    pub fn release(&self) -> Option<usize> {
        match self.holder.swap(NO_FISH, Ordering::AcqRel) {
            NO_FISH => None,
            slot => Some(slot),
        }
    }

    pub fn holder(&self) -> Option<usize> {
        match self.holder.load(Ordering::Acquire) {
            NO_FISH => None,
            slot => Some(slot),
        }
    }

    pub fn is_free(&self) -> bool {
        self.holder().is_none()
    }
}

impl Default for HookSlot {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for HookSlot {
    fn clone(&self) -> Self {
        Self {
            holder: AtomicUsize::new(self.holder.load(Ordering::Acquire)),
        }
    }
}

/// Per-session angler state.
#[derive(Debug, Clone)]
pub struct AnglerSession {
    pub phase: AnglerPhase,
    /// Ticks spent in the current phase.
    pub phase_timer: u32,
    /// Cast meter, 0.0..=1.0 while in CastPower.
    pub cast_power: f64,
    pub bait_x: f64,
    pub bait_y: f64,
    pub line_strength: f64,
    /// Equipment frozen when the cast began.
    pub tackle: Tackle,
    /// Bait x at which the line is back at the angler.
    pub dock_x: f64,
    pub surface_y: f64,
    pub floor_y: f64,
    pub hook: HookSlot,
    pub reeling: bool,
    pub pose: LinePose,
    /// Catch being presented while in Victory.
    pub last_catch: Option<CatchReport>,
}

impl AnglerSession {
    pub fn new() -> Self {
        Self {
            phase: AnglerPhase::Idle,
            phase_timer: 0,
            cast_power: 0.0,
            bait_x: 0.0,
            bait_y: 0.0,
            line_strength: BASE_LINE_STRENGTH,
            tackle: Tackle::default(),
            dock_x: DOCK_X,
            surface_y: SURFACE_Y,
            floor_y: FLOOR_Y,
            hook: HookSlot::new(),
            reeling: false,
            pose: LinePose::Idle,
            last_catch: None,
        }
    }

    /// Whether fish may currently notice and take the bait.
    pub fn bait_in_water(&self) -> bool {
        self.phase == AnglerPhase::Fishing
    }

    pub fn hooked_slot(&self) -> Option<usize> {
        self.hook.holder()
    }

    /// A fish bites. Only succeeds while fishing with an empty slot; on
    /// success the session moves straight to the struggle.
    pub fn try_hook(&mut self, slot_id: usize) -> bool {
        if !self.bait_in_water() || self.hook.claim(slot_id).is_err() {
            return false;
        }
        self.phase = AnglerPhase::FishStruggle;
        self.phase_timer = 0;
        true
    }

    /// Whether the bait has been reeled back to the dock.
    pub fn bait_at_dock(&self) -> bool {
        self.bait_x >= self.dock_x && self.bait_y <= self.surface_y
    }
}

impl Default for AnglerSession {
    fn default() -> Self {
        Self::new()
    }
}
