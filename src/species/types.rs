//! Species definitions: the static description of everything that can live in
//! a pond, from ordinary fish to rocks that snag the line.

use serde::{Deserialize, Serialize};

use crate::core::constants::{
    DEFAULT_DETECT_RADIUS, DEFAULT_TAKE_RADIUS, DEPTH_LEVELS, FLOOR_Y, SURFACE_Y,
};
use crate::equipment::ItemId;

pub type SpeciesId = u32;

/// How a species moves through the water.
///
/// Stationary and Inanimate species never swim on their own; Passive and
/// Erratic species wander and struggle when hooked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementType {
    /// Immovable obstacle (rocks). Snags the line, can never be landed.
    Stationary,
    /// Lifeless but landable object (chests, quest items).
    Inanimate,
    /// Normal fish movement.
    Passive,
    /// Changes direction more often and more vertically.
    Erratic,
}

impl MovementType {
    pub const ALL: [MovementType; 4] = [
        MovementType::Stationary,
        MovementType::Inanimate,
        MovementType::Passive,
        MovementType::Erratic,
    ];

    /// Signed movement code: negative never moves, zero is inert, positive swims.
    pub fn code(&self) -> i8 {
        match self {
            Self::Stationary => -1,
            Self::Inanimate => 0,
            Self::Passive => 1,
            Self::Erratic => 2,
        }
    }

    /// Whether reeling this species all the way to the dock lands it.
    pub fn is_landable(&self) -> bool {
        self.code() >= 0
    }

    /// Whether it stresses the line on every reel, regardless of direction.
    pub fn always_resists(&self) -> bool {
        self.code() <= 0
    }

    /// Whether it swims and struggles under its own power.
    pub fn is_animate(&self) -> bool {
        self.code() > 0
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stationary => "Stationary",
            Self::Inanimate => "Inanimate",
            Self::Passive => "Passive",
            Self::Erratic => "Erratic",
        }
    }
}

/// Inclusive `[min, max]` range of a rolled attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatRange {
    pub min: f64,
    pub max: f64,
}

impl StatRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Value at `ratio` (0.0 = min, 1.0 = max), rounded to one decimal.
    pub fn at(&self, ratio: f64) -> f64 {
        let value = (self.max - self.min) * ratio + self.min;
        ((value * 10.0).round() / 10.0).clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Depth band on the 0 (floor) to 10 (surface) scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthBand {
    pub min: u8,
    pub max: u8,
}

impl DepthBand {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Stage y coordinate of a depth level. Level 0 sits on the floor.
    pub fn level_y(level: u8) -> f64 {
        if level == 0 {
            FLOOR_Y
        } else {
            FLOOR_Y - (FLOOR_Y - SURFACE_Y) * (level as f64 / DEPTH_LEVELS as f64)
        }
    }

    /// Deepest y the species may swim at (largest y value).
    pub fn floor_y(&self) -> f64 {
        Self::level_y(self.min)
    }

    /// Shallowest y the species may swim at (smallest y value).
    pub fn surface_y(&self) -> f64 {
        Self::level_y(self.max)
    }
}

/// Distances at which a fish notices the bait and at which it bites.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeRadius {
    pub detect: f64,
    pub take: f64,
}

impl Default for StrikeRadius {
    fn default() -> Self {
        Self {
            detect: DEFAULT_DETECT_RADIUS,
            take: DEFAULT_TAKE_RADIUS,
        }
    }
}

/// Where a species appears when the pond is stocked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawnX {
    Random,
    Fixed(f64),
}

/// A single entry of the species catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesDefinition {
    pub id: SpeciesId,
    pub name: String,
    pub graphic: String,
    /// Swim speed before scaling to pixels per tick.
    pub speed: f64,
    /// Resistance against the rod. Negative pull never resists the reel.
    pub pull: i32,
    pub movement: MovementType,
    pub depth: DepthBand,
    pub spawn_x: SpawnX,
    /// Item granted on catch; 0 grants nothing.
    #[serde(default)]
    pub reward_item: ItemId,
    pub bait_types: Vec<u32>,
    #[serde(default)]
    pub catch_sound: Option<String>,
    #[serde(default)]
    pub strike: StrikeRadius,
    #[serde(default)]
    pub follow_up_event: Option<u32>,
    pub length: StatRange,
    pub weight: StatRange,
    #[serde(default = "default_true")]
    pub stat_visible: bool,
    /// Shown instead of the reward item's name. Empty means none.
    #[serde(default)]
    pub custom_text: String,
}

fn default_true() -> bool {
    true
}

impl SpeciesDefinition {
    pub fn accepts_bait(&self, bait_type: u32) -> bool {
        self.bait_types.contains(&bait_type)
    }

    pub fn has_custom_text(&self) -> bool {
        !self.custom_text.is_empty()
    }
}
