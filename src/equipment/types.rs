//! Typed rod and bait attributes, resolved once from item data.

use serde::{Deserialize, Serialize};

use crate::core::constants::DEFAULT_BAIT_WEIGHT;

pub type ItemId = u32;

/// Which loadout slot an item can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    Rod,
    Bait,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RodAttributes {
    /// Line resilience and reel advantage. Always at least 1.
    pub strength: u32,
    #[serde(default = "default_rod_sprite")]
    pub sprite: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaitAttributes {
    /// Compatibility tag matched against a species' accepted bait types.
    pub bait_type: u32,
    /// How fast the bait sinks; divided by 10 per tick.
    #[serde(default = "default_bait_weight")]
    pub sink_weight: f64,
    #[serde(default = "default_bait_sprite")]
    pub sprite: String,
}

fn default_rod_sprite() -> String {
    "rod".to_string()
}

fn default_bait_sprite() -> String {
    "bait".to_string()
}

fn default_bait_weight() -> f64 {
    DEFAULT_BAIT_WEIGHT
}

/// One row of item data as supplied by the host game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub rod: Option<RodAttributes>,
    #[serde(default)]
    pub bait: Option<BaitAttributes>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquippedRod {
    pub item: ItemId,
    pub attributes: RodAttributes,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquippedBait {
    pub item: ItemId,
    pub attributes: BaitAttributes,
}

/// The rod and bait the player currently has in hand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Loadout {
    pub rod: Option<EquippedRod>,
    pub bait: Option<EquippedBait>,
}

/// Equipment values frozen for the duration of one cast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tackle {
    pub rod_strength: u32,
    pub bait_type: u32,
    pub sink_weight: f64,
}

impl Default for Tackle {
    fn default() -> Self {
        Self {
            rod_strength: 1,
            bait_type: 0,
            sink_weight: DEFAULT_BAIT_WEIGHT,
        }
    }
}

impl Loadout {
    /// Casting needs both a rod and bait.
    pub fn can_cast(&self) -> bool {
        self.rod.is_some() && self.bait.is_some()
    }

    /// Snapshot the equipped attributes, if the loadout is complete.
    pub fn tackle(&self) -> Option<Tackle> {
        let rod = self.rod.as_ref()?;
        let bait = self.bait.as_ref()?;
        Some(Tackle {
            rod_strength: rod.attributes.strength,
            bait_type: bait.attributes.bait_type,
            sink_weight: bait.attributes.sink_weight,
        })
    }
}
