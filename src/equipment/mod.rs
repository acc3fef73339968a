//! Fishing equipment: rod/bait attributes, item lookup and the player's loadout.

pub mod logic;
pub mod types;

pub use logic::{equip_choices, Bag, Inventory, ItemCatalog, ItemDataError, ItemTable};
pub use types::{
    BaitAttributes, EquipSlot, EquippedBait, EquippedRod, ItemEntry, ItemId, Loadout,
    RodAttributes, Tackle,
};
