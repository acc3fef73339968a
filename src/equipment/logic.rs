//! Item lookup, inventory access and loadout management.

use std::collections::BTreeMap;

use thiserror::Error;

use super::types::{
    BaitAttributes, EquipSlot, EquippedBait, EquippedRod, ItemEntry, ItemId, Loadout,
    RodAttributes,
};

/// Pure lookup of fishing attributes and names for items.
pub trait ItemCatalog {
    fn rod(&self, item: ItemId) -> Option<&RodAttributes>;
    fn bait(&self, item: ItemId) -> Option<&BaitAttributes>;
    fn item_name(&self, item: ItemId) -> Option<&str>;
}

/// The host's item storage. Quantities only; item data lives in an [`ItemCatalog`].
pub trait Inventory {
    fn quantity(&self, item: ItemId) -> u32;
    fn consume(&mut self, item: ItemId, amount: u32);
    fn grant(&mut self, item: ItemId, amount: u32);
    /// Every item with a positive quantity, in ascending id order.
    fn held_items(&self) -> Vec<ItemId>;
}

#[derive(Debug, Error)]
pub enum ItemDataError {
    #[error("item data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("item id {0} is defined more than once")]
    DuplicateId(ItemId),
    #[error("item {0}: rod strength must be at least 1")]
    InvalidRodStrength(ItemId),
    #[error("item {id}: bait sink weight {weight} must be positive")]
    InvalidSinkWeight { id: ItemId, weight: f64 },
}

/// Item data resolved once at load time.
#[derive(Debug, Clone, Default)]
pub struct ItemTable {
    items: BTreeMap<ItemId, ItemEntry>,
}

impl ItemTable {
    pub fn new(entries: Vec<ItemEntry>) -> Result<Self, ItemDataError> {
        let mut items = BTreeMap::new();
        for entry in entries {
            if matches!(&entry.rod, Some(rod) if rod.strength < 1) {
                return Err(ItemDataError::InvalidRodStrength(entry.id));
            }
            if let Some(bait) = &entry.bait {
                if bait.sink_weight <= 0.0 {
                    return Err(ItemDataError::InvalidSinkWeight {
                        id: entry.id,
                        weight: bait.sink_weight,
                    });
                }
            }
            let id = entry.id;
            if items.insert(id, entry).is_some() {
                return Err(ItemDataError::DuplicateId(id));
            }
        }
        Ok(Self { items })
    }

    pub fn from_json(json: &str) -> Result<Self, ItemDataError> {
        let entries: Vec<ItemEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }
}

impl ItemCatalog for ItemTable {
    fn rod(&self, item: ItemId) -> Option<&RodAttributes> {
        self.items.get(&item).and_then(|e| e.rod.as_ref())
    }

    fn bait(&self, item: ItemId) -> Option<&BaitAttributes> {
        self.items.get(&item).and_then(|e| e.bait.as_ref())
    }

    fn item_name(&self, item: ItemId) -> Option<&str> {
        self.items.get(&item).map(|e| e.name.as_str())
    }
}

/// A simple counted bag of items, enough for hosts without their own inventory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bag {
    counts: BTreeMap<ItemId, u32>,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, item: ItemId, amount: u32) -> Self {
        self.grant(item, amount);
        self
    }
}

impl Inventory for Bag {
    fn quantity(&self, item: ItemId) -> u32 {
        self.counts.get(&item).copied().unwrap_or(0)
    }

    fn consume(&mut self, item: ItemId, amount: u32) {
        if let Some(count) = self.counts.get_mut(&item) {
            *count = count.saturating_sub(amount);
            if *count == 0 {
                self.counts.remove(&item);
            }
        }
    }

    fn grant(&mut self, item: ItemId, amount: u32) {
        if amount > 0 {
            let count = self.counts.entry(item).or_insert(0);
            *count = count.saturating_add(amount);
        }
    }

    fn held_items(&self) -> Vec<ItemId> {
        self.counts.keys().copied().collect()
    }
}

/// Items the player could put in `slot`: held, and tagged for that slot.
pub fn equip_choices(
    slot: EquipSlot,
    catalog: &dyn ItemCatalog,
    inventory: &impl Inventory,
) -> Vec<ItemId> {
    inventory
        .held_items()
        .into_iter()
        .filter(|&item| match slot {
            EquipSlot::Rod => catalog.rod(item).is_some(),
            EquipSlot::Bait => catalog.bait(item).is_some(),
        })
        .collect()
}

impl Loadout {
    /// Equip a rod. Returns false (leaving the loadout untouched) when the
    /// item is not a rod or the player holds none.
    pub fn equip_rod(
        &mut self,
        item: ItemId,
        catalog: &dyn ItemCatalog,
        inventory: &impl Inventory,
    ) -> bool {
        match catalog.rod(item) {
            Some(attributes) if inventory.quantity(item) > 0 => {
                self.rod = Some(EquippedRod {
                    item,
                    attributes: attributes.clone(),
                });
                true
            }
            _ => false,
        }
    }

    /// Equip a bait. Same rules as [`Loadout::equip_rod`].
    pub fn equip_bait(
        &mut self,
        item: ItemId,
        catalog: &dyn ItemCatalog,
        inventory: &impl Inventory,
    ) -> bool {
        match catalog.bait(item) {
            Some(attributes) if inventory.quantity(item) > 0 => {
                self.bait = Some(EquippedBait {
                    item,
                    attributes: attributes.clone(),
                });
                true
            }
            _ => false,
        }
    }

    /// Drop equipment the inventory no longer holds. Returns the slots cleared.
    pub fn refresh(&mut self, inventory: &impl Inventory) -> Vec<EquipSlot> {
        let mut cleared = Vec::new();
        if matches!(&self.bait, Some(bait) if inventory.quantity(bait.item) == 0) {
            self.bait = None;
            cleared.push(EquipSlot::Bait);
        }
        if matches!(&self.rod, Some(rod) if inventory.quantity(rod.item) == 0) {
            self.rod = None;
            cleared.push(EquipSlot::Rod);
        }
        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS: &str = r#"[
        { "id": 1, "name": "Old Rod", "rod": { "strength": 1 } },
        { "id": 2, "name": "Worm", "bait": { "bait_type": 2 } },
        { "id": 3, "name": "Sinker Worm", "bait": { "bait_type": 2, "sink_weight": 20.0 } },
        { "id": 23, "name": "Purple Scale" }
    ]"#;

    fn table() -> ItemTable {
        ItemTable::from_json(ITEMS).expect("valid item data")
    }

    #[test]
    fn test_item_lookup() {
        let items = table();
        assert_eq!(items.rod(1).map(|r| r.strength), Some(1));
        assert!(items.rod(2).is_none());
        assert_eq!(items.bait(3).map(|b| b.sink_weight), Some(20.0));
        assert_eq!(items.item_name(23), Some("Purple Scale"));
        assert!(items.item_name(99).is_none());
    }

    #[test]
    fn test_zero_strength_rod_rejected() {
        let result = ItemTable::from_json(r#"[{ "id": 5, "name": "Twig", "rod": { "strength": 0 } }]"#);
        assert!(matches!(result, Err(ItemDataError::InvalidRodStrength(5))));
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let result = ItemTable::from_json(
            r#"[{ "id": 5, "name": "A" }, { "id": 5, "name": "B" }]"#,
        );
        assert!(matches!(result, Err(ItemDataError::DuplicateId(5))));
    }

    #[test]
    fn test_bag_consume_removes_empty() {
        let mut bag = Bag::new().with(2, 1);
        bag.consume(2, 1);
        assert_eq!(bag.quantity(2), 0);
        assert!(bag.held_items().is_empty());
    }

    #[test]
    fn test_bag_grant_saturates() {
        let mut bag = Bag::new();
        bag.grant(2, u32::MAX);
        bag.grant(2, u32::MAX);
        assert_eq!(bag.quantity(2), u32::MAX);
    }

    #[test]
    fn test_bag_consume_saturates() {
        let mut bag = Bag::new().with(2, 1);
        bag.consume(2, 5);
        assert_eq!(bag.quantity(2), 0);
    }

    #[test]
    fn test_equip_choices_filter_by_slot() {
        let items = table();
        let bag = Bag::new().with(1, 1).with(2, 3).with(23, 1);
        assert_eq!(equip_choices(EquipSlot::Rod, &items, &bag), vec![1]);
        assert_eq!(equip_choices(EquipSlot::Bait, &items, &bag), vec![2]);
    }

    #[test]
    fn test_equip_requires_attributes_and_stock() {
        let items = table();
        let bag = Bag::new().with(1, 1).with(2, 1);
        let mut loadout = Loadout::default();

        assert!(!loadout.equip_rod(2, &items, &bag));
        assert!(!loadout.equip_bait(3, &items, &bag));
        assert!(loadout.equip_rod(1, &items, &bag));
        assert!(loadout.equip_bait(2, &items, &bag));
        assert!(loadout.can_cast());
    }

    #[test]
    fn test_refresh_clears_depleted_bait() {
        let items = table();
        let mut bag = Bag::new().with(1, 1).with(2, 1);
        let mut loadout = Loadout::default();
        loadout.equip_rod(1, &items, &bag);
        loadout.equip_bait(2, &items, &bag);

        bag.consume(2, 1);
        let cleared = loadout.refresh(&bag);

        assert_eq!(cleared, vec![EquipSlot::Bait]);
        assert!(loadout.bait.is_none());
        assert!(loadout.rod.is_some());
    }
}
