//! The fishing session context: everything one session owns, in one place.

use std::sync::Arc;

use rand::Rng;

use crate::angler::{begin_cast, AnglerPhase, AnglerSession};
use crate::equipment::{equip_choices, EquipSlot, Inventory, ItemCatalog, ItemId, Loadout};
use crate::fish::{stock_pond, FishInstance};
use crate::pond::FishingState;
use crate::species::SpeciesCatalog;

/// Commands available from the in-session menu while the angler is idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Cast,
    EquipBait(ItemId),
    EquipRod(ItemId),
    Exit,
}

/// One running fishing session.
pub struct FishingGame {
    pub session: AnglerSession,
    /// Live population in spawn order; `fish[i].slot == i`.
    pub fish: Vec<FishInstance>,
    pub loadout: Loadout,
    pub species: Arc<SpeciesCatalog>,
    pub items: Arc<dyn ItemCatalog>,
    /// Event to hand back to the host once the player leaves Victory.
    pub follow_up: Option<u32>,
    pub exited: bool,
    pub ticks: u64,
}

impl FishingGame {
    /// Stock the pond from the state's manifest (which is emptied) and open the session.
    pub fn start(
        state: &mut FishingState,
        species: Arc<SpeciesCatalog>,
        items: Arc<dyn ItemCatalog>,
        loadout: Loadout,
        rng: &mut impl Rng,
    ) -> Self {
        let manifest = state.take_manifest();
        let fish = stock_pond(&manifest, &species, rng);
        log::info!(
            "fishing session started: {} of {} manifest entries stocked",
            fish.len(),
            manifest.len()
        );
        Self {
            session: AnglerSession::new(),
            fish,
            loadout,
            species,
            items,
            follow_up: None,
            exited: false,
            ticks: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        !self.exited
    }

    /// Fish still in the pond.
    pub fn live_fish(&self) -> impl Iterator<Item = &FishInstance> {
        self.fish.iter().filter(|f| f.alive)
    }

    /// Index into `fish` of whoever holds the hook.
    pub fn hooked_index(&self) -> Option<usize> {
        let slot = self.session.hooked_slot()?;
        self.fish.iter().position(|f| f.slot == slot)
    }

    pub fn hooked_fish(&self) -> Option<&FishInstance> {
        self.hooked_index().map(|i| &self.fish[i])
    }

    /// Items the player could put in `slot` right now.
    pub fn equip_choices(&self, slot: EquipSlot, inventory: &impl Inventory) -> Vec<ItemId> {
        equip_choices(slot, self.items.as_ref(), inventory)
    }

    /// Run a menu command. Only accepted while idle; returns whether it took effect.
    pub fn command(&mut self, command: MenuCommand, inventory: &impl Inventory) -> bool {
        if self.exited || self.session.phase != AnglerPhase::Idle {
            return false;
        }
        match command {
            MenuCommand::Cast => begin_cast(&mut self.session, &self.loadout),
            MenuCommand::EquipBait(item) => {
                self.loadout
                    .equip_bait(item, self.items.as_ref(), inventory)
            }
            MenuCommand::EquipRod(item) => {
                self.loadout.equip_rod(item, self.items.as_ref(), inventory)
            }
            MenuCommand::Exit => {
                log::info!("fishing session ended after {} ticks", self.ticks);
                self.exited = true;
                true
            }
        }
    }
}
