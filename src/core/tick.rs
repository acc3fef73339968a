//! Per-tick orchestration of a fishing session.
//!
//! `game_tick()` advances the angler first, applies whatever outcome that
//! produced (catch, loss, broken line), then updates every fish in spawn
//! order. It returns a [`TickResult`] describing what happened so the
//! presentation layer can play sounds and show messages without the engine
//! knowing anything about either.

use std::sync::Arc;

use rand::Rng;

use super::constants::{CAST_SOUND, DEFAULT_CATCH_SOUND, HOOK_SOUND, LINE_BREAK_SOUND, SPLASH_SOUND};
use super::game::FishingGame;
use crate::angler::{update_angler, update_struggle, AnglerEvent, AnglerInput, AnglerPhase, HookedFish};
use crate::equipment::{EquipSlot, Inventory, ItemId};
use crate::fish::{mark_caught, release, update_fish, FishEvent};
use crate::pond::FishingState;
use crate::records::{catch_presentation, CatchReport};
use crate::species::SpeciesId;

/// A single event produced by a game tick.
#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    // ── Casting ─────────────────────────────────────────────────
    /// Power frozen, line flying.
    CastReleased { power: f64, bait_x: f64 },

    /// Whoosh partway through the cast animation.
    CastSound { sound: &'static str },

    /// Bait hit the water.
    Splash { bait_x: f64, sound: &'static str },

    /// Empty line reeled back to the dock.
    ReeledIn { message: String },

    /// Cast or wait abandoned with cancel.
    Aborted { from: AnglerPhase },

    // ── Struggle ────────────────────────────────────────────────
    /// A fish took the bait. The presentation layer flashes the screen.
    FishHooked {
        slot: usize,
        species: SpeciesId,
        sound: &'static str,
        message: String,
    },

    /// The player gave up on the hooked fish.
    FishLost {
        slot: usize,
        species: SpeciesId,
        message: String,
    },

    /// Line tension ran out; the bait went with it.
    LineBroken {
        slot: usize,
        species: SpeciesId,
        sound: &'static str,
        message: String,
    },

    // ── Catch ───────────────────────────────────────────────────
    /// A fish was landed and recorded.
    FishCaught {
        report: CatchReport,
        sound: String,
        message: String,
    },

    /// The catch queued a scripted event for the host.
    FollowUpQueued { event: u32 },

    /// Catch presentation dismissed, back at the menu.
    VictoryDismissed,

    /// The session is over and control goes back to the host.
    SessionExited { follow_up: Option<u32> },

    // ── Equipment ───────────────────────────────────────────────
    /// The last unit of the equipped bait was used up.
    BaitDepleted { item: ItemId, message: String },

    /// The equipped rod is no longer in the inventory.
    RodDepleted { item: ItemId, message: String },
}

/// Result of processing a single game tick.
#[derive(Debug, Clone, Default)]
pub struct TickResult {
    /// Events produced during this tick, in chronological order.
    pub events: Vec<TickEvent>,

    /// True if the persisted fishing state changed and should be saved.
    /// The presentation layer is responsible for the actual IO.
    pub state_changed: bool,
}

/// Advance the session by one tick.
pub fn game_tick<I: Inventory, R: Rng>(
    game: &mut FishingGame,
    state: &mut FishingState,
    inventory: &mut I,
    input: AnglerInput,
    rng: &mut R,
) -> TickResult {
    let mut result = TickResult::default();
    if game.exited {
        return result;
    }
    game.ticks += 1;

    let angler_events = match (game.session.phase, game.hooked_index()) {
        (AnglerPhase::FishStruggle, Some(index)) => update_struggle(
            &mut game.session,
            HookedFish::new(&game.fish[index]),
            input,
        ),
        _ => update_angler(&mut game.session, input),
    };
    for event in angler_events {
        apply_angler_event(game, state, inventory, event, &mut result);
    }

    for fish in game.fish.iter_mut() {
        if let Some(FishEvent::Hooked { slot, species }) = update_fish(fish, &mut game.session, rng) {
            result.events.push(TickEvent::FishHooked {
                slot,
                species,
                sound: HOOK_SOUND,
                message: format!("Something bit! {} is on the line.", fish.species.name),
            });
        }
    }

    result
}

fn apply_angler_event<I: Inventory>(
    game: &mut FishingGame,
    state: &mut FishingState,
    inventory: &mut I,
    event: AnglerEvent,
    result: &mut TickResult,
) {
    match event {
        AnglerEvent::CastReleased { power, bait_x } => {
            result.events.push(TickEvent::CastReleased { power, bait_x });
        }
        AnglerEvent::CastSound => result.events.push(TickEvent::CastSound { sound: CAST_SOUND }),
        AnglerEvent::Splash { bait_x } => result.events.push(TickEvent::Splash {
            bait_x,
            sound: SPLASH_SOUND,
        }),
        AnglerEvent::ReeledIn => result.events.push(TickEvent::ReeledIn {
            message: "Reeled in. Nothing on the hook.".to_string(),
        }),
        AnglerEvent::Aborted { from } => result.events.push(TickEvent::Aborted { from }),
        AnglerEvent::Landed { slot } => resolve_catch(game, state, inventory, slot, result),
        AnglerEvent::Lost { slot } => {
            if let Some(fish) = game.fish.iter_mut().find(|f| f.slot == slot) {
                release(fish);
                log::debug!("{} got away from slot {}", fish.species.name, slot);
                result.events.push(TickEvent::FishLost {
                    slot,
                    species: fish.species_id(),
                    message: format!("The {} got away.", fish.species.name),
                });
            }
        }
        AnglerEvent::LineBroken { slot } => {
            let Some(fish) = game.fish.iter_mut().find(|f| f.slot == slot) else {
                return;
            };
            release(fish);
            log::info!("line broke on {} (slot {})", fish.species.name, slot);
            result.events.push(TickEvent::LineBroken {
                slot,
                species: fish.species_id(),
                sound: LINE_BREAK_SOUND,
                message: "The line snapped!".to_string(),
            });
            consume_bait(game, inventory, result);
        }
        AnglerEvent::VictoryDismissed => match game.follow_up {
            Some(event) => {
                log::info!("leaving fishing session for follow-up event {event}");
                game.exited = true;
                result.events.push(TickEvent::SessionExited {
                    follow_up: Some(event),
                });
            }
            None => result.events.push(TickEvent::VictoryDismissed),
        },
    }
}

fn resolve_catch<I: Inventory>(
    game: &mut FishingGame,
    state: &mut FishingState,
    inventory: &mut I,
    slot: usize,
    result: &mut TickResult,
) {
    let Some(fish) = game.fish.iter_mut().find(|f| f.slot == slot) else {
        return;
    };
    let species = Arc::clone(&fish.species);
    let (length, weight) = (fish.length, fish.weight);
    mark_caught(fish);

    if species.reward_item > 0 {
        inventory.grant(species.reward_item, 1);
    }
    let (new_length_record, new_weight_record) =
        state.records.record_catch(species.id, length, weight);
    state.last_catch = Some(species.id);
    result.state_changed = true;

    let presentation = catch_presentation(&species, game.items.as_ref());
    let message = if species.stat_visible {
        format!("{} (length {length}, weight {weight})", presentation.text())
    } else {
        presentation.text().to_string()
    };
    let report = CatchReport {
        species: species.id,
        species_name: species.name.clone(),
        slot,
        length,
        weight,
        stat_visible: species.stat_visible,
        presentation,
        new_length_record,
        new_weight_record,
        reward_item: species.reward_item,
    };
    log::info!(
        "caught {} (length {}, weight {}), {} total",
        species.name,
        length,
        weight,
        state.records.caught(species.id)
    );
    game.session.last_catch = Some(report.clone());
    result.events.push(TickEvent::FishCaught {
        report,
        sound: species
            .catch_sound
            .clone()
            .unwrap_or_else(|| DEFAULT_CATCH_SOUND.to_string()),
        message,
    });

    if let Some(event) = species.follow_up_event {
        game.follow_up = Some(event);
        result.events.push(TickEvent::FollowUpQueued { event });
    }

    consume_bait(game, inventory, result);
}

/// Use up one unit of the equipped bait and drop anything the inventory ran out of.
fn consume_bait<I: Inventory>(game: &mut FishingGame, inventory: &mut I, result: &mut TickResult) {
    let bait_item = game.loadout.bait.as_ref().map(|b| b.item);
    let rod_item = game.loadout.rod.as_ref().map(|r| r.item);
    if let Some(item) = bait_item {
        inventory.consume(item, 1);
    }
    for slot in game.loadout.refresh(&*inventory) {
        match (slot, bait_item, rod_item) {
            (EquipSlot::Bait, Some(item), _) => {
                let name = game.items.item_name(item).unwrap_or("bait").to_string();
                result.events.push(TickEvent::BaitDepleted {
                    item,
                    message: format!("Out of {name}."),
                });
            }
            (EquipSlot::Rod, _, Some(item)) => {
                let name = game.items.item_name(item).unwrap_or("rod").to_string();
                result.events.push(TickEvent::RodDepleted {
                    item,
                    message: format!("No {name} left to fish with."),
                });
            }
            _ => {}
        }
    }
}
