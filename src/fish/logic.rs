//! Per-tick fish behavior: roaming, approaching bait, biting and struggling.

use rand::Rng;

use super::generation::roll_unit;
use super::types::FishInstance;
use crate::angler::AnglerSession;
use crate::core::constants::{
    APPROACH_FACING_MARGIN, APPROACH_SPEED_FACTOR, DOCK_X, ERRATIC_TIMER_MAX,
    ERRATIC_VERTICAL_SCALE, IDLE_TIMER_TICKS, OFF_STAGE, PASSIVE_TIMER_MAX, PASSIVE_TIMER_MIN,
    PASSIVE_VERTICAL_SCALE, POND_LEFT_X, STRUGGLE_TIMER_MAX,
};
use crate::species::{MovementType, SpeciesId};

/// Something a fish did this tick that the session should hear about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FishEvent {
    Hooked { slot: usize, species: SpeciesId },
}

/// How a movement type picks its next free-roam action.
struct RoamBehavior {
    swims: bool,
    vertical_scale: f64,
    /// Action duration range, `min..max`.
    timer: (i32, i32),
}

fn roam_behavior(movement: MovementType) -> RoamBehavior {
    match movement {
        MovementType::Stationary | MovementType::Inanimate => RoamBehavior {
            swims: false,
            vertical_scale: 0.0,
            timer: (IDLE_TIMER_TICKS, IDLE_TIMER_TICKS + 1),
        },
        MovementType::Passive => RoamBehavior {
            swims: true,
            vertical_scale: PASSIVE_VERTICAL_SCALE,
            timer: (PASSIVE_TIMER_MIN, PASSIVE_TIMER_MAX),
        },
        MovementType::Erratic => RoamBehavior {
            swims: true,
            vertical_scale: ERRATIC_VERTICAL_SCALE,
            timer: (0, ERRATIC_TIMER_MAX),
        },
    }
}

/// Advance one fish by one tick. Caught fish are skipped entirely.
pub fn update_fish(
    fish: &mut FishInstance,
    session: &mut AnglerSession,
    rng: &mut impl Rng,
) -> Option<FishEvent> {
    if !fish.alive {
        return None;
    }
    if fish.hooked {
        update_hooked(fish, session, rng);
        return None;
    }
    if notices_bait(fish, session) {
        approach_bait(fish, session);
        if fish.within(session.bait_x, session.bait_y, fish.species.strike.take)
            && hook(fish, session)
        {
            log::debug!("{} took the bait in slot {}", fish.species.name, fish.slot);
            return Some(FishEvent::Hooked {
                slot: fish.slot,
                species: fish.species_id(),
            });
        }
        return None;
    }
    update_roaming(fish, rng);
    None
}

/// Whether the bait is in the water, close enough to see, and to this fish's taste.
pub fn notices_bait(fish: &FishInstance, session: &AnglerSession) -> bool {
    session.bait_in_water()
        && fish.within(session.bait_x, session.bait_y, fish.species.strike.detect)
        && fish.species.accepts_bait(session.tackle.bait_type)
}

/// Put `fish` on the line. Fails if the session is not fishing or another
/// fish already holds the hook.
pub fn hook(fish: &mut FishInstance, session: &mut AnglerSession) -> bool {
    if !session.try_hook(fish.slot) {
        return false;
    }
    fish.hooked = true;
    if fish.species.movement.is_animate() {
        fish.dir = -1.0;
    }
    true
}

/// Swim toward the bait, staying inside the depth band.
fn approach_bait(fish: &mut FishInstance, session: &AnglerSession) {
    if fish.species.movement == MovementType::Stationary {
        return;
    }
    let step = fish.speed * APPROACH_SPEED_FACTOR;
    let (bait_x, bait_y) = (session.bait_x, session.bait_y);

    if fish.x < bait_x {
        fish.x += step;
        if fish.x < bait_x - APPROACH_FACING_MARGIN {
            fish.dir = 1.0;
        }
    } else if fish.x > bait_x {
        fish.x -= step;
        if fish.x > bait_x + APPROACH_FACING_MARGIN {
            fish.dir = -1.0;
        }
    }

    let floor = fish.band_floor_y();
    let surface = fish.band_surface_y();
    if fish.y < bait_y {
        if fish.y < floor {
            fish.y = (fish.y + step).min(floor);
        }
        fish.vdir = 1.0;
    } else if fish.y > bait_y {
        if fish.y > surface {
            fish.y = (fish.y - step).max(surface);
        }
        fish.vdir = -1.0;
    }
}

/// Ride along with the bait, re-rolling the struggle when the timer lapses.
fn update_hooked(fish: &mut FishInstance, session: &AnglerSession, rng: &mut impl Rng) {
    if fish.species.movement == MovementType::Stationary {
        return;
    }
    fish.x = session.bait_x;
    fish.y = session.bait_y;
    if !fish.is_moving() {
        roll_struggle(fish, rng);
    }
    fish.move_timer = fish.move_timer.saturating_sub(1);
}

fn roll_struggle(fish: &mut FishInstance, rng: &mut impl Rng) {
    if fish.species.movement.always_resists() {
        fish.dir = 0.0;
        fish.vdir = 0.0;
        fish.move_timer = 0;
    } else {
        fish.dir = roll_unit(rng) * fish.speed;
        fish.vdir = roll_unit(rng) * fish.speed;
        fish.move_timer = rng.gen_range(0..STRUGGLE_TIMER_MAX);
    }
}

/// Free-roam: keep the current action going, or pick a new one.
fn update_roaming(fish: &mut FishInstance, rng: &mut impl Rng) {
    if fish.is_moving() {
        if fish.out_of_band() {
            steer_to_band(fish);
        } else {
            swim(fish);
        }
    } else {
        roll_action(fish, rng);
    }
    fish.move_timer = fish.move_timer.saturating_sub(1);
}

fn roll_action(fish: &mut FishInstance, rng: &mut impl Rng) {
    let behavior = roam_behavior(fish.species.movement);
    if behavior.swims {
        fish.dir = roll_unit(rng) * fish.speed;
        fish.vdir = roll_unit(rng) * behavior.vertical_scale * fish.speed;
    } else {
        fish.dir = 0.0;
        fish.vdir = 0.0;
    }
    let (min, max) = behavior.timer;
    fish.move_timer = rng.gen_range(min..max);
}

fn swim(fish: &mut FishInstance) {
    if fish.dir != 0.0 {
        fish.x = (fish.x + fish.dir).clamp(POND_LEFT_X, DOCK_X);
    }
    if fish.vdir != 0.0 {
        fish.y = (fish.y + fish.vdir).clamp(fish.band_surface_y(), fish.band_floor_y());
    }
}

fn steer_to_band(fish: &mut FishInstance) {
    fish.dir = 0.0;
    fish.vdir = 0.0;
    if fish.y < fish.band_surface_y() {
        fish.y += 1.0;
    }
    if fish.y > fish.band_floor_y() {
        fish.y -= 1.0;
    }
}

/// The fish was landed: gone from the pond for the rest of the session.
pub fn mark_caught(fish: &mut FishInstance) {
    fish.hooked = false;
    fish.alive = false;
    fish.x = OFF_STAGE;
    fish.y = OFF_STAGE;
}

/// The fish got away (or the line broke) and goes back to roaming.
pub fn release(fish: &mut FishInstance) {
    fish.hooked = false;
    if fish.species.movement.always_resists() {
        fish.dir = 0.0;
        fish.vdir = 0.0;
    }
}
