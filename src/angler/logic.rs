//! Angler phase transitions: casting, sinking, reeling and the struggle.

use super::tension::{resolve_tension, struggle_displacement, HookedFish, TensionOutcome};
use super::types::{AnglerEvent, AnglerInput, AnglerPhase, AnglerSession, LinePose};
use crate::core::constants::{
    BAIT_WEIGHT_DIVISOR, BASE_LINE_STRENGTH, CAST_ANIMATION_TICKS, CAST_ORIGIN_X,
    CAST_POWER_STEP, CAST_SOUND_TICK, CAST_SPAN, LINE_STRENGTH_PER_ROD, POND_LEFT_X, REEL_SPEED,
};
use crate::equipment::Loadout;

/// Start the power meter. Needs an idle angler and a complete loadout.
pub fn begin_cast(session: &mut AnglerSession, loadout: &Loadout) -> bool {
    if session.phase != AnglerPhase::Idle {
        return false;
    }
    let Some(tackle) = loadout.tackle() else {
        return false;
    };
    session.tackle = tackle;
    session.cast_power = 0.0;
    session.phase = AnglerPhase::CastPower;
    session.phase_timer = 0;
    true
}

/// Back to the session menu. Bait position and line strength are left as they were.
pub fn return_to_idle(session: &mut AnglerSession) {
    session.phase = AnglerPhase::Idle;
    session.phase_timer = 0;
    session.reeling = false;
    session.pose = LinePose::Idle;
    session.hook.release();
}

/// Line strength a freshly cast line starts with.
pub fn starting_line_strength(rod_strength: u32) -> f64 {
    BASE_LINE_STRENGTH + LINE_STRENGTH_PER_ROD * rod_strength as f64
}

/// Where a cast of the given power puts the bait.
pub fn cast_distance(power: f64) -> f64 {
    CAST_ORIGIN_X - CAST_SPAN * power
}

/// Advance every phase except the struggle, which needs the hooked fish.
pub fn update_angler(session: &mut AnglerSession, input: AnglerInput) -> Vec<AnglerEvent> {
    let mut events = Vec::new();

    if input.cancel
        && session.phase.accepts_cancel()
        && session.phase != AnglerPhase::FishStruggle
    {
        let from = session.phase;
        return_to_idle(session);
        events.push(AnglerEvent::Aborted { from });
        return events;
    }

    match session.phase {
        AnglerPhase::Idle | AnglerPhase::FishStruggle => {}
        AnglerPhase::CastPower => update_cast_power(session, input, &mut events),
        AnglerPhase::CastAnimation => update_cast_animation(session, &mut events),
        AnglerPhase::Fishing => update_fishing(session, input, &mut events),
        AnglerPhase::Victory => {
            if input.confirm {
                return_to_idle(session);
                session.last_catch = None;
                events.push(AnglerEvent::VictoryDismissed);
            }
        }
    }

    events
}

fn update_cast_power(session: &mut AnglerSession, input: AnglerInput, events: &mut Vec<AnglerEvent>) {
    if session.cast_power > 1.0 {
        session.cast_power = 0.0;
    }
    session.cast_power += CAST_POWER_STEP;

    if input.confirm {
        let power = session.cast_power.min(1.0);
        session.bait_x = cast_distance(power);
        session.bait_y = session.surface_y;
        session.line_strength = starting_line_strength(session.tackle.rod_strength);
        session.phase = AnglerPhase::CastAnimation;
        session.phase_timer = 0;
        events.push(AnglerEvent::CastReleased {
            power,
            bait_x: session.bait_x,
        });
    }
}

fn update_cast_animation(session: &mut AnglerSession, events: &mut Vec<AnglerEvent>) {
    session.phase_timer += 1;
    if session.phase_timer == CAST_SOUND_TICK {
        events.push(AnglerEvent::CastSound);
    }
    if session.phase_timer >= CAST_ANIMATION_TICKS {
        session.phase = AnglerPhase::Fishing;
        session.phase_timer = 0;
        session.pose = LinePose::Sinking;
        events.push(AnglerEvent::Splash {
            bait_x: session.bait_x,
        });
    }
}

fn update_fishing(session: &mut AnglerSession, input: AnglerInput, events: &mut Vec<AnglerEvent>) {
    session.phase_timer += 1;
    session.reeling = input.reel;

    if input.reel {
        session.pose = LinePose::Reeling;
        session.bait_x = (session.bait_x + REEL_SPEED).min(session.dock_x);
        session.bait_y = (session.bait_y - REEL_SPEED).max(session.surface_y);
        if session.bait_at_dock() {
            return_to_idle(session);
            events.push(AnglerEvent::ReeledIn);
        }
        return;
    }

    let sink = session.tackle.sink_weight / BAIT_WEIGHT_DIVISOR;
    session.bait_y = (session.bait_y + sink).min(session.floor_y);
    session.pose = if session.bait_y < session.floor_y {
        LinePose::Sinking
    } else {
        LinePose::Idle
    };
}

/// One struggle tick against the fish holding the hook.
///
/// Order: landing check, bait displacement, tension, then cancel. A line
/// that is already exhausted breaks before anything else is considered.
pub fn update_struggle(
    session: &mut AnglerSession,
    hooked: HookedFish<'_>,
    input: AnglerInput,
) -> Vec<AnglerEvent> {
    let slot = hooked.slot();
    let rod_strength = session.tackle.rod_strength;

    if session.line_strength <= 0.0 {
        return_to_idle(session);
        return vec![AnglerEvent::LineBroken { slot }];
    }

    session.phase_timer += 1;
    session.reeling = input.reel;
    session.pose = if input.reel {
        LinePose::Reeling
    } else {
        LinePose::Idle
    };

    if input.reel && session.bait_at_dock() && hooked.movement().is_landable() {
        return_to_idle(session);
        session.phase = AnglerPhase::Victory;
        return vec![AnglerEvent::Landed { slot }];
    }

    let (dx, dy) = struggle_displacement(rod_strength, hooked, input.reel);
    session.bait_x = (session.bait_x + dx).clamp(POND_LEFT_X, session.dock_x);
    session.bait_y = (session.bait_y + dy).clamp(session.surface_y, session.floor_y);

    match resolve_tension(session.line_strength, rod_strength, hooked, input.reel) {
        TensionOutcome::Holding { line_strength, .. } => session.line_strength = line_strength,
        TensionOutcome::Broken { stress } => {
            session.line_strength -= stress;
            return_to_idle(session);
            return vec![AnglerEvent::LineBroken { slot }];
        }
    }

    if input.cancel {
        return_to_idle(session);
        return vec![AnglerEvent::Lost { slot }];
    }

    Vec::new()
}
