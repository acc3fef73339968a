//! Fishing session integration tests
//!
//! End-to-end tests driving `game_tick()` through:
//! - Session start and pond stocking
//! - Line tension while reeling
//! - Catch presentation
//! - Bait sinking
//! - Cancelling a cast

use std::sync::Arc;

use angler::angler::{AnglerInput, AnglerPhase};
use angler::core::game::{FishingGame, MenuCommand};
use angler::core::tick::{game_tick, TickEvent, TickResult};
use angler::equipment::{
    BaitAttributes, Bag, Inventory, ItemCatalog, ItemId, ItemTable, Loadout, RodAttributes,
};
use angler::fish::hook;
use angler::pond::FishingState;
use angler::records::CatchPresentation;
use angler::species::SpeciesCatalog;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const SPECIES: &str = r#"[
    {
        "id": 0, "name": "Bass", "graphic": "bass", "speed": 5.0, "pull": 5,
        "movement": "passive", "depth": { "min": 2, "max": 8 }, "spawn_x": "random",
        "reward_item": 30, "bait_types": [1],
        "length": { "min": 30.0, "max": 60.0 }, "weight": { "min": 2.0, "max": 6.0 }
    },
    {
        "id": 1, "name": "Perch", "graphic": "perch", "speed": 4.0, "pull": 1,
        "movement": "erratic", "depth": { "min": 4, "max": 9 }, "spawn_x": "random",
        "reward_item": 31, "bait_types": [1],
        "length": { "min": 10.0, "max": 25.0 }, "weight": { "min": 0.5, "max": 2.0 }
    },
    {
        "id": 2, "name": "Snag", "graphic": "snag", "speed": 0.0, "pull": 0,
        "movement": "stationary", "depth": { "min": 0, "max": 0 },
        "spawn_x": { "fixed": 120.0 }, "bait_types": [1],
        "strike": { "detect": 20.0, "take": 20.0 },
        "length": { "min": 1.0, "max": 1.0 }, "weight": { "min": 1.0, "max": 1.0 },
        "stat_visible": false
    },
    {
        "id": 3, "name": "Boot", "graphic": "boot", "speed": 2.0, "pull": 1,
        "movement": "inanimate", "depth": { "min": 0, "max": 2 }, "spawn_x": "random",
        "reward_item": 0, "bait_types": [1],
        "length": { "min": 25.0, "max": 30.0 }, "weight": { "min": 1.0, "max": 1.5 },
        "stat_visible": false
    }
]"#;

const ITEMS: &str = r#"[
    { "id": 1, "name": "Twig Rod", "rod": { "strength": 1 } },
    { "id": 2, "name": "Cane Rod", "rod": { "strength": 3 } },
    { "id": 10, "name": "Worm", "bait": { "bait_type": 1 } },
    { "id": 11, "name": "Lead Worm", "bait": { "bait_type": 1, "sink_weight": 20.0 } },
    { "id": 30, "name": "Bass Scale" },
    { "id": 31, "name": "Perch Scale" }
]"#;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn species() -> Arc<SpeciesCatalog> {
    Arc::new(SpeciesCatalog::from_json(SPECIES).expect("test species are valid"))
}

fn items() -> Arc<dyn ItemCatalog> {
    Arc::new(ItemTable::from_json(ITEMS).expect("test items are valid"))
}

/// Item data that refuses to be asked for names.
struct NamelessItems(ItemTable);

impl ItemCatalog for NamelessItems {
    fn rod(&self, item: ItemId) -> Option<&RodAttributes> {
        self.0.rod(item)
    }

    fn bait(&self, item: ItemId) -> Option<&BaitAttributes> {
        self.0.bait(item)
    }

    fn item_name(&self, item: ItemId) -> Option<&str> {
        panic!("item name lookup for {item} should not happen");
    }
}

fn start_with(
    manifest: &[u32],
    items: Arc<dyn ItemCatalog>,
    rod: ItemId,
    bait: ItemId,
    rng: &mut ChaCha8Rng,
) -> (FishingGame, FishingState, Bag) {
    let mut state = FishingState::new();
    state.add_fish(manifest);
    let bag = Bag::new().with(rod, 1).with(bait, 5);
    let mut game = FishingGame::start(&mut state, species(), items, Loadout::default(), rng);
    assert!(game.command(MenuCommand::EquipRod(rod), &bag));
    assert!(game.command(MenuCommand::EquipBait(bait), &bag));
    (game, state, bag)
}

fn tick(
    game: &mut FishingGame,
    state: &mut FishingState,
    bag: &mut Bag,
    input: AnglerInput,
    rng: &mut ChaCha8Rng,
) -> TickResult {
    game_tick(game, state, bag, input, rng)
}

/// Cast from the menu and wait for the splash.
fn cast_into_water(
    game: &mut FishingGame,
    state: &mut FishingState,
    bag: &mut Bag,
    rng: &mut ChaCha8Rng,
) {
    assert!(game.command(MenuCommand::Cast, &*bag));
    tick(game, state, bag, AnglerInput::confirm(), rng);
    let mut splashed = false;
    for _ in 0..30 {
        let result = tick(game, state, bag, AnglerInput::none(), rng);
        splashed |= result
            .events
            .iter()
            .any(|e| matches!(e, TickEvent::Splash { .. }));
    }
    assert!(splashed, "cast should splash down after 30 ticks");
    assert_eq!(game.session.phase, AnglerPhase::Fishing);
}

/// Put fish 0 on the line at a fixed mid-pond spot.
fn hook_first_fish(game: &mut FishingGame) {
    game.session.bait_x = 200.0;
    game.session.bait_y = 300.0;
    game.fish[0].x = 200.0;
    game.fish[0].y = 300.0;
    assert!(hook(&mut game.fish[0], &mut game.session));
    assert_eq!(game.session.phase, AnglerPhase::FishStruggle);
}

// ============================================================================
// Session Start
// ============================================================================

#[test]
fn test_manifest_stocks_distinct_slots() {
    let mut rng = create_test_rng();
    let (game, state, _) = start_with(&[0, 0, 1], items(), 2, 10, &mut rng);

    assert_eq!(game.live_fish().count(), 3);
    let mut slots: Vec<usize> = game.fish.iter().map(|f| f.slot).collect();
    slots.sort();
    slots.dedup();
    assert_eq!(slots, vec![0, 1, 2]);
    assert!(state.manifest.is_empty(), "manifest is cleared on start");
}

#[test]
fn test_unknown_manifest_entries_are_dropped() {
    let mut rng = create_test_rng();
    let (game, _, _) = start_with(&[0, 77, 1], items(), 2, 10, &mut rng);
    assert_eq!(game.fish.len(), 2);
    assert_eq!(game.fish[1].slot, 1);
}

// ============================================================================
// Line Tension
// ============================================================================

#[test]
fn test_reeling_against_current_costs_pull_minus_rod() {
    let mut rng = create_test_rng();
    let (mut game, mut state, mut bag) = start_with(&[0], items(), 2, 10, &mut rng);
    cast_into_water(&mut game, &mut state, &mut bag, &mut rng);
    assert!((game.session.line_strength - 120.0).abs() < f64::EPSILON);

    hook_first_fish(&mut game);
    game.fish[0].dir = -0.5;
    game.fish[0].vdir = 0.0;
    game.fish[0].move_timer = 1000;

    for _ in 0..10 {
        let result = tick(&mut game, &mut state, &mut bag, AnglerInput::reel(), &mut rng);
        assert!(result.events.is_empty(), "unexpected {:?}", result.events);
    }
    assert!((game.session.line_strength - 100.0).abs() < 1e-9);
    assert_eq!(game.session.phase, AnglerPhase::FishStruggle);
}

#[test]
fn test_immovable_snag_costs_one_per_tick() {
    let mut rng = create_test_rng();
    let (mut game, mut state, mut bag) = start_with(&[2], items(), 1, 10, &mut rng);
    cast_into_water(&mut game, &mut state, &mut bag, &mut rng);
    hook_first_fish(&mut game);
    let start = game.session.line_strength;
    assert!((start - 100.0).abs() < f64::EPSILON);

    for _ in 0..5 {
        tick(&mut game, &mut state, &mut bag, AnglerInput::reel(), &mut rng);
    }
    assert!((game.session.line_strength - (start - 5.0)).abs() < 1e-9);
    assert!((game.session.bait_x - 200.0).abs() < f64::EPSILON);
    assert!((game.session.bait_y - 300.0).abs() < f64::EPSILON);
}

#[test]
fn test_snag_eventually_breaks_line() {
    let mut rng = create_test_rng();
    let (mut game, mut state, mut bag) = start_with(&[2], items(), 1, 10, &mut rng);
    cast_into_water(&mut game, &mut state, &mut bag, &mut rng);
    hook_first_fish(&mut game);

    let mut broke_at = None;
    for i in 1..=200 {
        let result = tick(&mut game, &mut state, &mut bag, AnglerInput::reel(), &mut rng);
        if result
            .events
            .iter()
            .any(|e| matches!(e, TickEvent::LineBroken { .. }))
        {
            broke_at = Some(i);
            break;
        }
    }
    assert_eq!(broke_at, Some(100));
    assert_eq!(game.session.phase, AnglerPhase::Idle);
    assert_eq!(bag.quantity(10), 4, "a broken line takes the bait");
    assert!(game.fish[0].alive);
}

// ============================================================================
// Catch Presentation
// ============================================================================

#[test]
fn test_rewardless_catch_uses_generic_text() {
    let mut rng = create_test_rng();
    let nameless: Arc<dyn ItemCatalog> =
        Arc::new(NamelessItems(ItemTable::from_json(ITEMS).unwrap()));
    let (mut game, mut state, mut bag) = start_with(&[3], nameless, 2, 10, &mut rng);
    cast_into_water(&mut game, &mut state, &mut bag, &mut rng);
    hook_first_fish(&mut game);
    game.session.bait_x = game.session.dock_x;
    game.session.bait_y = game.session.surface_y;

    let result = tick(&mut game, &mut state, &mut bag, AnglerInput::reel(), &mut rng);
    let report = result
        .events
        .iter()
        .find_map(|e| match e {
            TickEvent::FishCaught { report, .. } => Some(report.clone()),
            _ => None,
        })
        .expect("boot should be landed");
    assert_eq!(report.presentation, CatchPresentation::Generic);
    assert_eq!(report.reward_item, 0);
    assert_eq!(game.session.phase, AnglerPhase::Victory);
    assert_eq!(bag.held_items(), vec![2, 10]);
}

#[test]
fn test_reward_catch_names_item() {
    let mut rng = create_test_rng();
    let (mut game, mut state, mut bag) = start_with(&[0], items(), 2, 10, &mut rng);
    cast_into_water(&mut game, &mut state, &mut bag, &mut rng);
    hook_first_fish(&mut game);
    game.session.bait_x = game.session.dock_x;
    game.session.bait_y = game.session.surface_y;

    let result = tick(&mut game, &mut state, &mut bag, AnglerInput::reel(), &mut rng);
    assert!(result.events.iter().any(|e| matches!(
        e,
        TickEvent::FishCaught { report, .. }
            if report.presentation == CatchPresentation::Item { item: 30, name: "Bass Scale".to_string() }
    )));
    assert_eq!(bag.quantity(30), 1);
    assert_eq!(bag.quantity(10), 4);
    assert_eq!(state.records.caught(0), 1);
}

// ============================================================================
// Bait Sinking
// ============================================================================

#[test]
fn test_heavy_bait_sinks_two_per_tick() {
    let mut rng = create_test_rng();
    let (mut game, mut state, mut bag) = start_with(&[], items(), 2, 11, &mut rng);
    cast_into_water(&mut game, &mut state, &mut bag, &mut rng);
    game.session.bait_y = 0.0;

    for _ in 0..10 {
        tick(&mut game, &mut state, &mut bag, AnglerInput::none(), &mut rng);
    }
    let expected = 20.0f64.min(game.session.floor_y);
    assert!((game.session.bait_y - expected).abs() < 1e-9);
}

// ============================================================================
// Cancelling
// ============================================================================

#[test]
fn test_cancel_during_power_meter() {
    let mut rng = create_test_rng();
    let (mut game, mut state, mut bag) = start_with(&[0, 1], items(), 2, 10, &mut rng);
    let line = game.session.line_strength;
    let bait = (game.session.bait_x, game.session.bait_y);

    assert!(game.command(MenuCommand::Cast, &bag));
    for _ in 0..7 {
        tick(&mut game, &mut state, &mut bag, AnglerInput::none(), &mut rng);
    }
    let result = tick(&mut game, &mut state, &mut bag, AnglerInput::cancel(), &mut rng);

    assert!(result.events.contains(&TickEvent::Aborted {
        from: AnglerPhase::CastPower
    }));
    assert_eq!(game.session.phase, AnglerPhase::Idle);
    assert!((game.session.line_strength - line).abs() < f64::EPSILON);
    assert!((game.session.bait_x - bait.0).abs() < f64::EPSILON);
    assert!((game.session.bait_y - bait.1).abs() < f64::EPSILON);
    assert_eq!(bag.quantity(10), 5);
}

#[test]
fn test_cancel_during_cast_animation() {
    let mut rng = create_test_rng();
    let (mut game, mut state, mut bag) = start_with(&[], items(), 2, 10, &mut rng);

    assert!(game.command(MenuCommand::Cast, &bag));
    tick(&mut game, &mut state, &mut bag, AnglerInput::confirm(), &mut rng);
    for _ in 0..5 {
        tick(&mut game, &mut state, &mut bag, AnglerInput::none(), &mut rng);
    }
    assert_eq!(game.session.phase, AnglerPhase::CastAnimation);
    let bait = (game.session.bait_x, game.session.bait_y);

    let result = tick(&mut game, &mut state, &mut bag, AnglerInput::cancel(), &mut rng);

    assert!(result.events.contains(&TickEvent::Aborted {
        from: AnglerPhase::CastAnimation
    }));
    assert!(!result
        .events
        .iter()
        .any(|e| matches!(e, TickEvent::Splash { .. })));
    assert_eq!(game.session.phase, AnglerPhase::Idle);
    assert!((game.session.bait_x - bait.0).abs() < f64::EPSILON);
    assert!((game.session.bait_y - bait.1).abs() < f64::EPSILON);
    assert_eq!(bag.quantity(10), 5);
}

#[test]
fn test_cancel_while_fishing() {
    let mut rng = create_test_rng();
    let (mut game, mut state, mut bag) = start_with(&[], items(), 2, 10, &mut rng);

    cast_into_water(&mut game, &mut state, &mut bag, &mut rng);
    let bait = (game.session.bait_x, game.session.bait_y);

    let result = tick(&mut game, &mut state, &mut bag, AnglerInput::cancel(), &mut rng);

    assert!(result.events.contains(&TickEvent::Aborted {
        from: AnglerPhase::Fishing
    }));
    assert_eq!(game.session.phase, AnglerPhase::Idle);
    assert!((game.session.bait_x - bait.0).abs() < f64::EPSILON);
    assert!((game.session.bait_y - bait.1).abs() < f64::EPSILON);
    assert_eq!(bag.quantity(10), 5);
    assert_eq!(bag.quantity(2), 1);
}

#[test]
fn test_cancel_while_hooked_releases_fish() {
    let mut rng = create_test_rng();
    let (mut game, mut state, mut bag) = start_with(&[0], items(), 2, 10, &mut rng);
    cast_into_water(&mut game, &mut state, &mut bag, &mut rng);
    hook_first_fish(&mut game);

    let result = tick(&mut game, &mut state, &mut bag, AnglerInput::cancel(), &mut rng);
    assert!(result
        .events
        .iter()
        .any(|e| matches!(e, TickEvent::FishLost { slot: 0, .. })));
    assert!(!game.fish[0].hooked);
    assert!(game.session.hook.is_free());
    assert_eq!(bag.quantity(10), 5);
}

#[test]
fn test_exit_ends_session() {
    let mut rng = create_test_rng();
    let (mut game, mut state, mut bag) = start_with(&[0], items(), 2, 10, &mut rng);
    assert!(game.command(MenuCommand::Exit, &bag));
    let result = tick(&mut game, &mut state, &mut bag, AnglerInput::confirm(), &mut rng);
    assert!(result.events.is_empty());
    assert!(!game.is_running());
}
