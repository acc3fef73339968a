//! Angler Headless Session Simulator
//!
//! Plays fishing sessions with a simple autopilot instead of a player,
//! using the same `game_tick()` as an interactive host. Useful for checking
//! species and tackle tuning.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --ticks N       Tick limit per session (default: 20000)
//!   --seed N        RNG seed (default: 42)
//!   --runs N        Number of runs with incrementing seeds (default: 1)
//!   --bait N        Bait units in the starting bag (default: 20)
//!   --verbose       Per-event logging
//!   --quiet         Only final summary line
//!   --save          Merge the run's records into ~/.angler/fishing.json

use std::collections::BTreeMap;
use std::sync::Arc;

use angler::angler::{AnglerInput, AnglerPhase};
use angler::core::game::{FishingGame, MenuCommand};
use angler::core::tick::{game_tick, TickEvent, TickResult};
use angler::equipment::{Bag, EquipSlot, Inventory, ItemCatalog, ItemTable, Loadout};
use angler::pond::{load_fishing_state, save_fishing_state, FishingState};
use angler::species::{MovementType, SpeciesCatalog, SpeciesId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SIM_ITEMS: &str = r#"[
    { "id": 1, "name": "Bamboo Rod", "rod": { "strength": 3 } },
    { "id": 2, "name": "Worm", "bait": { "bait_type": 1 } },
    { "id": 3, "name": "Shrimp", "bait": { "bait_type": 2, "sink_weight": 15.0 } },
    { "id": 6, "name": "Magnet", "bait": { "bait_type": 6, "sink_weight": 30.0 } },
    { "id": 23, "name": "Purple Scale" },
    { "id": 24, "name": "Green Scale" },
    { "id": 26, "name": "Old Coin" }
]"#;

/// Give up on an empty line after this many ticks in the water.
const PATIENCE_TICKS: u32 = 900;
/// Only reel against the fish while the line has more than this left.
const SAFE_LINE_STRENGTH: f64 = 25.0;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    ticks: u64,
    seed: u64,
    runs: u32,
    bait: u32,
    verbose: bool,
    quiet: bool,
    save: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: 20_000,
            seed: 42,
            runs: 1,
            bait: 20,
            verbose: false,
            quiet: false,
            save: false,
        }
    }
}

fn parse_args() -> SimConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                i += 1;
                config.ticks = number_arg(&args, i, "--ticks");
            }
            "--seed" => {
                i += 1;
                config.seed = number_arg(&args, i, "--seed");
            }
            "--runs" => {
                i += 1;
                config.runs = number_arg(&args, i, "--runs");
            }
            "--bait" => {
                i += 1;
                config.bait = number_arg(&args, i, "--bait");
            }
            "--verbose" => config.verbose = true,
            "--quiet" => config.quiet = true,
            "--save" => config.save = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                std::process::exit(1);
            }
        }
        i += 1;
    }
    config
}

fn number_arg<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> T {
    match args.get(i).map(|s| s.parse()) {
        Some(Ok(value)) => value,
        _ => {
            eprintln!("{flag} requires a number");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Angler Headless Session Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --ticks N       Tick limit per session (default: 20000)\n\
         \x20 --seed N        RNG seed (default: 42)\n\
         \x20 --runs N        Number of runs with incrementing seeds (default: 1)\n\
         \x20 --bait N        Bait units in the starting bag (default: 20)\n\
         \x20 --verbose       Per-event logging\n\
         \x20 --quiet         Only final summary line\n\
         \x20 --save          Merge records into ~/.angler/fishing.json\n\
         \x20 --help, -h      Show this help"
    );
}

// ── Simulation Statistics ────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
struct SimStats {
    ticks: u64,
    casts: u64,
    hooks: u64,
    caught: BTreeMap<SpeciesId, u64>,
    lost: u64,
    broken: u64,
    reeled_in: u64,
    follow_ups: u64,
    bait_left: u32,
}

impl SimStats {
    fn total_caught(&self) -> u64 {
        self.caught.values().sum()
    }

    fn process_tick(&mut self, result: &TickResult) {
        for event in &result.events {
            match event {
                TickEvent::CastReleased { .. } => self.casts += 1,
                TickEvent::FishHooked { .. } => self.hooks += 1,
                TickEvent::FishCaught { report, .. } => {
                    *self.caught.entry(report.species).or_default() += 1;
                }
                TickEvent::FishLost { .. } => self.lost += 1,
                TickEvent::LineBroken { .. } => self.broken += 1,
                TickEvent::ReeledIn { .. } => self.reeled_in += 1,
                TickEvent::FollowUpQueued { .. } => self.follow_ups += 1,
                _ => {}
            }
        }
    }
}

// ── Autopilot ────────────────────────────────────────────────────────

struct Autopilot {
    /// Power at which to release the current cast.
    target_power: f64,
}

impl Autopilot {
    fn new() -> Self {
        Self { target_power: 0.5 }
    }

    /// Pick this tick's input, issuing menu commands while idle.
    /// Returns `None` once there is nothing left to fish with.
    fn decide(&mut self, game: &mut FishingGame, bag: &Bag, rng: &mut impl Rng) -> Option<AnglerInput> {
        match game.session.phase {
            AnglerPhase::Idle => {
                if !game.loadout.can_cast() && !self.restock(game, bag, rng) {
                    game.command(MenuCommand::Exit, bag);
                    return None;
                }
                self.target_power = rng.gen_range(0.1..0.95);
                game.command(MenuCommand::Cast, bag);
                Some(AnglerInput::none())
            }
            AnglerPhase::CastPower if game.session.cast_power >= self.target_power => {
                Some(AnglerInput::confirm())
            }
            AnglerPhase::CastPower | AnglerPhase::CastAnimation => Some(AnglerInput::none()),
            AnglerPhase::Fishing if game.session.phase_timer > PATIENCE_TICKS => {
                Some(AnglerInput::reel())
            }
            AnglerPhase::Fishing => Some(AnglerInput::none()),
            AnglerPhase::FishStruggle => Some(self.fight(game)),
            AnglerPhase::Victory => Some(AnglerInput::confirm()),
        }
    }

    fn fight(&self, game: &FishingGame) -> AnglerInput {
        let Some(fish) = game.hooked_fish() else {
            return AnglerInput::none();
        };
        if fish.species.movement == MovementType::Stationary {
            return AnglerInput::cancel();
        }
        if fish.dir >= 0.0 || game.session.line_strength > SAFE_LINE_STRENGTH {
            AnglerInput::reel()
        } else {
            AnglerInput::none()
        }
    }

    /// Equip whatever rod and bait the bag still holds.
    fn restock(&self, game: &mut FishingGame, bag: &Bag, rng: &mut impl Rng) -> bool {
        if game.loadout.rod.is_none() {
            if let Some(&rod) = game.equip_choices(EquipSlot::Rod, bag).first() {
                game.command(MenuCommand::EquipRod(rod), bag);
            }
        }
        if game.loadout.bait.is_none() {
            let baits = game.equip_choices(EquipSlot::Bait, bag);
            if !baits.is_empty() {
                let pick = baits[rng.gen_range(0..baits.len())];
                game.command(MenuCommand::EquipBait(pick), bag);
            }
        }
        game.loadout.can_cast()
    }
}

// ── Runner ───────────────────────────────────────────────────────────

fn starting_state(rng: &mut impl Rng) -> FishingState {
    let mut state = FishingState::new();
    state.add_fish(&[2, 3]);
    state.rand_fish(0, 2, 5, rng);
    state.rand_fish(1, 1, 4, rng);
    state.rand_fish(4, -2, 1, rng);
    state
}

fn run_simulation(
    config: &SimConfig,
    seed: u64,
    catalog: &Arc<SpeciesCatalog>,
    items: &Arc<dyn ItemCatalog>,
) -> (SimStats, FishingState) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut state = starting_state(&mut rng);
    let mut bag = Bag::new()
        .with(1, 1)
        .with(2, config.bait)
        .with(3, config.bait / 2)
        .with(6, 2);
    let mut game = FishingGame::start(
        &mut state,
        Arc::clone(catalog),
        Arc::clone(items),
        Loadout::default(),
        &mut rng,
    );
    let mut pilot = Autopilot::new();
    let mut stats = SimStats::default();

    while game.is_running() && game.ticks < config.ticks {
        let Some(input) = pilot.decide(&mut game, &bag, &mut rng) else {
            break;
        };
        let result = game_tick(&mut game, &mut state, &mut bag, input, &mut rng);
        if config.verbose {
            print_tick_events(game.ticks, &result);
        }
        stats.process_tick(&result);
    }

    stats.ticks = game.ticks;
    stats.bait_left = [2, 3, 6].iter().map(|&item| bag.quantity(item)).sum();
    (stats, state)
}

fn print_tick_events(tick: u64, result: &TickResult) {
    for event in &result.events {
        match event {
            TickEvent::FishHooked { message, .. }
            | TickEvent::FishLost { message, .. }
            | TickEvent::LineBroken { message, .. }
            | TickEvent::FishCaught { message, .. }
            | TickEvent::BaitDepleted { message, .. }
            | TickEvent::RodDepleted { message, .. }
            | TickEvent::ReeledIn { message } => println!("[{tick:>6}] {message}"),
            TickEvent::SessionExited { follow_up } => {
                println!("[{tick:>6}] session exited (follow-up {follow_up:?})")
            }
            _ => {}
        }
    }
}

fn print_summary(stats: &SimStats, state: &FishingState, catalog: &SpeciesCatalog, seed: u64) {
    println!("=== Session Summary (seed={seed}) ===");
    println!(
        "  ticks={} casts={} hooks={} caught={} lost={} broken={} reeled_in={} follow_ups={}",
        stats.ticks,
        stats.casts,
        stats.hooks,
        stats.total_caught(),
        stats.lost,
        stats.broken,
        stats.reeled_in,
        stats.follow_ups,
    );
    println!("  bait left: {}", stats.bait_left);
    println!("--- Catches ---");
    for species in catalog.iter() {
        let count = stats.caught.get(&species.id).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        println!(
            "  {:<12} x{:<3} best length {:>6.1}  best weight {:>6.1}",
            species.name,
            count,
            state.records.best_length(species.id),
            state.records.best_weight(species.id),
        );
    }
    let summary = state.records.stats_summary(catalog);
    println!(
        "--- Records: {}/{} species ({:.0}%), {} counted catches ---",
        summary.distinct_caught,
        summary.visible_species,
        summary.completion * 100.0,
        summary.total_caught,
    );
    println!();
}

fn main() {
    env_logger::init();
    let config = parse_args();

    let catalog = Arc::new(SpeciesCatalog::builtin());
    let items: Arc<dyn ItemCatalog> = match ItemTable::from_json(SIM_ITEMS) {
        Ok(table) => Arc::new(table),
        Err(err) => {
            eprintln!("Bad simulator item data: {err}");
            std::process::exit(1);
        }
    };

    if !config.quiet {
        eprintln!(
            "Angler Simulator: up to {} ticks x {} run(s), seed={}, bait={}",
            config.ticks, config.runs, config.seed, config.bait,
        );
    }

    let mut saved = config.save.then(load_fishing_state);

    for run in 0..config.runs {
        let seed = config.seed + run as u64;
        let (stats, state) = run_simulation(&config, seed, &catalog, &items);

        if !config.quiet {
            print_summary(&stats, &state, &catalog, seed);
        } else {
            println!(
                "seed={seed} caught={} lost={} broken={}",
                stats.total_caught(),
                stats.lost,
                stats.broken
            );
        }

        if let Some(saved) = saved.as_mut() {
            for species in catalog.iter() {
                if let Some(record) = state.records.get(species.id) {
                    for _ in 0..record.caught {
                        saved
                            .records
                            .record_catch(species.id, record.best_length, record.best_weight);
                    }
                }
            }
            saved.last_catch = state.last_catch.or(saved.last_catch);
        }
    }

    if let Some(saved) = saved {
        match save_fishing_state(&saved) {
            Ok(()) => eprintln!("Records saved."),
            Err(err) => eprintln!("Could not save records: {err}"),
        }
    }
}
