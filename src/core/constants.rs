// Stage geometry (pixels on a 544x416 stage, y grows downward)
pub const STAGE_WIDTH: f64 = 544.0;
pub const STAGE_HEIGHT: f64 = 416.0;
pub const ANGLER_X: f64 = STAGE_WIDTH - 40.0;
pub const ANGLER_Y: f64 = 160.0;
/// Bait x position at which the line is back at the dock.
pub const DOCK_X: f64 = ANGLER_X - 25.0;
pub const SURFACE_Y: f64 = ANGLER_Y + 20.0;
pub const FLOOR_Y: f64 = STAGE_HEIGHT - 20.0;
/// Leftmost x any fish (or the hooked bait) may reach.
pub const POND_LEFT_X: f64 = 10.0;
/// Where fish go when they leave the pond for good.
pub const OFF_STAGE: f64 = -1000.0;

// Casting
pub const CAST_POWER_STEP: f64 = 0.02;
pub const CAST_ORIGIN_X: f64 = STAGE_WIDTH - 80.0;
pub const CAST_SPAN: f64 = STAGE_WIDTH - 100.0;
pub const CAST_ANIMATION_TICKS: u32 = 30;
pub const CAST_SOUND_TICK: u32 = 18;

// Line and reel
pub const BASE_LINE_STRENGTH: f64 = 90.0;
pub const LINE_STRENGTH_PER_ROD: f64 = 10.0;
pub const REEL_SPEED: f64 = 1.5;
pub const DEFAULT_BAIT_WEIGHT: f64 = 10.0;
pub const BAIT_WEIGHT_DIVISOR: f64 = 10.0;
/// Multiplier applied to a struggling fish's direction when it drags the bait.
pub const STRUGGLE_DRAG_FACTOR: f64 = 2.0;
/// Downward drift of an inanimate catch while it is being reeled.
pub const INANIMATE_SINK_RATE: f64 = 1.0;

// Fish movement
pub const SPEED_SCALE: f64 = 0.1;
pub const APPROACH_SPEED_FACTOR: f64 = 1.5;
/// Distance from the bait past which an approaching fish turns to face it.
pub const APPROACH_FACING_MARGIN: f64 = 5.0;
/// How far outside its depth band a fish may drift before steering back.
pub const DEPTH_BAND_TOLERANCE: f64 = 5.0;
pub const DEPTH_LEVELS: u8 = 10;
pub const IDLE_TIMER_TICKS: i32 = 10;
pub const PASSIVE_TIMER_MIN: i32 = 100;
pub const PASSIVE_TIMER_MAX: i32 = 200;
pub const PASSIVE_VERTICAL_SCALE: f64 = 0.5;
pub const ERRATIC_TIMER_MAX: i32 = 100;
pub const ERRATIC_VERTICAL_SCALE: f64 = 0.8;
pub const STRUGGLE_TIMER_MAX: i32 = 70;

// Species data defaults
pub const DEFAULT_DETECT_RADIUS: f64 = 20.0;
pub const DEFAULT_TAKE_RADIUS: f64 = 2.0;

// Pond presentation defaults
pub const DEFAULT_FLOW_OPACITY: u8 = 120;
pub const DEFAULT_MUSIC_TRACK: &str = "Angevin";
/// Most fish a single `rand_fish` call may add to the manifest.
pub const MAX_RANDOM_FISH: i32 = 100;

// Sound cue asset keys
pub const DEFAULT_CATCH_SOUND: &str = "Up4";
pub const CAST_SOUND: &str = "Wind4";
pub const SPLASH_SOUND: &str = "Dive";
pub const LINE_BREAK_SOUND: &str = "Blow5";
pub const HOOK_SOUND: &str = "Blow5";

// Presentation text
pub const GENERIC_CATCH_TEXT: &str = "Caught something!";

// Save file
pub const SAVE_DIR_NAME: &str = ".angler";
pub const FISHING_SAVE_FILE: &str = "fishing.json";
