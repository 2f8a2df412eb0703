//! Default analysis tuning values
//!
//! Every value here can be overridden through `config/hotzone.json`
//! (see the `config` module). The defaults match the venue the bundled
//! floor plan was captured from.

// =============================================================================
// FILE PATHS
// =============================================================================

/// Path to the optional analysis config file
pub const CONFIG_FILE: &str = "config/hotzone.json";

/// Default path to the exported position table
pub const DEFAULT_CSV_PATH: &str = "data/player_positions.csv";

/// Default path to the venue floor-plan raster
pub const DEFAULT_IMAGE_PATH: &str = "assets/floor_plan.png";

// =============================================================================
// SPATIAL AGGREGATION
// =============================================================================

/// Grid snap size in world units; samples within the same cell are merged
pub const GROUP_THRESHOLD: f64 = 0.03;

/// Minimum sample count for a bucket to be drawn (strict: equal is dropped)
pub const MIN_DURATION: usize = 5;

/// Smallest marker radius in pixels
pub const MIN_RADIUS: f32 = 5.0;

/// Largest marker radius in pixels
pub const MAX_RADIUS: f32 = 30.0;

/// Samples per dwell unit when scaling marker radius
pub const TIME_UNIT: f64 = 30.0;

/// Dwell units beyond this cap no longer grow the marker
pub const TIME_UNIT_CAP: f64 = 20.0;

// =============================================================================
// VENUE BOUNDS (world coordinates covered by the floor plan)
// =============================================================================

pub const VENUE_LEFT: f64 = -267.7;
pub const VENUE_RIGHT: f64 = 169.8;
pub const VENUE_BOTTOM: f64 = -121.8;
pub const VENUE_TOP: f64 = 19.9;

// =============================================================================
// RENDERING
// =============================================================================

/// Alpha applied to marker fills so the floor plan stays visible underneath
pub const MARKER_FILL_ALPHA: u8 = 230;

/// Label height as a fraction of the marker radius
pub const LABEL_SCALE_FACTOR: f32 = 0.9;

/// Fallback font locations tried when the config does not name one
pub const FONT_SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Helvetica.ttc",
];
