//! hotzone - positional dwell-time heat-maps over a venue floor plan
//!
//! Loads a position table exported by the venue tracking system, bins the
//! samples into a coarse world-space grid, and draws each bucket as a
//! sized, colored, numbered marker over the floor-plan image. An
//! interactive console loop filters the view to a single player per query.

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod coords;
pub mod data;
pub mod palette;
pub mod render;
pub mod selector;
pub mod viewer;

// Re-export commonly used types for convenience
pub use aggregate::{DwellBucket, aggregate_positions, dwell_radius};
pub use config::AnalysisConfig;
pub use constants::*;
pub use coords::{VenueBounds, world_to_pixel};
pub use data::{FloorPlan, PositionRecord, PositionTable};
pub use palette::{PlayerColors, sample_ramp};
pub use render::{AnalysisContext, load_label_font};
pub use selector::{PROMPT, SelectorCommand, parse_selector_input, spawn_input_thread};
pub use viewer::{Canvas, canvas_from_image, draw_canvas, window_conf};
