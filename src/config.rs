//! Analysis configuration
//!
//! Loads tuning values and input paths from an optional JSON file.
//! Every field falls back to the compiled defaults in `constants`, so a
//! partial config only overrides what it names. A missing file means
//! defaults; a present-but-broken file is a fatal error worth surfacing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::coords::VenueBounds;

fn default_csv_path() -> String {
    DEFAULT_CSV_PATH.to_string()
}
fn default_image_path() -> String {
    DEFAULT_IMAGE_PATH.to_string()
}
fn default_group_threshold() -> f64 {
    GROUP_THRESHOLD
}
fn default_min_duration() -> usize {
    MIN_DURATION
}
fn default_min_radius() -> f32 {
    MIN_RADIUS
}
fn default_max_radius() -> f32 {
    MAX_RADIUS
}
fn default_time_unit() -> f64 {
    TIME_UNIT
}

/// Tuning values and input paths for one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Position table exported by the tracking system
    #[serde(default = "default_csv_path")]
    pub csv_path: String,
    /// Venue floor-plan raster; its pixel size becomes the canvas size
    #[serde(default = "default_image_path")]
    pub image_path: String,
    /// Font used for marker labels; falls back to common system locations
    #[serde(default)]
    pub font_path: Option<String>,
    /// Grid snap size in world units
    #[serde(default = "default_group_threshold")]
    pub group_threshold: f64,
    /// Buckets with at most this many samples are not drawn
    #[serde(default = "default_min_duration")]
    pub min_duration: usize,
    /// Marker radius range in pixels
    #[serde(default = "default_min_radius")]
    pub min_radius: f32,
    #[serde(default = "default_max_radius")]
    pub max_radius: f32,
    /// Samples per dwell unit for the radius curve
    #[serde(default = "default_time_unit")]
    pub time_unit: f64,
    /// World rectangle the floor plan covers
    #[serde(default)]
    pub bounds: VenueBounds,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            image_path: default_image_path(),
            font_path: None,
            group_threshold: default_group_threshold(),
            min_duration: default_min_duration(),
            min_radius: default_min_radius(),
            max_radius: default_max_radius(),
            time_unit: default_time_unit(),
            bounds: VenueBounds::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load the config file, or return defaults if it does not exist
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            println!("No {} found, using built-in defaults", path);
            return Ok(Self::default());
        }

        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
        serde_json::from_str(&contents).with_context(|| format!("Failed to parse {}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = AnalysisConfig::default();
        assert_eq!(config.group_threshold, GROUP_THRESHOLD);
        assert_eq!(config.min_duration, MIN_DURATION);
        assert_eq!(config.min_radius, MIN_RADIUS);
        assert_eq!(config.max_radius, MAX_RADIUS);
        assert_eq!(config.time_unit, TIME_UNIT);
        assert_eq!(config.bounds.left, VENUE_LEFT);
        assert_eq!(config.bounds.top, VENUE_TOP);
    }

    #[test]
    fn test_partial_config_only_overrides_named_fields() {
        let json = r#"{ "min_duration": 10, "csv_path": "other.csv" }"#;
        let config: AnalysisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.min_duration, 10);
        assert_eq!(config.csv_path, "other.csv");
        assert_eq!(config.group_threshold, GROUP_THRESHOLD);
        assert_eq!(config.max_radius, MAX_RADIUS);
    }

    #[test]
    fn test_bounds_override() {
        let json = r#"{ "bounds": { "left": -1.0, "right": 1.0, "bottom": -2.0, "top": 2.0 } }"#;
        let config: AnalysisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.bounds.right, 1.0);
        assert_eq!(config.bounds.bottom, -2.0);
    }
}
