//! Position table and floor-plan loading
//!
//! The tracker exports one CSV row per position sample. Only the player id
//! and the X/Z world coordinates matter for the heat-map; the exporter also
//! writes a session-relative timestamp, a wall-clock string, the Y
//! coordinate and the venue name, all of which are optional here so older
//! exports keep loading. Both loads are one-shot: a missing file or a bad
//! row is fatal, there is no partial-load recovery.

use std::collections::BTreeSet;
use std::io::Read;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use image::RgbaImage;
use serde::Deserialize;

/// Wall-clock format written by the exporter
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One raw position sample
#[derive(Debug, Clone, Deserialize)]
pub struct PositionRecord {
    pub player_id: String,
    /// World X in venue units
    pub x: f64,
    /// World Z in venue units
    pub z: f64,
    /// Seconds since session start, if the export carries it
    #[serde(default)]
    pub timestamp: Option<f64>,
    /// Wall-clock time of the sample, if the export carries it
    #[serde(default)]
    pub datetime: Option<String>,
}

/// The full loaded dataset, immutable after load
#[derive(Debug, Clone)]
pub struct PositionTable {
    records: Vec<PositionRecord>,
}

impl PositionTable {
    /// Load the position table from a CSV file
    pub fn load(path: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .with_context(|| format!("Failed to open position table {}", path))?;

        let mut records = Vec::new();
        for (row, result) in reader.deserialize().enumerate() {
            let record: PositionRecord =
                result.with_context(|| format!("Bad row {} in {}", row + 2, path))?;
            records.push(record);
        }

        Ok(Self { records })
    }

    /// Parse a position table from any reader (used by tests)
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);

        let mut records = Vec::new();
        for result in reader.deserialize() {
            let record: PositionRecord = result.context("Bad position row")?;
            records.push(record);
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[PositionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted set of distinct player ids observed in the data
    pub fn players(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self.records.iter().map(|r| r.player_id.as_str()).collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// World positions for one player, in row order
    pub fn positions_for<'a>(
        &'a self,
        player_id: &'a str,
    ) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.records
            .iter()
            .filter(move |r| r.player_id == player_id)
            .map(|r| (r.x, r.z))
    }

    /// Wall-clock span covered by the data, if the datetime column parses
    pub fn session_span(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut times = self
            .records
            .iter()
            .filter_map(|r| r.datetime.as_deref())
            .filter_map(|s| NaiveDateTime::parse_from_str(s, DATETIME_FORMAT).ok());

        let first = times.next()?;
        let (min, max) = times.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t)));
        Some((min, max))
    }

    /// One-line load report printed after the one-shot batch load
    pub fn summary(&self) -> String {
        let players = self.players();
        let mut line = format!(
            "Loaded {} position samples across {} players",
            self.records.len(),
            players.len()
        );
        if let Some((start, end)) = self.session_span() {
            line.push_str(&format!(" ({} to {})", start, end));
        }
        line
    }
}

/// The venue floor-plan raster; its pixel size defines the canvas size
pub struct FloorPlan {
    pub image: RgbaImage,
}

impl FloorPlan {
    pub fn load(path: &str) -> Result<Self> {
        let image = image::open(path)
            .with_context(|| format!("Failed to open floor plan {}", path))?
            .to_rgba8();
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
