//! Player colors and the numeric id lookup
//!
//! Each distinct player gets a deterministic color sampled evenly along a
//! perceptual ramp, so colors stay stable across runs on the same data and
//! neighbouring players stay visually distinct. The ramp is an anchor-table
//! approximation of the "inferno" colormap, linearly interpolated between
//! anchors and clamped at the ends.

use std::collections::HashMap;

use image::Rgba;

/// Anchors sampled at 0.0, 0.1, ..., 1.0 along the inferno ramp
const INFERNO_ANCHORS: [[u8; 3]; 11] = [
    [0, 0, 4],
    [22, 11, 57],
    [66, 10, 104],
    [106, 23, 110],
    [147, 38, 103],
    [188, 55, 84],
    [221, 81, 58],
    [243, 120, 25],
    [252, 165, 10],
    [246, 215, 70],
    [252, 255, 164],
];

/// Sample the color ramp at `t` in [0, 1], clamped outside
pub fn sample_ramp(t: f64) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);
    let span = (INFERNO_ANCHORS.len() - 1) as f64;
    let pos = t * span;
    let idx = (pos.floor() as usize).min(INFERNO_ANCHORS.len() - 2);
    let frac = pos - idx as f64;

    let lo = INFERNO_ANCHORS[idx];
    let hi = INFERNO_ANCHORS[idx + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

    Rgba([lerp(lo[0], hi[0]), lerp(lo[1], hi[1]), lerp(lo[2], hi[2]), 255])
}

/// Parse the numeric suffix of ids shaped `Player_<n>`
fn parse_player_number(player_id: &str) -> Option<u32> {
    player_id.strip_prefix("Player_")?.parse().ok()
}

/// Deterministic per-player colors plus the number-to-id lookup
///
/// Built once at startup from the loaded data, read-only afterward.
#[derive(Debug, Clone)]
pub struct PlayerColors {
    order: Vec<String>,
    colors: HashMap<String, Rgba<u8>>,
    aliases: HashMap<u32, String>,
}

impl PlayerColors {
    /// Assign colors to the given players (sorted internally)
    ///
    /// Ids not matching `Player_<n>` still get a color but are absent from
    /// the numeric lookup, so they are only reachable through the
    /// all-players render. Duplicate numbers are last-write-wins.
    pub fn assign(players: &[String]) -> Self {
        let mut order: Vec<String> = players.to_vec();
        order.sort();
        order.dedup();

        let total = order.len();
        let mut colors = HashMap::with_capacity(total);
        let mut aliases = HashMap::new();

        for (i, player) in order.iter().enumerate() {
            colors.insert(player.clone(), sample_ramp(i as f64 / total as f64));
            if let Some(num) = parse_player_number(player) {
                aliases.insert(num, player.clone());
            }
        }

        Self {
            order,
            colors,
            aliases,
        }
    }

    /// All known players, sorted
    pub fn players(&self) -> &[String] {
        &self.order
    }

    pub fn color_of(&self, player_id: &str) -> Option<Rgba<u8>> {
        self.colors.get(player_id).copied()
    }

    /// Resolve a console-entered number to the full player id
    pub fn resolve_alias(&self, number: u32) -> Option<&str> {
        self.aliases.get(&number).map(String::as_str)
    }
}
