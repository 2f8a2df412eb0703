//! Spatial aggregation of raw positions into dwell buckets
//!
//! Raw samples are snapped to a coarse grid; the sample count per cell is
//! the dwell-time proxy (valid while the tracker records at a fixed
//! interval). Buckets below the dwell floor are dropped, the rest get a
//! marker radius from an interpolation curve and a 1-based sequence index
//! in ascending dwell order. Everything is recomputed from the immutable
//! table on every call; nothing is cached across renders.

use std::collections::BTreeMap;

use crate::config::AnalysisConfig;
use crate::constants::TIME_UNIT_CAP;

/// One grid cell worth of aggregated dwell time
#[derive(Debug, Clone)]
pub struct DwellBucket {
    /// Snapped world coordinate (cell center)
    pub world_x: f64,
    pub world_z: f64,
    /// Sample count in this cell (the dwell proxy)
    pub total_time: usize,
    /// Marker radius in pixels
    pub radius: f32,
    /// 1-based index in ascending dwell order, per player per call
    pub order: usize,
    /// Whether the snapped coordinate falls inside the venue bounds
    pub in_bounds: bool,
}

/// Snap a coordinate to its grid cell index.
///
/// `f64::round` rounds ties away from zero; the exact mode only matters for
/// samples landing on a cell boundary.
fn snap_index(value: f64, threshold: f64) -> i64 {
    (value / threshold).round() as i64
}

/// Marker radius for a dwell count.
///
/// The count is converted to dwell units, capped, then interpolated from
/// the unit domain [1, cap] onto [min_radius, max_radius]. Both domain
/// edges clamp, so tiny counts sit at `min_radius` rather than below it.
pub fn dwell_radius(total_time: usize, config: &AnalysisConfig) -> f32 {
    let t = (total_time as f64 / config.time_unit).min(TIME_UNIT_CAP);
    let frac = ((t - 1.0) / (TIME_UNIT_CAP - 1.0)).clamp(0.0, 1.0) as f32;
    config.min_radius + frac * (config.max_radius - config.min_radius)
}

/// Aggregate one player's positions into ordered dwell buckets
pub fn aggregate_positions<I>(positions: I, config: &AnalysisConfig) -> Vec<DwellBucket>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    // BTreeMap keys keep tie-breaking deterministic when counts are equal.
    let mut cells: BTreeMap<(i64, i64), usize> = BTreeMap::new();
    for (x, z) in positions {
        let key = (
            snap_index(x, config.group_threshold),
            snap_index(z, config.group_threshold),
        );
        *cells.entry(key).or_insert(0) += 1;
    }

    let mut grouped: Vec<((i64, i64), usize)> = cells
        .into_iter()
        .filter(|&(_, count)| count > config.min_duration)
        .collect();
    // Stable sort: equal counts stay in cell-key order.
    grouped.sort_by_key(|&(_, count)| count);

    grouped
        .into_iter()
        .enumerate()
        .map(|(i, ((ix, iz), count))| {
            let world_x = ix as f64 * config.group_threshold;
            let world_z = iz as f64 * config.group_threshold;
            DwellBucket {
                world_x,
                world_z,
                total_time: count,
                radius: dwell_radius(count, config),
                order: i + 1,
                in_bounds: config.bounds.contains(world_x, world_z),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeat(pos: (f64, f64), n: usize) -> Vec<(f64, f64)> {
        std::iter::repeat(pos).take(n).collect()
    }

    #[test]
    fn test_low_dwell_cluster_is_dropped() {
        // Six samples at the origin survive min_duration = 5; three at
        // (100, 100) do not.
        let config = AnalysisConfig::default();
        let mut positions = repeat((0.0, 0.0), 6);
        positions.extend(repeat((100.0, 100.0), 3));

        let buckets = aggregate_positions(positions, &config);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].total_time, 6);
        assert_eq!(buckets[0].world_x, 0.0);
        assert_eq!(buckets[0].world_z, 0.0);
    }

    #[test]
    fn test_dwell_floor_is_strict() {
        let config = AnalysisConfig::default();
        let at_floor = aggregate_positions(repeat((0.0, 0.0), config.min_duration), &config);
        assert!(at_floor.is_empty());

        let above = aggregate_positions(repeat((0.0, 0.0), config.min_duration + 1), &config);
        assert_eq!(above.len(), 1);
        assert_eq!(above[0].total_time, config.min_duration + 1);
    }

    #[test]
    fn test_nearby_samples_share_a_cell() {
        let config = AnalysisConfig::default();
        // Within one cell of group_threshold = 0.03 around the origin.
        let positions = vec![(0.0, 0.0), (0.01, -0.01), (-0.012, 0.009)]
            .into_iter()
            .cycle()
            .take(9)
            .collect::<Vec<_>>();
        let buckets = aggregate_positions(positions, &config);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].total_time, 9);
    }

    #[test]
    fn test_sequence_follows_ascending_dwell() {
        let config = AnalysisConfig::default();
        let mut positions = repeat((0.0, 0.0), 20);
        positions.extend(repeat((1.0, 1.0), 8));
        positions.extend(repeat((2.0, 2.0), 13));

        let buckets = aggregate_positions(positions, &config);
        assert_eq!(buckets.len(), 3);
        for (i, bucket) in buckets.iter().enumerate() {
            assert_eq!(bucket.order, i + 1);
        }
        assert_eq!(buckets[0].total_time, 8);
        assert_eq!(buckets[1].total_time, 13);
        assert_eq!(buckets[2].total_time, 20);
    }

    #[test]
    fn test_radius_is_monotone_and_clamped() {
        let config = AnalysisConfig::default();
        let mut prev = 0.0f32;
        for count in [6usize, 30, 60, 300, 600, 6000, 1_000_000] {
            let r = dwell_radius(count, &config);
            assert!(r >= prev, "radius shrank at count {}", count);
            assert!(r >= config.min_radius && r <= config.max_radius);
            prev = r;
        }
        // Just above the floor sits at the minimum radius, not below it.
        assert_eq!(
            dwell_radius(config.min_duration + 1, &config),
            config.min_radius
        );
        // Arbitrarily large dwell saturates at the maximum.
        assert_eq!(dwell_radius(1_000_000, &config), config.max_radius);
    }

    #[test]
    fn test_out_of_bounds_buckets_are_flagged_not_dropped() {
        let config = AnalysisConfig::default();
        let mut positions = repeat((0.0, 0.0), 6);
        positions.extend(repeat((500.0, 500.0), 6));

        let buckets = aggregate_positions(positions, &config);
        assert_eq!(buckets.len(), 2);
        let outside = buckets.iter().find(|b| b.world_x > 400.0).unwrap();
        assert!(!outside.in_bounds);
        let inside = buckets.iter().find(|b| b.world_x < 1.0).unwrap();
        assert!(inside.in_bounds);
    }
}
