//! Canvas composition
//!
//! Each render pass starts from a fresh copy of the floor plan and stamps
//! the selected players' dwell buckets onto it: translucent filled circle,
//! black outline, centered sequence label, and a path line from the
//! previous in-bounds bucket of the same player. Out-of-bounds buckets are
//! skipped entirely and break the path chain so no line spans a gap.

use std::fs;

use ab_glyph::{FontVec, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    Blend, draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut, draw_text_mut,
    text_size,
};

use crate::aggregate::aggregate_positions;
use crate::config::AnalysisConfig;
use crate::constants::{FONT_SEARCH_PATHS, LABEL_SCALE_FACTOR, MARKER_FILL_ALPHA};
use crate::coords::world_to_pixel;
use crate::data::{FloorPlan, PositionTable};
use crate::palette::PlayerColors;

const OUTLINE: Rgba<u8> = Rgba([0, 0, 0, 255]);
const LABEL: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Everything a render pass reads: the immutable state built at startup.
///
/// Bucket data is derived fresh from `table` on every call, so repeated
/// renders of the same player always reflect the same loaded data and
/// reassign sequence indices from scratch.
pub struct AnalysisContext {
    pub config: AnalysisConfig,
    pub table: PositionTable,
    pub floor_plan: FloorPlan,
    pub colors: PlayerColors,
    pub font: Option<FontVec>,
}

impl AnalysisContext {
    /// Render the given players onto a fresh canvas
    pub fn render(&self, selected: &[&str]) -> RgbaImage {
        let width = self.floor_plan.width();
        let height = self.floor_plan.height();
        let mut canvas = Blend(self.floor_plan.image.clone());

        for player in selected {
            let Some(color) = self.colors.color_of(player) else {
                continue;
            };
            let fill = Rgba([color[0], color[1], color[2], MARKER_FILL_ALPHA]);
            let buckets = aggregate_positions(self.table.positions_for(player), &self.config);

            let mut prev: Option<(f32, f32)> = None;
            for bucket in &buckets {
                if !bucket.in_bounds {
                    prev = None;
                    continue;
                }

                let (px, pz) = world_to_pixel(
                    bucket.world_x,
                    bucket.world_z,
                    &self.config.bounds,
                    width,
                    height,
                );
                let center = (px as f32, pz as f32);

                if let Some(start) = prev {
                    draw_line_segment_mut(&mut canvas, start, center, color);
                }

                let radius = bucket.radius.round() as i32;
                draw_filled_circle_mut(&mut canvas, (px as i32, pz as i32), radius, fill);
                draw_hollow_circle_mut(&mut canvas, (px as i32, pz as i32), radius, OUTLINE);

                if let Some(font) = &self.font {
                    let text = bucket.order.to_string();
                    let scale = PxScale::from(bucket.radius * LABEL_SCALE_FACTOR);
                    let (tw, th) = text_size(scale, font, &text);
                    draw_text_mut(
                        &mut canvas,
                        LABEL,
                        px as i32 - tw as i32 / 2,
                        pz as i32 - th as i32 / 2,
                        scale,
                        font,
                        &text,
                    );
                }

                prev = Some(center);
            }
        }

        canvas.0
    }

    /// Render every known player (the initial full-population view)
    pub fn render_all(&self) -> RgbaImage {
        let players: Vec<&str> = self.colors.players().iter().map(String::as_str).collect();
        self.render(&players)
    }
}

/// Load the marker-label font from the configured path or common system
/// locations. Labels are skipped when nothing is found; markers and path
/// lines still draw.
pub fn load_label_font(configured: Option<&str>) -> Option<FontVec> {
    let candidates = configured
        .into_iter()
        .chain(FONT_SEARCH_PATHS.iter().copied());

    for path in candidates {
        if let Ok(bytes) = fs::read(path) {
            match FontVec::try_from_vec_and_index(bytes, 0) {
                Ok(font) => return Some(font),
                Err(err) => eprintln!("Warning: {} is not a usable font: {}", path, err),
            }
        }
    }

    eprintln!("Warning: no label font found, marker numbers will be skipped");
    None
}
