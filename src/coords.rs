//! World-to-pixel coordinate mapping
//!
//! The floor-plan raster covers exactly the world rectangle described by
//! [`VenueBounds`]; a tracked position maps onto the image by normalizing
//! against those bounds. World Z grows away from the camera while image Y
//! grows downward, so the Z axis is flipped.

use serde::{Deserialize, Serialize};

use crate::constants::{VENUE_BOTTOM, VENUE_LEFT, VENUE_RIGHT, VENUE_TOP};

/// World-coordinate rectangle covered by the floor plan
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VenueBounds {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for VenueBounds {
    fn default() -> Self {
        Self {
            left: VENUE_LEFT,
            right: VENUE_RIGHT,
            bottom: VENUE_BOTTOM,
            top: VENUE_TOP,
        }
    }
}

impl VenueBounds {
    /// Whether a world position falls inside the venue rectangle (inclusive)
    pub fn contains(&self, x: f64, z: f64) -> bool {
        self.left <= x && x <= self.right && self.bottom <= z && z <= self.top
    }
}

/// Map a world position to image pixel coordinates.
///
/// No clamping: callers bounds-check world coordinates before drawing, so
/// out-of-range inputs simply yield off-canvas pixels. Degenerate bounds
/// (zero width or height) are a configuration error, not a runtime case.
pub fn world_to_pixel(
    x: f64,
    z: f64,
    bounds: &VenueBounds,
    img_width: u32,
    img_height: u32,
) -> (i64, i64) {
    let px = ((x - bounds.left) / (bounds.right - bounds.left) * img_width as f64).floor();
    let pz = ((1.0 - (z - bounds.bottom) / (bounds.top - bounds.bottom)) * img_height as f64)
        .floor();
    (px as i64, pz as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_positions_land_on_canvas() {
        let bounds = VenueBounds::default();
        let (w, h) = (2400u32, 1000u32);

        for ix in 1..20 {
            for iz in 1..20 {
                let x = bounds.left + (bounds.right - bounds.left) * ix as f64 / 20.0;
                let z = bounds.bottom + (bounds.top - bounds.bottom) * iz as f64 / 20.0;
                let (px, pz) = world_to_pixel(x, z, &bounds, w, h);
                assert!(px >= 0 && px < w as i64, "px {} out of range for x {}", px, x);
                assert!(pz >= 0 && pz < h as i64, "pz {} out of range for z {}", pz, z);
            }
        }
    }

    #[test]
    fn test_corners_map_to_image_corners() {
        let bounds = VenueBounds::default();
        // Left edge maps to column 0, top edge to row 0.
        let (px, pz) = world_to_pixel(bounds.left, bounds.top, &bounds, 800, 600);
        assert_eq!((px, pz), (0, 0));
        // Right/bottom edges fall just past the canvas by the formula.
        let (px, pz) = world_to_pixel(bounds.right, bounds.bottom, &bounds, 800, 600);
        assert_eq!((px, pz), (800, 600));
    }

    #[test]
    fn test_out_of_range_yields_off_canvas_pixels() {
        let bounds = VenueBounds::default();
        let (px, _) = world_to_pixel(bounds.left - 100.0, 0.0, &bounds, 800, 600);
        assert!(px < 0);
        let (_, pz) = world_to_pixel(0.0, bounds.top + 100.0, &bounds, 800, 600);
        assert!(pz < 0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let bounds = VenueBounds::default();
        assert!(bounds.contains(bounds.left, bounds.bottom));
        assert!(bounds.contains(bounds.right, bounds.top));
        assert!(!bounds.contains(bounds.right + 0.1, 0.0));
        assert!(!bounds.contains(0.0, bounds.bottom - 0.1));
    }
}
