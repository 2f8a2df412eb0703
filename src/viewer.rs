//! Windowed canvas display
//!
//! Composed canvases are uploaded as textures and drawn scaled-to-fit every
//! frame, which keeps the window's event pump serviced while the console
//! loop waits for input. Each per-player query adds a canvas; earlier ones
//! stay available and the arrow keys page through them.

use image::RgbaImage;
use macroquad::prelude::{
    Color, Conf, DrawTextureParams, FilterMode, Texture2D, WHITE, clear_background, draw_text,
    draw_texture_ex, screen_height, screen_width, vec2,
};

/// Window background behind letterboxed canvases
const BACKDROP: Color = Color::new(0.09, 0.09, 0.11, 1.0);

/// One rendered canvas kept alive for paging
pub struct Canvas {
    /// Caption shown in the corner ("All players" or a player id)
    pub label: String,
    pub texture: Texture2D,
}

/// Upload a composed image as a display canvas
pub fn canvas_from_image(label: &str, image: &RgbaImage) -> Canvas {
    let texture = Texture2D::from_rgba8(
        image.width() as u16,
        image.height() as u16,
        image.as_raw(),
    );
    texture.set_filter(FilterMode::Linear);
    Canvas {
        label: label.to_string(),
        texture,
    }
}

/// Draw one canvas scaled to fit the window, centered, with its caption
pub fn draw_canvas(canvas: &Canvas, page: usize, total: usize) {
    clear_background(BACKDROP);

    let (tex_w, tex_h) = (canvas.texture.width(), canvas.texture.height());
    let scale = (screen_width() / tex_w).min(screen_height() / tex_h);
    let dest = vec2(tex_w * scale, tex_h * scale);
    let x = (screen_width() - dest.x) / 2.0;
    let y = (screen_height() - dest.y) / 2.0;

    draw_texture_ex(
        canvas.texture,
        x,
        y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(dest),
            ..Default::default()
        },
    );

    let caption = format!("{} [{}/{}]  <- -> to page", canvas.label, page + 1, total);
    draw_text(&caption, 12.0, 22.0, 22.0, WHITE);
}

/// Window configuration for the viewer binary
pub fn window_conf() -> Conf {
    Conf {
        window_title: "hotzone - venue dwell map".to_string(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}
