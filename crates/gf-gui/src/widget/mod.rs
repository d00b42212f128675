//! Small drawing helpers shared by the gameplay screen.

pub mod bar;

use macroquad::prelude::*;

/// Draw a filled rectangle with a 1-pixel border inside its bounds.
pub fn bordered_rect(x: f32, y: f32, w: f32, h: f32, fill: Color, border: Color) {
    draw_rectangle(x, y, w, h, fill);
    draw_rectangle_lines(x, y, w, h, 1.0, border);
}

/// Draw text horizontally centred on `cx` with its baseline at `y`.
pub fn centered_text(text: &str, cx: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, cx - dims.width / 2.0, y, size, color);
}
