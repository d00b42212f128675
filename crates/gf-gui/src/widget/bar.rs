//! Need bar widget.

use macroquad::prelude::*;

use gf_simulation::BarState;

use crate::theme::{BAR_GAP, BAR_H, palette, rgb_color};

/// Draw one bar filled to `bar.ratio`.
pub fn draw_need_bar(bar: &BarState, x: f32, y: f32, w: f32) {
    draw_rectangle(x, y, w, BAR_H, palette::BLACK);
    let fill = (w - 2.0).max(0.0) * bar.ratio.clamp(0.0, 1.0);
    if fill > 0.0 {
        draw_rectangle(x + 1.0, y + 1.0, fill, BAR_H - 2.0, rgb_color(bar.color));
    }
}

/// Total height of `count` stacked bars.
pub fn stack_height(count: usize) -> f32 {
    count as f32 * (BAR_H + BAR_GAP)
}

/// Draw bars stacked upward so the last one sits just above `bottom`.
pub fn draw_bar_stack(bars: &[BarState], x: f32, bottom: f32, w: f32) {
    let top = bottom - stack_height(bars.len());
    for (i, bar) in bars.iter().enumerate() {
        draw_need_bar(bar, x, top + i as f32 * (BAR_H + BAR_GAP), w);
    }
}
