//! Gameplay screen: the meadow, every creature, and the HUD.

use macroquad::prelude::*;

use gf_simulation::DrawState;

use crate::app::App;
use crate::input::HELP;
use crate::theme::sprites::SpriteCache;
use crate::theme::{HUD_SIZE, LABEL_SIZE, palette, rgb_color};
use crate::widget::bar::{draw_bar_stack, stack_height};
use crate::widget::{bordered_rect, centered_text};

/// Draw the whole frame.
pub fn draw(app: &App, sprites: &mut SpriteCache) {
    clear_background(palette::MEADOW);

    let selected = app.selected_id();
    for state in app.sim.draw_states() {
        draw_creature(&state, sprites, selected == Some(state.id));
    }

    draw_hud(app);
}

fn draw_creature(state: &DrawState, sprites: &mut SpriteCache, selected: bool) {
    let x = state.bbox.x as f32;
    let y = state.bbox.y as f32 + state.lift;
    let w = state.bbox.width as f32;
    let h = state.bbox.height as f32;

    match sprites.get_or_build(state) {
        Some(texture) => draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                flip_x: state.facing.is_left(),
                ..Default::default()
            },
        ),
        None => draw_rectangle(x, y, w, h, rgb_color(state.appearance.body)),
    }

    if selected {
        draw_rectangle_lines(x - 2.0, y - 2.0, w + 4.0, h + 4.0, 1.0, palette::YELLOW);
    }

    let cx = x + w / 2.0;
    let mut top = y - 2.0;
    if !state.bars.is_empty() {
        draw_bar_stack(&state.bars, x, top, w);
        top -= stack_height(state.bars.len());
    }
    if let Some(name) = &state.name {
        centered_text(name, cx, top - 2.0, LABEL_SIZE, palette::WHITE);
    }
    if let Some(description) = &state.description {
        centered_text(
            description,
            cx,
            y + h + LABEL_SIZE,
            LABEL_SIZE,
            palette::LIGHT_GRAY,
        );
    }
}

fn draw_hud(app: &App) {
    let w = screen_width();
    let panel_h = HUD_SIZE * 2.0 + 8.0;
    bordered_rect(0.0, 0.0, w, panel_h, palette::MEADOW_DARK, palette::BLACK);

    let player = app.sim.player();
    let summary = match app.selected_id().and_then(|id| app.sim.status(id).ok()) {
        Some(status) => format!(
            "{} the {}  happiness {}  |  currency {}  level {}",
            status.name,
            status.species,
            status.happiness_rounded(),
            player.currency,
            player.level
        ),
        None => format!("No creatures  |  currency {}", player.currency),
    };
    draw_text(&summary, 6.0, HUD_SIZE, HUD_SIZE, palette::WHITE);
    draw_text(HELP, 6.0, HUD_SIZE * 2.0 + 2.0, HUD_SIZE, palette::LIGHT_GRAY);
}
