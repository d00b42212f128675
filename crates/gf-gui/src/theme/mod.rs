//! Visual theme: colour palette and layout constants.

pub mod sprites;

use macroquad::prelude::*;

use gf_core::Rgb;

/// Initial window width in pixels.
pub const WINDOW_W: i32 = 800;
/// Initial window height in pixels.
pub const WINDOW_H: i32 = 600;

/// Height of one need bar.
pub const BAR_H: f32 = 4.0;
/// Vertical gap between stacked need bars.
pub const BAR_GAP: f32 = 1.0;
/// Font size for name and description labels.
pub const LABEL_SIZE: f32 = 16.0;
/// Font size for the HUD.
pub const HUD_SIZE: f32 = 18.0;

/// Meadow palette.
pub mod palette {
    use macroquad::prelude::Color;

    /// Grass background.
    pub const MEADOW: Color = Color::new(0.349, 0.663, 0.388, 1.0);
    /// Darker grass for the HUD panel.
    pub const MEADOW_DARK: Color = Color::new(0.180, 0.388, 0.216, 0.85);
    /// Black for bar troughs and outlines.
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
    /// White for primary text.
    pub const WHITE: Color = Color::new(1.0, 0.945, 0.910, 1.0);
    /// Light gray for secondary text.
    pub const LIGHT_GRAY: Color = Color::new(0.761, 0.765, 0.780, 1.0);
    /// Yellow for the selection outline.
    pub const YELLOW: Color = Color::new(1.0, 0.925, 0.153, 1.0);
}

/// Convert a profile colour to a macroquad colour.
pub fn rgb_color(rgb: Rgb) -> Color {
    let [r, g, b] = rgb.to_unit();
    Color::new(r, g, b, 1.0)
}
