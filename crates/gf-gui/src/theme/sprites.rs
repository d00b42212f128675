//! Procedural pixel art for unicorns and fairies.
//!
//! Sprites are painted facing right from simple shapes in unit space, so any
//! footprint works. Each creature gets its own texture, built on first draw.
//! When a texture cannot be built the caller falls back to a plain rectangle.

use std::collections::HashMap;

use macroquad::prelude::*;

use gf_core::{Appearance, CreatureId, Rgb, Size, Species};
use gf_simulation::DrawState;

/// Largest sprite edge we will paint.
const MAX_EDGE: u32 = 1024;

const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];
const EYE: [u8; 4] = [20, 20, 30, 255];
const HORN: [u8; 4] = [255, 215, 90, 255];

fn opaque(rgb: Rgb) -> [u8; 4] {
    [rgb.0, rgb.1, rgb.2, 255]
}

fn shade(rgb: Rgb, factor: f32) -> [u8; 4] {
    let f = |c: u8| (f32::from(c) * factor).clamp(0.0, 255.0) as u8;
    [f(rgb.0), f(rgb.1), f(rgb.2), 255]
}

fn in_ellipse(u: f32, v: f32, cx: f32, cy: f32, rx: f32, ry: f32) -> bool {
    let du = (u - cx) / rx;
    let dv = (v - cy) / ry;
    du * du + dv * dv <= 1.0
}

fn in_rect(u: f32, v: f32, x0: f32, y0: f32, x1: f32, y1: f32) -> bool {
    u >= x0 && u <= x1 && v >= y0 && v <= y1
}

fn unicorn_pixel(u: f32, v: f32, look: Appearance) -> [u8; 4] {
    if in_ellipse(u, v, 0.83, 0.31, 0.025, 0.035) {
        return EYE;
    }
    // Horn narrows from the forehead to the tip.
    if (0.02..=0.22).contains(&v) {
        let half_width = 0.005 + 0.03 * (v - 0.02) / 0.2;
        let centre = 0.86 + (0.22 - v) * 0.3;
        if (u - centre).abs() <= half_width {
            return HORN;
        }
    }
    if in_ellipse(u, v, 0.66, 0.32, 0.08, 0.15) || in_ellipse(u, v, 0.12, 0.5, 0.07, 0.16) {
        return opaque(look.accent);
    }
    if in_ellipse(u, v, 0.8, 0.33, 0.13, 0.11) || in_ellipse(u, v, 0.45, 0.55, 0.32, 0.19) {
        return opaque(look.body);
    }
    let legs = [(0.2, 0.26), (0.31, 0.37), (0.53, 0.59), (0.64, 0.7)];
    if legs
        .iter()
        .any(|&(x0, x1)| in_rect(u, v, x0, 0.62, x1, 0.96))
    {
        return shade(look.body, 0.85);
    }
    TRANSPARENT
}

fn fairy_pixel(u: f32, v: f32, look: Appearance) -> [u8; 4] {
    if in_ellipse(u, v, 0.55, 0.27, 0.03, 0.03) {
        return EYE;
    }
    if in_ellipse(u, v, 0.5, 0.28, 0.13, 0.13) || in_ellipse(u, v, 0.5, 0.62, 0.1, 0.26) {
        return opaque(look.body);
    }
    if in_ellipse(u, v, 0.27, 0.45, 0.21, 0.19) || in_ellipse(u, v, 0.73, 0.45, 0.21, 0.19) {
        let [r, g, b, _] = opaque(look.accent);
        return [r, g, b, 190];
    }
    TRANSPARENT
}

/// Paint an RGBA8 sprite of `size` pixels, or `None` when the footprint is
/// empty or too large to paint.
pub fn sprite_pixels(species: Species, look: Appearance, size: Size) -> Option<Vec<u8>> {
    if size.is_empty() || size.width > MAX_EDGE || size.height > MAX_EDGE {
        return None;
    }
    let (w, h) = (size.width as usize, size.height as usize);
    let mut pixels = vec![0u8; w * h * 4];
    for y in 0..h {
        for x in 0..w {
            let u = (x as f32 + 0.5) / w as f32;
            let v = (y as f32 + 0.5) / h as f32;
            let rgba = match species {
                Species::Unicorn => unicorn_pixel(u, v, look),
                Species::Fairy => fairy_pixel(u, v, look),
            };
            let p = (y * w + x) * 4;
            pixels[p..p + 4].copy_from_slice(&rgba);
        }
    }
    Some(pixels)
}

/// Lazily built sprite textures, one per creature.
#[derive(Default)]
pub struct SpriteCache {
    textures: HashMap<CreatureId, Option<Texture2D>>,
}

impl SpriteCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Texture for this creature, building it on first use. `None` means draw the fallback.
    pub fn get_or_build(&mut self, state: &DrawState) -> Option<&Texture2D> {
        self.textures
            .entry(state.id)
            .or_insert_with(|| build_texture(state))
            .as_ref()
    }
}

fn build_texture(state: &DrawState) -> Option<Texture2D> {
    let size = Size::new(state.bbox.width, state.bbox.height);
    let Some(pixels) = sprite_pixels(state.species, state.appearance, size) else {
        log::warn!(
            "no sprite for {} {} ({size}); drawing a rectangle instead",
            state.species,
            state.id
        );
        return None;
    };
    let texture = Texture2D::from_rgba8(size.width as u16, size.height as u16, &pixels);
    texture.set_filter(FilterMode::Nearest);
    log::debug!("built {size} sprite for {} {}", state.species, state.id);
    Some(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(pixels: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let p = ((y * width + x) * 4) as usize;
        [pixels[p], pixels[p + 1], pixels[p + 2], pixels[p + 3]]
    }

    #[test]
    fn empty_or_huge_sizes_fall_back() {
        let look = Appearance::for_species(Species::Unicorn);
        assert!(sprite_pixels(Species::Unicorn, look, Size::new(0, 50)).is_none());
        assert!(sprite_pixels(Species::Unicorn, look, Size::new(50, 5000)).is_none());
    }

    #[test]
    fn buffer_matches_footprint() {
        let look = Appearance::for_species(Species::Fairy);
        let pixels = sprite_pixels(Species::Fairy, look, Size::new(30, 40)).unwrap();
        assert_eq!(pixels.len(), 30 * 40 * 4);
    }

    #[test]
    fn unicorn_uses_profile_colours() {
        let look = Appearance {
            body: Rgb(10, 20, 30),
            accent: Rgb(200, 100, 50),
        };
        let pixels = sprite_pixels(Species::Unicorn, look, Size::new(50, 50)).unwrap();
        // Body centre, mane, and an empty corner.
        assert_eq!(pixel(&pixels, 50, 22, 27), [10, 20, 30, 255]);
        assert_eq!(pixel(&pixels, 50, 33, 16), [200, 100, 50, 255]);
        assert_eq!(pixel(&pixels, 50, 0, 0)[3], 0);
    }

    #[test]
    fn fairy_wings_are_translucent() {
        let look = Appearance::for_species(Species::Fairy);
        let pixels = sprite_pixels(Species::Fairy, look, Size::new(50, 50)).unwrap();
        let wing = pixel(&pixels, 50, 10, 22);
        assert_eq!(wing[3], 190);
        assert_eq!(&wing[..3], &opaque(look.accent)[..3]);
    }
}
