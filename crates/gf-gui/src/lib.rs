//! Pixel art gameplay screen for Glimmerfield.
//!
//! A macroquad window that drives a [`gf_simulation::Simulation`] once per
//! frame and draws every creature from its owned draw snapshot.

pub mod app;
pub mod input;
pub mod play;
pub mod theme;
pub mod widget;
