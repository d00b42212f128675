//! Pixel art gameplay window for Glimmerfield: macroquad entry point.
//!
//! Each frame reads the elapsed time, applies key presses, advances the
//! session, and redraws. The arena always matches the window size.

use macroquad::prelude::*;

use gf_core::Roster;
use gf_gui::app::App;
use gf_gui::input::pressed_commands;
use gf_gui::play;
use gf_gui::theme::sprites::SpriteCache;
use gf_gui::theme::{WINDOW_H, WINDOW_W};
use gf_simulation::{SimConfig, Simulation};

fn window_conf() -> Conf {
    Conf {
        window_title: "Glimmerfield".to_owned(),
        window_width: WINDOW_W,
        window_height: WINDOW_H,
        window_resizable: true,
        ..Default::default()
    }
}

/// Value following `flag` on the command line.
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].clone())
}

fn load_roster(path: Option<&str>) -> Roster {
    let Some(path) = path else {
        return Roster::starter();
    };
    match Roster::load(std::path::Path::new(path)) {
        Ok(roster) => roster,
        Err(e) => {
            log::warn!("{e}; using the starter roster");
            Roster::starter()
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse CLI args: --roster <file> --seed <n>
    let args: Vec<String> = std::env::args().collect();
    let roster = load_roster(arg_value(&args, "--roster").as_deref());
    let seed = arg_value(&args, "--seed")
        .and_then(|s| s.parse().ok())
        .unwrap_or(SimConfig::default().seed);

    let config = SimConfig::default()
        .with_seed(seed)
        .with_bounds(screen_width() as u32, screen_height() as u32);
    let sim = match Simulation::with_roster(config.clone(), &roster) {
        Ok(sim) => sim,
        Err(e) => {
            log::error!("cannot start session: {e}");
            Simulation::new(config)
        }
    };
    let mut app = App::new(sim);
    let mut sprites = SpriteCache::new();

    loop {
        app.resize(screen_width(), screen_height());
        for command in pressed_commands() {
            app.apply(command);
        }
        app.frame(get_frame_time());

        play::draw(&app, &mut sprites);

        if app.should_quit {
            break;
        }

        next_frame().await;
    }
}
