//! Application state for the gameplay screen.

use gf_core::CreatureId;
use gf_simulation::Simulation;

use crate::input::Command;

/// The running session plus UI state that is not part of the simulation.
#[derive(Debug)]
pub struct App {
    /// The gameplay session.
    pub sim: Simulation,
    /// Index of the selected creature in insertion order.
    pub selected: usize,
    /// Whether the loop should stop.
    pub should_quit: bool,
}

impl App {
    /// Wrap a session. The first creature starts selected.
    pub fn new(sim: Simulation) -> Self {
        Self {
            sim,
            selected: 0,
            should_quit: false,
        }
    }

    /// Id of the selected creature, if there is one.
    pub fn selected_id(&self) -> Option<CreatureId> {
        self.sim.ids().get(self.selected).copied()
    }

    /// Keep the arena matching the window. Fractional pixels are dropped.
    pub fn resize(&mut self, width: f32, height: f32) {
        let w = width.max(0.0) as u32;
        let h = height.max(0.0) as u32;
        self.sim.set_wander_bounds(w, h);
    }

    /// Apply one player command.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SelectNext => {
                let count = self.sim.len();
                if count > 0 {
                    self.selected = (self.selected + 1) % count;
                }
            }
            Command::Act(action) => {
                let Some(id) = self.selected_id() else {
                    return;
                };
                match self.sim.act(id, action) {
                    Ok(outcome) => log::info!(
                        "{action}: {} {:.0} -> {:.0}, happiness {:.0}",
                        outcome.need,
                        outcome.before,
                        outcome.after,
                        outcome.happiness
                    ),
                    Err(e) => log::warn!("{action} failed: {e}"),
                }
            }
            Command::ToggleBars => self.toggle(|d| d.show_bars = !d.show_bars),
            Command::ToggleName => self.toggle(|d| d.show_name = !d.show_name),
            Command::ToggleDescription => {
                self.toggle(|d| d.show_description = !d.show_description)
            }
            Command::ToggleInvert => self.toggle(|d| d.invert_bars = !d.invert_bars),
            Command::Quit => self.should_quit = true,
        }
    }

    /// Advance the session by one frame.
    pub fn frame(&mut self, delta_time: f32) {
        self.sim.update(delta_time);
    }

    fn toggle(&mut self, flip: impl FnOnce(&mut gf_simulation::DisplayFlags)) {
        let mut display = self.sim.display();
        flip(&mut display);
        self.sim.set_display(display);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::Roster;
    use gf_simulation::{Action, NeedKind, SimConfig};

    fn app() -> App {
        App::new(Simulation::with_roster(SimConfig::default(), &Roster::starter()).unwrap())
    }

    #[test]
    fn select_next_wraps() {
        let mut app = app();
        let first = app.selected_id();
        for _ in 0..4 {
            app.apply(Command::SelectNext);
        }
        assert_eq!(app.selected_id(), first);
        app.apply(Command::SelectNext);
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn act_targets_selected_creature() {
        let mut app = app();
        app.frame(10.0);
        app.apply(Command::SelectNext);
        app.apply(Command::Act(Action::Feed));

        let statuses = app.sim.statuses();
        assert!((statuses[0].need(NeedKind::Food) - 40.0).abs() < 1e-3);
        assert!((statuses[1].need(NeedKind::Food) - 25.0).abs() < 1e-3);
    }

    #[test]
    fn toggles_flip_display() {
        let mut app = app();
        app.apply(Command::ToggleBars);
        app.apply(Command::ToggleInvert);
        let display = app.sim.display();
        assert!(!display.show_bars);
        assert!(!display.invert_bars);
        assert!(display.show_name);
        app.apply(Command::ToggleBars);
        assert!(app.sim.display().show_bars);
    }

    #[test]
    fn resize_sets_bounds() {
        let mut app = app();
        app.resize(1024.7, 700.2);
        assert_eq!(app.sim.bounds(), gf_core::Size::new(1024, 700));
    }

    #[test]
    fn empty_session_ignores_selection() {
        let mut app = App::new(Simulation::new(SimConfig::default()));
        app.apply(Command::SelectNext);
        app.apply(Command::Act(Action::Play));
        assert_eq!(app.selected_id(), None);
        app.apply(Command::Quit);
        assert!(app.should_quit);
    }
}
