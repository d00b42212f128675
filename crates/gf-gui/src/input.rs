//! Keyboard bindings for the gameplay screen.

use macroquad::prelude::*;

use gf_simulation::Action;

/// Something the player asked for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Select the next creature, wrapping around.
    SelectNext,
    /// Apply an action to the selected creature.
    Act(Action),
    /// Show or hide need bars.
    ToggleBars,
    /// Show or hide name labels.
    ToggleName,
    /// Show or hide description labels.
    ToggleDescription,
    /// Switch bars between urgency and satisfaction.
    ToggleInvert,
    /// Close the window.
    Quit,
}

/// Every key with a binding, in the order commands are applied.
pub const BOUND_KEYS: [KeyCode; 10] = [
    KeyCode::Tab,
    KeyCode::F,
    KeyCode::L,
    KeyCode::P,
    KeyCode::S,
    KeyCode::B,
    KeyCode::N,
    KeyCode::D,
    KeyCode::I,
    KeyCode::Escape,
];

/// Map a key to its command.
pub fn command_for_key(key: KeyCode) -> Option<Command> {
    let command = match key {
        KeyCode::Tab => Command::SelectNext,
        KeyCode::F => Command::Act(Action::Feed),
        KeyCode::L => Command::Act(Action::GiveLove),
        KeyCode::P => Command::Act(Action::Play),
        KeyCode::S => Command::Act(Action::Sleep),
        KeyCode::B => Command::ToggleBars,
        KeyCode::N => Command::ToggleName,
        KeyCode::D => Command::ToggleDescription,
        KeyCode::I => Command::ToggleInvert,
        KeyCode::Escape => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Commands for every bound key pressed this frame.
pub fn pressed_commands() -> Vec<Command> {
    BOUND_KEYS
        .iter()
        .filter(|key| is_key_pressed(**key))
        .filter_map(|key| command_for_key(*key))
        .collect()
}

/// One-line key reference for the HUD.
pub const HELP: &str =
    "Tab select  F feed  L love  P play  S sleep  |  B bars  N names  D descriptions  I invert";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bound_key_has_a_command() {
        for key in BOUND_KEYS {
            assert!(command_for_key(key).is_some(), "{key:?} is unbound");
        }
    }

    #[test]
    fn action_keys() {
        assert_eq!(
            command_for_key(KeyCode::F),
            Some(Command::Act(Action::Feed))
        );
        assert_eq!(
            command_for_key(KeyCode::L),
            Some(Command::Act(Action::GiveLove))
        );
        assert_eq!(command_for_key(KeyCode::Q), None);
    }
}
