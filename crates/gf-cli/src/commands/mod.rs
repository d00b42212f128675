pub mod adopt;
pub mod init;
pub mod roster;
pub mod simulate;

use std::path::Path;

use gf_core::Roster;

/// Load a roster file, or the built-in starter roster when none is given.
fn load_roster(file: Option<&Path>) -> Result<Roster, String> {
    match file {
        Some(path) => Roster::load(path).map_err(|e| e.to_string()),
        None => Ok(Roster::starter()),
    }
}
