use std::fs;
use std::path::Path;

use gf_core::Roster;

pub fn run(file: &Path) -> Result<(), String> {
    if file.exists() {
        return Err(format!("'{}' already exists", file.display()));
    }

    let roster = Roster::starter();
    let json = roster.to_json_pretty().map_err(|e| e.to_string())?;
    fs::write(file, json + "\n").map_err(|e| format!("cannot write {}: {e}", file.display()))?;

    println!(
        "Created roster {} with {} creatures",
        file.display(),
        roster.creatures.len()
    );
    println!();
    println!("Get started:");
    println!("  # Edit the file to rename, recolour, or add creatures");
    println!("  glimmer roster -f {}", file.display());
    println!("  glimmer simulate -f {}", file.display());

    Ok(())
}
