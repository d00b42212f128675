use std::path::Path;

use colored::Colorize;

use gf_core::PlayerData;
use gf_simulation::{SimConfig, Simulation};

pub fn run(file: Option<&Path>, name: &str, currency: u32) -> Result<(), String> {
    let roster = super::load_roster(file)?;
    let entry = roster
        .find(name)
        .ok_or_else(|| format!("no creature named '{name}' in roster"))?;
    let profile = entry.clone().into_profile().map_err(|e| e.to_string())?;
    let (species, cost) = (profile.species, profile.cost);
    let display_name = profile.name.clone();

    let mut sim =
        Simulation::new(SimConfig::default()).with_player(PlayerData::with_currency(currency));
    sim.adopt(profile).map_err(|e| e.to_string())?;

    let player = sim.player();
    println!(
        "  {} {display_name} the {species} for {cost}",
        "Adopted".green().bold()
    );
    println!();
    println!("  Currency:   {}", player.currency);
    println!("  Reputation: {}", player.reputation);
    println!("  Level:      {}", player.level);

    Ok(())
}
