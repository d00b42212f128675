use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(file: Option<&Path>) -> Result<(), String> {
    let roster = super::load_roster(file)?;

    if roster.creatures.is_empty() {
        println!("  No creatures in roster.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Species", "Cost", "Description"]);
    for entry in &roster.creatures {
        table.add_row(vec![
            entry.name.clone(),
            entry.species.to_string(),
            entry.cost.to_string(),
            entry.description.clone(),
        ]);
    }

    println!(
        "  {} {}",
        "Roster".bold(),
        format!("({} creatures)", roster.creatures.len()).dimmed()
    );
    println!();
    println!("{table}");

    Ok(())
}
