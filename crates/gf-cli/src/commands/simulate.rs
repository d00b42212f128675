use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use gf_simulation::{Action, NeedKind, SimConfig, SimEventKind, Simulation};

/// Options for a headless run.
pub struct SimulateArgs<'a> {
    pub roster: Option<&'a Path>,
    pub seconds: f32,
    pub fps: u32,
    pub seed: u64,
    pub width: u32,
    pub height: u32,
    pub feed: &'a [String],
    pub verbose: bool,
}

pub fn run(args: &SimulateArgs<'_>) -> Result<(), String> {
    let roster = super::load_roster(args.roster)?;
    if roster.creatures.is_empty() {
        println!("  No creatures in roster. Nothing to simulate.");
        return Ok(());
    }

    let config = SimConfig::default()
        .with_seed(args.seed)
        .with_bounds(args.width, args.height)
        .with_max_events(2000);
    let mut sim = Simulation::with_roster(config, &roster).map_err(|e| e.to_string())?;

    let frames = sim
        .run_for(args.seconds, args.fps)
        .map_err(|e| format!("simulation error: {e}"))?;
    for name in args.feed {
        sim.act_by_name(name, Action::Feed)
            .map_err(|e| e.to_string())?;
    }

    // Header
    println!(
        "  {} {}",
        "Simulation".bold(),
        format!(
            "({frames} frames, {}s at {}fps, seed={}, arena {})",
            args.seconds,
            args.fps,
            args.seed,
            sim.bounds()
        )
        .dimmed()
    );
    println!(
        "  {} creatures simulated, {} events logged",
        sim.len(),
        sim.events().len()
    );
    println!();

    // Events
    if args.verbose {
        println!("  {}", "Event Log".bold().underline());
        println!();
        for event in sim.events().events() {
            let frame_label = format!("[frame {:>5}]", event.frame).dimmed();
            let desc = colorize_event(&event.kind, &event.description);
            println!("  {frame_label} {desc}");
        }
        if sim.events().is_empty() {
            println!("  {}", "(no events)".dimmed());
        }
        println!();
    } else {
        let notable: Vec<_> = sim
            .events()
            .events()
            .iter()
            .filter(|e| {
                matches!(
                    e.kind,
                    SimEventKind::NeedUrgent { .. } | SimEventKind::ActionApplied { .. }
                )
            })
            .collect();

        if !notable.is_empty() {
            println!("  {}", "Notable Events".bold().underline());
            for event in &notable {
                match event.kind {
                    SimEventKind::NeedUrgent { .. } => {
                        println!("  {} {}", "URGENT".yellow().bold(), event.description);
                    }
                    _ => println!("  {}   {}", "CARE".green().bold(), event.description),
                }
            }
            println!();
        }
    }

    // Creature status table
    println!("  {}", "Creature Status".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Creature",
        "Species",
        "Happiness",
        "Love",
        "Play",
        "Food",
        "Sleep",
        "Position",
    ]);

    for (status, state) in sim.statuses().into_iter().zip(sim.draw_states()) {
        let mut row = vec![
            status.name.clone(),
            status.species.to_string(),
            format!("{:>3}", status.happiness_rounded()),
        ];
        row.extend(
            NeedKind::ALL
                .iter()
                .map(|need| format_need_bar(status.need(*need))),
        );
        let arrow = if state.facing.is_left() { "<" } else { ">" };
        row.push(format!("({}, {}) {arrow}", state.bbox.x, state.bbox.y));
        table.add_row(row);
    }

    println!("{table}");
    println!();

    Ok(())
}

fn colorize_event(kind: &SimEventKind, description: &str) -> colored::ColoredString {
    match kind {
        SimEventKind::CreatureAdded { .. } | SimEventKind::Adopted { .. } => description.bold(),
        SimEventKind::ActionApplied { .. } => description.green(),
        SimEventKind::NeedUrgent { .. } => description.yellow(),
        SimEventKind::TargetChosen { .. } | SimEventKind::Arrived { .. } => description.blue(),
        SimEventKind::Turned { .. } => description.dimmed(),
    }
}

/// Render a need level in `0..=100`. Higher is more urgent.
fn format_need_bar(val: f32) -> String {
    let pct = val.round() as u32;
    let filled = (val / 10.0).round() as usize;
    let empty = 10_usize.saturating_sub(filled);
    let bar = format!("{}{}", "#".repeat(filled), "-".repeat(empty));

    if val >= 80.0 {
        format!("[{}] {:>3}", bar.red(), pct)
    } else if val >= 50.0 {
        format!("[{}] {:>3}", bar.yellow(), pct)
    } else {
        format!("[{}] {:>3}", bar.green(), pct)
    }
}
