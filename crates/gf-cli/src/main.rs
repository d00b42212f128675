//! Headless CLI for Glimmerfield: manage rosters and run sessions without a window.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "glimmer",
    about = "Glimmerfield: look after unicorns and fairies from the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the starter roster to a JSON file
    Init {
        /// Roster file to create
        #[arg(short, long, default_value = "roster.json")]
        file: PathBuf,
    },

    /// List the creatures in a roster
    Roster {
        /// Roster file (default: built-in starter roster)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Run a headless session and report how every creature is doing
    Simulate {
        /// Seconds of simulated time
        #[arg(long, default_value = "10")]
        seconds: f32,

        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// RNG seed for deterministic wandering
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Arena width in pixels
        #[arg(long, default_value = "800")]
        width: u32,

        /// Arena height in pixels
        #[arg(long, default_value = "600")]
        height: u32,

        /// Feed these creatures once the run finishes
        #[arg(long, value_name = "NAME")]
        feed: Vec<String>,

        /// Show all events, including movement
        #[arg(short, long)]
        verbose: bool,

        /// Roster file (default: built-in starter roster)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Adopt a creature from the roster with a fresh player
    Adopt {
        /// Creature name (case-insensitive)
        name: String,

        /// Starting currency
        #[arg(short, long, default_value = "500")]
        currency: u32,

        /// Roster file (default: built-in starter roster)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { file } => commands::init::run(&file),
        Commands::Roster { file } => commands::roster::run(file.as_deref()),
        Commands::Simulate {
            seconds,
            fps,
            seed,
            width,
            height,
            feed,
            verbose,
            file,
        } => commands::simulate::run(&commands::simulate::SimulateArgs {
            roster: file.as_deref(),
            seconds,
            fps,
            seed,
            width,
            height,
            feed: &feed,
            verbose,
        }),
        Commands::Adopt {
            name,
            currency,
            file,
        } => commands::adopt::run(file.as_deref(), &name, currency),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
