//! CLI frontend for the Spawnkit object registry and game loop.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sk",
    about = "Spawnkit — registry-driven game object spawning",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Spawn objects from a manifest and run update/render ticks
    Run {
        /// Manifest file listing one object kind per line
        manifest: PathBuf,

        /// Number of ticks to run
        #[arg(short, long, default_value = "1")]
        ticks: u64,

        /// Print the spawn report as JSON instead of a summary table
        #[arg(long)]
        json: bool,
    },

    /// Validate a manifest against the built-in kinds without spawning
    Check {
        /// Manifest file listing one object kind per line
        manifest: PathBuf,
    },

    /// List the object kinds available to spawn
    Kinds,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            manifest,
            ticks,
            json,
        } => commands::run::run(&manifest, ticks, json),
        Commands::Check { manifest } => commands::check::run(&manifest),
        Commands::Kinds => commands::kinds::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
