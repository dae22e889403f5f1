//! Ember CLI - headless host for the Ember particle engine

mod clock;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{init, run};

#[derive(Parser)]
#[command(name = "ember")]
#[command(about = "Pooled particle simulation engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default simulation config file
    Init {
        /// Output path for the config file
        #[arg(default_value = "ember.toml")]
        path: String,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Run a headless simulation and report particle stats
    Run {
        /// Path to a TOML config file (defaults apply when omitted)
        config: Option<String>,

        /// Simulated duration in seconds
        #[arg(long, default_value = "5.0")]
        duration: f32,

        /// Fixed timestep in seconds; runs flat-out and deterministic.
        /// Without it the loop follows wall-clock time.
        #[arg(long)]
        fixed_dt: Option<f32>,

        /// RNG seed for deterministic runs
        #[arg(long)]
        seed: Option<u32>,

        /// Seconds of simulated time between stats reports
        #[arg(long, default_value = "1.0")]
        report_every: f32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init { path, force } => init::run(&path, force),
        Commands::Run {
            config,
            duration,
            fixed_dt,
            seed,
            report_every,
        } => run::run(run::RunArgs {
            config,
            duration,
            fixed_dt,
            seed,
            report_every,
        }),
    }
}
