//! oxo CLI - tic-tac-toe against a minimax computer opponent
//!
//! This CLI provides:
//! - An interactive game against the computer at three difficulty levels
//! - Position analysis with per-move search scores
//! - Engine selfplay against a random mover

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Tic-tac-toe against a minimax computer opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the computer
    Play(oxo::cli::commands::play::PlayArgs),

    /// Analyze a position and report the engine's move choice
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Pit the engine against a random mover over many games
    Selfplay(oxo::cli::commands::selfplay::SelfplayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Selfplay(args) => oxo::cli::commands::selfplay::execute(args),
    }
}
