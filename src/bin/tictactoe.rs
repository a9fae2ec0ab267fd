//! Tic-tac-toe CLI - play against an unbeatable minimax opponent
//!
//! - `play` (the default): interactive rounds on the terminal
//! - `analyze`: minimax scores for every computer move on a given board

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use minimax_tictactoe::cli::commands::{analyze, play};

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
struct Cli {
    /// Log search and round details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (default)
    Play(play::PlayArgs),

    /// Score every computer move on a board
    Analyze(analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Play(args)) => play::execute(args),
        Some(Commands::Analyze(args)) => analyze::execute(args),
        None => play::execute(play::PlayArgs::default()),
    }
}
