//! Expedition generator entry point.
//!
//! Run with: `expedition <command>`

mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use commands::{Generate, List, Replay};

/// Deterministic expedition generator
#[derive(Parser)]
#[command(name = "expedition")]
#[command(about = "Generate, replay and audit seeded expeditions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate a new expedition
    Generate(Generate),

    /// Replay a saved expedition and verify it against its seed
    Replay(Replay),

    /// List variants and market setups of the content directory
    List(List),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Generate(cmd) => cmd.execute(),
        Command::Replay(cmd) => cmd.execute(),
        Command::List(cmd) => cmd.execute(),
    }
}
