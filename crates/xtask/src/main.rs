//! Development tasks for the Celeste port
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{CheckContent, Clean, ListLogs, TailLogs};

/// Development tasks for the Celeste port
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the Celeste port", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Check that the critical content directories are installed
    CheckContent(CheckContent),

    /// List session logs and crash records
    ListLogs(ListLogs),

    /// Monitor session logs in real-time
    TailLogs(TailLogs),

    /// Clean logs and temporary files
    Clean(Clean),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for GAME_BASE_DIR)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.command {
        Command::CheckContent(cmd) => cmd.execute(),
        Command::ListLogs(cmd) => cmd.execute(),
        Command::TailLogs(cmd) => cmd.execute(),
        Command::Clean(cmd) => cmd.execute(),
    }
}
