//! Clean logs and temporary files command
//!
//! Removes the `Logs/` and `Temp/` trees under the base directory.
//! `Content/` and `Saves/` are never touched.
//!
//! Safety: Always prompts for confirmation before deletion.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use crate::dirs;

/// Clean logs and temporary files
#[derive(Parser, Debug)]
pub struct Clean {
    /// Clean only logs
    #[arg(long)]
    pub logs: bool,

    /// Clean only temporary files
    #[arg(long)]
    pub temp: bool,

    /// Skip confirmation prompt (dangerous!)
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Base directory (defaults to GAME_BASE_DIR or the platform data directory)
    #[arg(long)]
    pub base: Option<PathBuf>,
}

impl Clean {
    pub fn execute(self) -> Result<()> {
        let paths = dirs::paths(self.base.clone());

        // If no flags specified, clean both
        let clean_logs = self.logs || !self.temp;
        let clean_temp = self.temp || !self.logs;

        let mut targets = Vec::new();
        if clean_logs && paths.logs_root().exists() {
            targets.push(("Logs", paths.logs_root().to_path_buf()));
        }
        if clean_temp && paths.temp_root().exists() {
            targets.push(("Temporary files", paths.temp_root().to_path_buf()));
        }

        if targets.is_empty() {
            println!(
                "{}",
                style("Nothing to clean - directories don't exist yet").dim()
            );
            return Ok(());
        }

        println!("{}", style("Clean Game Data").yellow().bold());
        println!();
        println!("The following will be deleted:");
        for (label, path) in &targets {
            println!("  {} {}", style("→").cyan(), style(label).bold());
            println!("    {}", style(path.display()).dim());
        }
        println!();

        if !self.yes && !confirm()? {
            println!("{}", style("Cancelled").dim());
            return Ok(());
        }

        for (label, path) in targets {
            print!("Deleting {}... ", label);
            io::stdout().flush()?;

            std::fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to delete: {}", path.display()))?;

            println!("{}", style("✓").green());
        }

        println!();
        println!("{}", style("✓ Cleanup complete!").green().bold());

        Ok(())
    }
}

/// Prompt user for confirmation
fn confirm() -> Result<bool> {
    print!("{} ", style("Proceed? [y/N]").yellow().bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let input = input.trim().to_lowercase();
    Ok(input == "y" || input == "yes")
}
