//! List session logs and crash records command

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use client_bootstrap::list_sessions;
use console::style;
use platform_services::logging::list_crash_records;

use crate::dirs;

/// List session logs and crash records
#[derive(Parser, Debug)]
pub struct ListLogs {
    /// Base directory (defaults to GAME_BASE_DIR or the platform data directory)
    #[arg(long)]
    pub base: Option<PathBuf>,
}

impl ListLogs {
    pub fn execute(self) -> Result<()> {
        let logs_root = dirs::paths(self.base).logs_root().to_path_buf();

        if !logs_root.exists() {
            println!("{}", style("No logs yet").dim());
            println!("  Path: {}", style(logs_root.display()).dim());
            return Ok(());
        }

        let sessions = list_sessions(&logs_root);
        println!(
            "{} ({})",
            style("Sessions").green().bold(),
            sessions.len()
        );
        for session in &sessions {
            println!(
                "  {}  {}",
                style(session.started_at.format("%Y-%m-%d %H:%M:%S")).cyan(),
                session.session_id
            );
        }
        println!();

        let crashes = list_crash_records(&logs_root);
        let title = if crashes.is_empty() {
            style("Crash records").green().bold()
        } else {
            style("Crash records").red().bold()
        };
        println!("{} ({})", title, crashes.len());
        for path in &crashes {
            println!("  {}", style(path.display()).dim());
        }

        Ok(())
    }
}
