//! Tail session logs command
//!
//! Monitors session logs in real-time, similar to `tail -f`.
//! Follows the latest session unless a session id is given.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use client_bootstrap::{find_latest_session, find_session};
use console::style;

use crate::dirs;

/// Monitor session logs in real-time
#[derive(Parser, Debug)]
pub struct TailLogs {
    /// Session id to monitor, e.g. `session_2026-01-30_12-30-45` (defaults to latest)
    pub session: Option<String>,

    /// Number of lines to show from history before tailing
    #[arg(short = 'n', long, default_value = "10")]
    pub lines: usize,

    /// Poll interval in milliseconds
    #[arg(long, default_value = "100")]
    pub poll_interval: u64,

    /// Base directory (defaults to GAME_BASE_DIR or the platform data directory)
    #[arg(long)]
    pub base: Option<PathBuf>,
}

impl TailLogs {
    pub fn execute(self) -> Result<()> {
        let logs_root = dirs::paths(self.base.clone()).logs_root().to_path_buf();

        if !logs_root.exists() {
            eprintln!("{}", style("✗ Log directory not found").red().bold());
            eprintln!("  Path: {}", style(logs_root.display()).dim());
            eprintln!();
            eprintln!("  Run the client first to generate logs:");
            eprintln!("    {}", style("cargo run -p game-client").cyan());
            anyhow::bail!("Log directory does not exist");
        }

        let session = match self.session.as_deref() {
            Some(id) => find_session(&logs_root, id)
                .with_context(|| format!("Session not found: {id}"))?,
            None => find_latest_session(&logs_root).context("No session logs found")?,
        };

        println!("{}", style("Monitoring Session Log").green().bold());
        println!("  Session:  {}", style(&session.session_id).cyan());
        println!("  Log file: {}", style(session.path.display()).dim());
        println!();

        self.tail_file(&session.path)
    }

    /// Print the last N lines, then follow new content.
    ///
    /// The logger writes in batches, so new lines show up after each flush.
    fn tail_file(&self, path: &Path) -> Result<()> {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        for line in last_lines(&mut file, self.lines)? {
            println!("{}", line);
        }

        let mut reader = BufReader::new(file);
        let poll_interval = Duration::from_millis(self.poll_interval);

        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                Ok(0) => std::thread::sleep(poll_interval),
                Ok(_) => print!("{}", line),
                Err(e) => {
                    eprintln!("{}", style(format!("Error reading log file: {}", e)).red());
                    anyhow::bail!("Failed to read log file");
                }
            }
        }
    }
}

/// Read the last `n` lines, leaving the cursor at end of file.
fn last_lines(file: &mut File, n: usize) -> Result<Vec<String>> {
    file.seek(SeekFrom::Start(0))?;

    let lines = BufReader::new(&mut *file)
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .context("Failed to read lines from log file")?;

    file.seek(SeekFrom::End(0))?;
    let start = lines.len().saturating_sub(n);
    Ok(lines[start..].to_vec())
}
