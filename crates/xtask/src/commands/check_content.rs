//! Check installed content command
//!
//! Runs the same critical-asset check the client runs at startup, without
//! opening a session log.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use console::style;
use platform_services::{AssetLocator, ContentValidationResult, CriticalAsset, SessionLogger};

use crate::dirs;

/// Check that the critical content directories are installed
#[derive(Parser, Debug)]
pub struct CheckContent {
    /// Base directory (defaults to GAME_BASE_DIR or the platform data directory)
    #[arg(long)]
    pub base: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl CheckContent {
    pub fn execute(self) -> Result<()> {
        let paths = dirs::paths(self.base);

        // Uninitialized logger: entries are dropped, nothing lands in Logs/
        let locator = AssetLocator::new(&paths, Arc::new(SessionLogger::new()));
        let result = locator.validate_content();

        if self.json {
            println!("{}", serde_json::to_string(&result)?);
        } else {
            print_report(locator.content_root().display(), &result);
        }

        if !result.ok {
            anyhow::bail!(
                "{} critical asset directories missing",
                result.missing.len()
            );
        }
        Ok(())
    }
}

fn print_report(content_root: impl std::fmt::Display, result: &ContentValidationResult) {
    println!("{}", style("Content Check").green().bold());
    println!("  Root: {}", style(content_root).dim());
    println!();

    for asset in CriticalAsset::ALL {
        if result.missing.contains(&asset) {
            println!("  {} {}", style("✗").red().bold(), style(asset).bold());
        } else {
            println!("  {} {}", style("✓").green(), asset);
        }
    }
    println!();

    if result.ok {
        println!("{}", style("✓ All critical assets present").green().bold());
    } else {
        println!(
            "{} Missing: {}",
            style("✗").red().bold(),
            style(result.missing_names().join(", ")).yellow()
        );
    }
}
