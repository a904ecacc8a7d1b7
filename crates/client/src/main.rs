//! Game client binary.
//!
//! Composition root: loads configuration, installs the console channel,
//! brings up the platform services, and hands control to the engine host.
//!
//! # Examples
//!
//! ```bash
//! GAME_BASE_DIR=/sdcard/Celeste cargo run -p game-client
//! ```

use anyhow::Result;
use client_bootstrap::{BootstrapConfig, PlatformBuilder, telemetry};
use game_client::{Client, HeadlessHost};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = BootstrapConfig::from_env();

    // 2. Console fallback channel (the session log comes next)
    telemetry::init_console(config.verbose_logs)?;
    tracing::info!("Starting game client");

    // 3. Platform services: directories, session log, registry
    let host = HeadlessHost {
        fps_counter: config.fps_counter,
    };
    let platform = PlatformBuilder::new(config).build()?;
    if let Some(path) = platform.logger().current_log_file_path() {
        tracing::info!("Session log: {}", path.display());
    }

    // 4. Build and run
    Client::builder().platform(platform).host(host).build()?.run()?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
