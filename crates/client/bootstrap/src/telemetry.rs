//! Console fallback channel.
//!
//! The session log is the primary record; this stderr subscriber carries what
//! the session log cannot (open/flush failures, crashes before it exists).

use anyhow::{Result, anyhow};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the stderr subscriber. `RUST_LOG` directives take precedence.
pub fn init_console(verbose: bool) -> Result<()> {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to install console logging: {e}"))?;

    tracing::debug!("Console logging initialized (verbose={})", verbose);
    Ok(())
}
