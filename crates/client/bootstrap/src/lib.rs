//! Shared bootstrap utilities for the game client and tooling.
//!
//! Provides configuration loading, the console fallback channel, and the
//! platform setup sequence (directories → session log → service registry)
//! that must complete before any engine code runs.
pub mod builder;
pub mod config;
pub mod content;
pub mod session;
pub mod telemetry;

pub use builder::{PlatformBuilder, PlatformSetup, ShutdownGuard};
pub use config::BootstrapConfig;
pub use content::check_content;
pub use session::{SessionInfo, find_latest_session, find_session, list_sessions};
