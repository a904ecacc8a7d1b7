//! Engine host abstraction.
//!
//! The engine (rendering, input, audio, simulation) lives outside this
//! workspace. It sees the platform only through the [`ServiceRegistry`]:
//! asset bytes and streams in, log lines out.

use anyhow::Result;
use platform_services::{ServiceRegistry, Severity};

/// Lifecycle callbacks driven by [`Client`](crate::Client).
///
/// Called in order: `initialize`, `load_content`, `run`, then `on_exiting`
/// on a normal exit. A failing callback ends the sequence and is captured as
/// a crash.
pub trait GameHost {
    fn initialize(&mut self, _services: &ServiceRegistry) -> Result<()> {
        Ok(())
    }

    fn load_content(&mut self, _services: &ServiceRegistry) -> Result<()> {
        Ok(())
    }

    /// Run the game until the player quits.
    fn run(&mut self, services: &ServiceRegistry) -> Result<()>;

    fn on_exiting(&mut self, _services: &ServiceRegistry) {}
}

/// Host with no renderer attached; exits right after content is loaded.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    pub fps_counter: bool,
}

impl GameHost for HeadlessHost {
    fn run(&mut self, services: &ServiceRegistry) -> Result<()> {
        let logger = services.logger()?;
        logger.log(
            Severity::Info,
            "Game",
            format!(
                "No renderer attached; headless session ends (fps counter: {})",
                self.fps_counter
            ),
        );
        Ok(())
    }
}
