//! Top-level client orchestrating the platform services and the engine host.
//!
//! # Architecture
//!
//! ```text
//! Client (Top-level container)
//!   ├─→ PlatformSetup (paths, session log, asset locator via ServiceRegistry)
//!   └─→ GameHost (external engine: rendering, input, audio, simulation)
//! ```
//!
//! # Lifecycle
//!
//! 1. `PlatformBuilder` creates directories, opens the session log, and fills the registry
//! 2. `Client::run()` logs the startup banner and gates on critical content
//! 3. `Client::run()` drives the host: initialize → load content → run → exiting
//! 4. Any failure is captured with a crash record before it is returned
//! 5. The session log is flushed and closed on every exit path

mod builder;
mod host;

pub use builder::ClientBuilder;
pub use host::{GameHost, HeadlessHost};

use std::sync::Arc;

use anyhow::Result;
use client_bootstrap::{PlatformSetup, check_content};
use platform_services::{ServiceRegistry, SessionLogger, Severity};

const CATEGORY: &str = "Game";

/// Startup phase, used as the crash context when a phase fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Phase {
    ContentValidation,
    Initialize,
    LoadContent,
    Run,
}

/// Top-level client container.
pub struct Client {
    platform: PlatformSetup,
    host: Box<dyn GameHost>,
}

impl Client {
    /// Create a new ClientBuilder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Run the client to completion.
    ///
    /// # Errors
    ///
    /// Returns the first phase failure (including a failed content check).
    /// The failure has already been written to the session log and to a
    /// crash record by the time it is returned.
    pub fn run(self) -> Result<()> {
        let Client { platform, mut host } = self;
        let registry = Arc::clone(&platform.registry);
        let logger = Arc::clone(platform.logger());

        let outcome = drive(&platform, &registry, &logger, host.as_mut());

        match &outcome {
            Ok(()) => {
                host.on_exiting(&registry);
                logger.log(Severity::Info, CATEGORY, "Application exiting");
            }
            Err((phase, error)) => {
                tracing::error!("Startup failed during {}: {:#}", phase, error);
                logger.log_crash(error, &format!("{phase} failed"));
            }
        }

        platform.shutdown();
        outcome.map_err(|(_, error)| error)
    }
}

fn drive(
    platform: &PlatformSetup,
    registry: &ServiceRegistry,
    logger: &SessionLogger,
    host: &mut dyn GameHost,
) -> std::result::Result<(), (Phase, anyhow::Error)> {
    let at = |phase: Phase| move |error: anyhow::Error| (phase, error);

    log_banner(platform, registry, logger);

    check_content(registry, platform.config.skip_content_validation)
        .map_err(at(Phase::ContentValidation))?;

    host.initialize(registry).map_err(at(Phase::Initialize))?;
    logger.log(Severity::Info, CATEGORY, "Game initialized");

    logger.log(Severity::Info, CATEGORY, "Loading game content...");
    host.load_content(registry).map_err(at(Phase::LoadContent))?;
    logger.log(Severity::Info, CATEGORY, "Game content loaded");

    host.run(registry).map_err(at(Phase::Run))
}

fn log_banner(platform: &PlatformSetup, registry: &ServiceRegistry, logger: &SessionLogger) {
    if let Ok(paths) = registry.paths() {
        logger.log(
            Severity::Info,
            CATEGORY,
            format!("Base directory: {}", paths.base().display()),
        );
        logger.log(
            Severity::Info,
            CATEGORY,
            format!("Content root: {}", paths.content_root().display()),
        );
    }
    logger.log(
        Severity::Info,
        CATEGORY,
        format!("FPS counter: {}", platform.config.fps_counter),
    );
    logger.log(
        Severity::Info,
        CATEGORY,
        format!("Verbose logs: {}", platform.config.verbose_logs),
    );
}
