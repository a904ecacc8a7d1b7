//! Builds the path resolver, session logger, and registry used by the client.
use std::sync::Arc;

use anyhow::{Context, Result};
use platform_services::{PathResolver, ServiceRegistry, SessionLogger};

use crate::config::BootstrapConfig;

/// Builder that runs the host bootstrap sequence.
///
/// Order matters: directories first, then the session log under the logs
/// root, then the registry that hands both out.
pub struct PlatformBuilder {
    config: BootstrapConfig,
}

impl PlatformBuilder {
    pub fn new(config: BootstrapConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> Result<PlatformSetup> {
        let paths = PathResolver::with_base(self.config.base_dir.clone());
        paths
            .ensure_directories()
            .context("Failed to create platform directories")?;

        let logger = Arc::new(SessionLogger::open(paths.logs_root()));
        let shutdown = ShutdownGuard::new(Arc::clone(&logger));

        let registry = ServiceRegistry::builder()
            .paths(paths)
            .logger(logger)
            .build()
            .context("Failed to initialize service registry")?;

        Ok(PlatformSetup {
            config: self.config,
            registry: Arc::new(registry),
            shutdown,
        })
    }
}

pub struct PlatformSetup {
    pub config: BootstrapConfig,
    pub registry: Arc<ServiceRegistry>,
    shutdown: ShutdownGuard,
}

impl PlatformSetup {
    /// The session logger this setup will shut down.
    pub fn logger(&self) -> &Arc<SessionLogger> {
        &self.shutdown.logger
    }

    /// Final flush and release of the session log.
    pub fn shutdown(self) {
        drop(self.shutdown);
    }
}

/// Shuts the session logger down when dropped, on every exit path.
pub struct ShutdownGuard {
    logger: Arc<SessionLogger>,
}

impl ShutdownGuard {
    pub fn new(logger: Arc<SessionLogger>) -> Self {
        Self { logger }
    }
}

impl Drop for ShutdownGuard {
    fn drop(&mut self) {
        self.logger.shutdown();
    }
}
