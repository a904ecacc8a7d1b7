//! Initialize-once holder for the platform services.
//!
//! The registry is an explicit context object: the host bootstrap builds one,
//! wraps it in an `Arc`, and passes it to everything that needs paths,
//! logging, or assets. Nothing here is process-global.
//!
//! ```text
//! uninitialized ──initialize──▶ initialized
//!       ▲                            │
//!       └──────────reset─────────────┘
//! ```

use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard};

use crate::assets::AssetLocator;
use crate::error::{PlatformError, Result};
use crate::logging::SessionLogger;
use crate::paths::PathResolver;

struct Services {
    paths: Arc<PathResolver>,
    logger: Arc<SessionLogger>,
    assets: OnceLock<Arc<AssetLocator>>,
}

/// Holds exactly one path resolver, session logger, and asset locator.
///
/// The registry only shares the services; flushing and closing the session
/// log on exit stays with the bootstrap that created it.
#[derive(Default)]
pub struct ServiceRegistry {
    services: RwLock<Option<Services>>,
}

impl ServiceRegistry {
    /// Create an uninitialized registry.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Install the services. Fails if the registry is already initialized.
    pub fn initialize(&self, paths: Arc<PathResolver>, logger: Arc<SessionLogger>) -> Result<()> {
        let mut services = self
            .services
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if services.is_some() {
            return Err(PlatformError::AlreadyInitialized);
        }

        *services = Some(Services {
            paths,
            logger,
            assets: OnceLock::new(),
        });
        tracing::debug!("Service registry initialized");
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.read().is_some()
    }

    pub fn paths(&self) -> Result<Arc<PathResolver>> {
        self.read()
            .as_ref()
            .map(|services| Arc::clone(&services.paths))
            .ok_or(PlatformError::NotInitialized("paths"))
    }

    pub fn logger(&self) -> Result<Arc<SessionLogger>> {
        self.read()
            .as_ref()
            .map(|services| Arc::clone(&services.logger))
            .ok_or(PlatformError::NotInitialized("logger"))
    }

    /// Asset locator, constructed from the held paths and logger on first use.
    pub fn asset_locator(&self) -> Result<Arc<AssetLocator>> {
        self.read()
            .as_ref()
            .map(|services| {
                Arc::clone(services.assets.get_or_init(|| {
                    Arc::new(AssetLocator::new(
                        &services.paths,
                        Arc::clone(&services.logger),
                    ))
                }))
            })
            .ok_or(PlatformError::NotInitialized("asset locator"))
    }

    /// Drop all held services and return to the uninitialized state.
    ///
    /// Intended for tests; callers still holding `Arc`s keep them alive.
    pub fn reset(&self) {
        *self
            .services
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Services>> {
        self.services.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Builder that validates required services before initializing a registry.
///
/// # Errors
///
/// [`build`](Self::build) and [`install`](Self::install) fail with
/// [`PlatformError::InvalidArgument`] when the paths or the logger are missing.
#[derive(Default)]
pub struct RegistryBuilder {
    paths: Option<Arc<PathResolver>>,
    logger: Option<Arc<SessionLogger>>,
}

impl RegistryBuilder {
    /// Set the path resolver (required).
    pub fn paths(mut self, paths: impl Into<Arc<PathResolver>>) -> Self {
        self.paths = Some(paths.into());
        self
    }

    /// Set the session logger (required).
    pub fn logger(mut self, logger: impl Into<Arc<SessionLogger>>) -> Self {
        self.logger = Some(logger.into());
        self
    }

    /// Build a new, initialized registry.
    pub fn build(self) -> Result<ServiceRegistry> {
        let registry = ServiceRegistry::new();
        self.install(&registry)?;
        Ok(registry)
    }

    /// Initialize an existing registry, e.g. after [`ServiceRegistry::reset`].
    pub fn install(self, registry: &ServiceRegistry) -> Result<()> {
        let paths = self.paths.ok_or(PlatformError::InvalidArgument("paths"))?;
        let logger = self
            .logger
            .ok_or(PlatformError::InvalidArgument("logger"))?;
        registry.initialize(paths, logger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn services() -> (Arc<PathResolver>, Arc<SessionLogger>) {
        (
            Arc::new(PathResolver::new("/tmp/registry-test")),
            Arc::new(SessionLogger::new()),
        )
    }

    #[test]
    fn test_accessors_fail_before_initialize() {
        let registry = ServiceRegistry::new();
        assert!(matches!(
            registry.logger(),
            Err(PlatformError::NotInitialized(_))
        ));
        assert!(matches!(
            registry.paths(),
            Err(PlatformError::NotInitialized(_))
        ));
        assert!(matches!(
            registry.asset_locator(),
            Err(PlatformError::NotInitialized(_))
        ));
    }

    #[test]
    fn test_initialize_and_fetch() {
        let (paths, logger) = services();
        let registry = ServiceRegistry::new();
        registry.initialize(Arc::clone(&paths), Arc::clone(&logger)).unwrap();

        assert!(Arc::ptr_eq(&registry.paths().unwrap(), &paths));
        assert!(Arc::ptr_eq(&registry.logger().unwrap(), &logger));
        assert_eq!(
            registry.asset_locator().unwrap().content_root(),
            paths.content_root()
        );
    }

    #[test]
    fn test_asset_locator_is_built_once() {
        let (paths, logger) = services();
        let registry = ServiceRegistry::builder()
            .paths(paths)
            .logger(logger)
            .build()
            .unwrap();

        let first = registry.asset_locator().unwrap();
        let second = registry.asset_locator().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_double_initialize_is_rejected() {
        let (paths, logger) = services();
        let registry = ServiceRegistry::new();
        registry.initialize(Arc::clone(&paths), Arc::clone(&logger)).unwrap();

        assert!(matches!(
            registry.initialize(paths, logger),
            Err(PlatformError::AlreadyInitialized)
        ));
    }

    #[test]
    fn test_reset_returns_to_uninitialized() {
        let (paths, logger) = services();
        let registry = ServiceRegistry::new();
        registry.initialize(Arc::clone(&paths), Arc::clone(&logger)).unwrap();

        registry.reset();
        assert!(!registry.is_initialized());
        assert!(matches!(
            registry.logger(),
            Err(PlatformError::NotInitialized(_))
        ));

        registry.initialize(paths, logger).unwrap();
        assert!(registry.is_initialized());
    }

    #[test]
    fn test_builder_requires_both_services() {
        let (paths, logger) = services();

        let err = ServiceRegistry::builder().logger(logger).build().err().unwrap();
        assert!(matches!(err, PlatformError::InvalidArgument("paths")));

        let err = ServiceRegistry::builder().paths(paths).build().err().unwrap();
        assert!(matches!(err, PlatformError::InvalidArgument("logger")));
    }
}
