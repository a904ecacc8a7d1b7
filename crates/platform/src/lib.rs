//! Platform services the game client needs before and during engine startup.
//!
//! Modules are organized by responsibility:
//! - [`paths`] derives the content, saves, logs, and temp roots from a base directory
//! - [`logging`] owns the buffered per-process session log and crash records
//! - [`assets`] resolves and reads content and validates the critical directories
//! - [`registry`] holds one instance of each service behind an initialize-once contract
//!
//! Typical bootstrap order:
//!
//! ```no_run
//! use std::sync::Arc;
//! use platform_services::{PathResolver, ServiceRegistry, SessionLogger};
//!
//! # fn main() -> platform_services::Result<()> {
//! let paths = PathResolver::with_base(None);
//! paths.ensure_directories()?;
//! let logger = Arc::new(SessionLogger::open(paths.logs_root()));
//!
//! let registry = ServiceRegistry::builder()
//!     .paths(paths)
//!     .logger(Arc::clone(&logger))
//!     .build()?;
//! let report = registry.asset_locator()?.validate_content();
//!
//! logger.shutdown();
//! # let _ = report;
//! # Ok(())
//! # }
//! ```
pub mod assets;
pub mod error;
pub mod logging;
pub mod paths;
pub mod registry;

pub use assets::{AssetLocator, ContentValidationResult, CriticalAsset};
pub use error::{PlatformError, Result};
pub use logging::{CrashRecord, LogEntry, SessionLogger, Severity};
pub use paths::PathResolver;
pub use registry::{RegistryBuilder, ServiceRegistry};
