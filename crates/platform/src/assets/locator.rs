//! Asset resolution and reads against the installed content root.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::validation::{ContentValidationResult, CriticalAsset};
use crate::error::{PlatformError, Result};
use crate::logging::{SessionLogger, Severity};
use crate::paths::PathResolver;

const CATEGORY: &str = "AssetLocator";

/// Locates and reads assets below the content root.
///
/// Every failure is written to the session log before it is returned, so the
/// log alone is enough to diagnose a missing or unreadable asset.
#[derive(Clone)]
pub struct AssetLocator {
    content_root: PathBuf,
    logger: Arc<SessionLogger>,
}

impl AssetLocator {
    pub fn new(paths: &PathResolver, logger: Arc<SessionLogger>) -> Self {
        Self {
            content_root: paths.content_root().to_path_buf(),
            logger,
        }
    }

    pub fn content_root(&self) -> &Path {
        &self.content_root
    }

    /// Join `relative` onto the content root. No I/O.
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.content_root.join(relative)
    }

    /// True if the asset is an existing file or directory.
    pub fn exists(&self, relative: impl AsRef<Path>) -> bool {
        self.resolve(relative).exists()
    }

    pub fn open_stream(&self, relative: &str) -> Result<File> {
        let path = self.require_file(relative)?;
        File::open(&path).map_err(|e| self.read_failure(relative, path, e, "opening stream"))
    }

    pub fn read_bytes(&self, relative: &str) -> Result<Vec<u8>> {
        let path = self.require_file(relative)?;
        std::fs::read(&path).map_err(|e| self.read_failure(relative, path, e, "reading bytes"))
    }

    pub fn read_text(&self, relative: &str) -> Result<String> {
        let path = self.require_file(relative)?;
        std::fs::read_to_string(&path)
            .map_err(|e| self.read_failure(relative, path, e, "reading text"))
    }

    /// Check that every critical content directory is installed.
    ///
    /// Only directory presence is checked; contents are not inspected.
    pub fn validate_content(&self) -> ContentValidationResult {
        let missing: Vec<CriticalAsset> = CriticalAsset::ALL
            .into_iter()
            .filter(|asset| !self.resolve(asset.dir_name()).is_dir())
            .inspect(|asset| {
                self.logger.log(
                    Severity::Warning,
                    CATEGORY,
                    format!("Critical asset directory missing: {asset}"),
                );
            })
            .collect();

        if missing.is_empty() {
            self.logger.log(
                Severity::Info,
                CATEGORY,
                "Content validation passed: all critical assets present",
            );
        } else {
            self.logger.log(
                Severity::Warning,
                CATEGORY,
                format!(
                    "Content validation failed: {} critical assets missing",
                    missing.len()
                ),
            );
        }

        ContentValidationResult::from_missing(missing)
    }

    /// Resolve `relative` to an existing file, logging when it is absent.
    fn require_file(&self, relative: &str) -> Result<PathBuf> {
        let path = self.resolve(relative);
        if path.is_file() {
            return Ok(path);
        }

        self.logger.log(
            Severity::Error,
            CATEGORY,
            format!("Asset not found: {relative} ({})", path.display()),
        );
        Err(PlatformError::NotFound {
            relative: relative.to_string(),
            resolved: path,
        })
    }

    fn read_failure(
        &self,
        relative: &str,
        path: PathBuf,
        error: std::io::Error,
        action: &str,
    ) -> PlatformError {
        self.logger
            .log_error(CATEGORY, &error, &format!("{action} for {relative}"));
        PlatformError::io(path, error)
    }

    pub(crate) fn logger(&self) -> &SessionLogger {
        &self.logger
    }
}
