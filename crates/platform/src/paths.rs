//! Filesystem roots for content, saves, logs, and scratch data.
//!
//! Every root lives directly under one base directory:
//!
//! ```text
//! base/
//! ├── Content/
//! ├── Saves/
//! ├── Logs/
//! └── Temp/
//! ```

use std::path::{Path, PathBuf};

use crate::error::{PlatformError, Result};

/// Application name used to derive the per-user data directory.
pub const APP_NAME: &str = "celeste";

const CONTENT_DIR: &str = "Content";
const SAVES_DIR: &str = "Saves";
const LOGS_DIR: &str = "Logs";
const TEMP_DIR: &str = "Temp";

/// Resolves the standard roots below a base directory.
///
/// Resolution is a pure join: nothing here touches the filesystem except
/// [`ensure_directories`](Self::ensure_directories).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathResolver {
    base: PathBuf,
    content: PathBuf,
    saves: PathBuf,
    logs: PathBuf,
    temp: PathBuf,
}

impl PathResolver {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            content: base.join(CONTENT_DIR),
            saves: base.join(SAVES_DIR),
            logs: base.join(LOGS_DIR),
            temp: base.join(TEMP_DIR),
            base,
        }
    }

    /// Resolver rooted at `base`, or at the platform data directory when `None`.
    pub fn with_base(base: Option<PathBuf>) -> Self {
        Self::new(base.unwrap_or_else(default_base_dir))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    pub fn content_root(&self) -> &Path {
        &self.content
    }

    pub fn saves_root(&self) -> &Path {
        &self.saves
    }

    pub fn logs_root(&self) -> &Path {
        &self.logs
    }

    pub fn temp_root(&self) -> &Path {
        &self.temp
    }

    pub fn resolve_content(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.content.join(relative)
    }

    pub fn resolve_save(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.saves.join(relative)
    }

    pub fn resolve_log(&self, filename: impl AsRef<Path>) -> PathBuf {
        self.logs.join(filename)
    }

    /// Create all four roots (and their parents). Existing directories are left alone.
    pub fn ensure_directories(&self) -> Result<()> {
        for dir in [&self.content, &self.saves, &self.logs, &self.temp] {
            std::fs::create_dir_all(dir).map_err(|e| {
                tracing::error!("Failed to create directory {}: {}", dir.display(), e);
                PlatformError::io(dir.as_path(), e)
            })?;
        }

        tracing::debug!("Platform directories ready under {}", self.base.display());
        Ok(())
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::with_base(None)
    }
}

/// Get the platform-specific data directory for the game.
///
/// Follows platform conventions:
/// - macOS: `~/Library/Application Support/celeste`
/// - Linux: `~/.local/share/celeste` (or `$XDG_DATA_HOME/celeste`)
/// - Windows: `%APPDATA%\celeste\data`
/// - Fallback: `./game_data`
pub fn default_base_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./game_data"))
}
