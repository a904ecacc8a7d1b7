//! Directory resolution shared by xtask commands
//!
//! Mirrors what the client does at startup: `GAME_BASE_DIR` when set,
//! otherwise the platform data directory.

use std::path::PathBuf;

use platform_services::PathResolver;
use platform_services::paths::default_base_dir;

/// Base directory for Content/Saves/Logs/Temp
///
/// Resolution order:
/// 1. Explicit `--base` argument
/// 2. `GAME_BASE_DIR` environment variable
/// 3. Platform data directory (e.g. `~/.local/share/celeste` on Linux)
pub fn base_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| {
            std::env::var("GAME_BASE_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from)
        })
        .unwrap_or_else(default_base_dir)
}

/// Path resolver for the selected base directory
pub fn paths(explicit: Option<PathBuf>) -> PathResolver {
    PathResolver::new(base_dir(explicit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_wins() {
        let base = PathBuf::from("/explicit/base");
        assert_eq!(base_dir(Some(base.clone())), base);
        assert_eq!(
            paths(Some(base)).logs_root(),
            std::path::Path::new("/explicit/base/Logs")
        );
    }
}
