//! Bootstrap configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to bring up the platform services and the host.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BootstrapConfig {
    /// Base directory for Content/Saves/Logs/Temp; platform data dir when `None`.
    pub base_dir: Option<PathBuf>,
    pub fps_counter: bool,
    pub verbose_logs: bool,
    /// Downgrade a failed content check to a warning (development only).
    pub skip_content_validation: bool,
}

impl BootstrapConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `GAME_BASE_DIR` - Base data directory (default: platform-specific)
    /// - `GAME_FPS_COUNTER` - Show the frame counter (default: false)
    /// - `GAME_VERBOSE_LOGS` - Debug-level console output (default: false)
    /// - `GAME_SKIP_CONTENT_VALIDATION` - Continue with missing content (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            base_dir: lookup("GAME_BASE_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            fps_counter: read_flag(&lookup, "GAME_FPS_COUNTER"),
            verbose_logs: read_flag(&lookup, "GAME_VERBOSE_LOGS"),
            skip_content_validation: read_flag(&lookup, "GAME_SKIP_CONTENT_VALIDATION"),
        }
    }
}

/// Parse a boolean flag; a set variable without a parseable value counts as `true`.
fn read_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> bool {
    match lookup(key) {
        Some(value) => match value.trim().to_ascii_lowercase().as_str() {
            "0" | "false" | "no" | "off" => false,
            _ => true,
        },
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> BootstrapConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        BootstrapConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_from(&[]), BootstrapConfig::default());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = config_from(&[
            ("GAME_BASE_DIR", "/data/game"),
            ("GAME_FPS_COUNTER", "true"),
            ("GAME_VERBOSE_LOGS", "1"),
            ("GAME_SKIP_CONTENT_VALIDATION", "false"),
        ]);
        assert_eq!(config.base_dir, Some(PathBuf::from("/data/game")));
        assert!(config.fps_counter);
        assert!(config.verbose_logs);
        assert!(!config.skip_content_validation);
    }

    #[test]
    fn test_flag_without_value_is_true() {
        let config = config_from(&[("GAME_VERBOSE_LOGS", "")]);
        assert!(config.verbose_logs);
    }

    #[test]
    fn test_blank_base_dir_uses_default() {
        let config = config_from(&[("GAME_BASE_DIR", "  ")]);
        assert!(config.base_dir.is_none());
    }
}
