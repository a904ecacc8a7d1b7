//! Session log discovery for tooling and diagnostics.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use platform_services::logging::list_log_files;

/// Information about a recorded session log.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionInfo {
    /// File stem (e.g., "session_2026-01-30_12-30-45")
    pub session_id: String,

    /// Start time parsed from the file name
    pub started_at: NaiveDateTime,

    pub path: PathBuf,
}

/// List all session logs under the logs root, most recent first.
///
/// Files not matching `session_<YYYY-MM-DD_HH-mm-ss>.log` are skipped.
pub fn list_sessions(logs_root: &Path) -> Vec<SessionInfo> {
    let mut sessions: Vec<SessionInfo> = list_log_files(logs_root)
        .into_iter()
        .filter_map(|path| {
            let session_id = path.file_stem()?.to_str()?.to_string();
            let stamp = session_id.strip_prefix("session_")?;
            let started_at = NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d_%H-%M-%S").ok()?;
            Some(SessionInfo {
                session_id,
                started_at,
                path,
            })
        })
        .collect();

    sessions.sort_by(|a, b| b.started_at.cmp(&a.started_at));
    sessions
}

/// Find the most recent session by start time.
pub fn find_latest_session(logs_root: &Path) -> Option<SessionInfo> {
    list_sessions(logs_root).into_iter().next()
}

/// Find a session log by id (file stem), searching every dated folder.
pub fn find_session(logs_root: &Path, session_id: &str) -> Option<SessionInfo> {
    list_sessions(logs_root)
        .into_iter()
        .find(|session| session.session_id == session_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(root: &Path, day: &str, name: &str) {
        let dir = root.join(day);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_sessions_sorted_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        touch(root, "2026-01-29", "session_2026-01-29_23-59-59.log");
        touch(root, "2026-01-30", "session_2026-01-30_08-00-00.log");
        touch(root, "2026-01-30", "session_garbage.log");
        std::fs::write(root.join("crash_2026-01-30_08-00-01.log"), "").unwrap();

        let sessions = list_sessions(root);
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].session_id, "session_2026-01-30_08-00-00");
        assert_eq!(sessions[1].session_id, "session_2026-01-29_23-59-59");

        let latest = find_latest_session(root).unwrap();
        assert_eq!(latest, sessions[0]);
    }

    #[test]
    fn test_find_session_by_id() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "2026-01-30", "session_2026-01-30_08-00-00.log");

        assert!(find_session(temp_dir.path(), "session_2026-01-30_08-00-00").is_some());
        assert!(find_session(temp_dir.path(), "session_2026-01-30_09-00-00").is_none());
    }

    #[test]
    fn test_missing_root_has_no_sessions() {
        let temp_dir = TempDir::new().unwrap();
        assert!(list_sessions(&temp_dir.path().join("Logs")).is_empty());
        assert!(find_latest_session(&temp_dir.path().join("Logs")).is_none());
    }
}
