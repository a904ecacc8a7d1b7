//! Standalone crash records and log-file discovery under the logs root.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use walkdir::WalkDir;

/// File-name stamp shared by session logs and crash records.
pub(crate) const FILE_STAMP: &str = "%Y-%m-%d_%H-%M-%S";

const CRASH_PREFIX: &str = "crash_";
const LOG_EXTENSION: &str = "log";

/// Suffixed names tried when a record with the same stamp already exists.
const MAX_NAME_COLLISIONS: usize = 99;

/// Diagnostic snapshot written once per crash, independent of the session log.
#[derive(Clone, Debug)]
pub struct CrashRecord {
    pub timestamp: DateTime<Local>,
    pub context: String,
    /// Full error report: message, causes, and backtrace when captured.
    pub report: String,
}

impl CrashRecord {
    pub fn new(context: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            timestamp: Local::now(),
            context: context.into(),
            report: format!("{error:?}"),
        }
    }

    /// `crash_<YYYY-MM-DD_HH-mm-ss>.log`
    pub fn file_name(&self) -> String {
        format!("{CRASH_PREFIX}{}.{LOG_EXTENSION}", self.timestamp.format(FILE_STAMP))
    }

    /// Write the record to `logs_root` and sync it to storage.
    ///
    /// An existing record is never overwritten: a second crash in the same
    /// second lands in `crash_<stamp>_1.log`, then `_2`, and so on.
    pub fn write_to(&self, logs_root: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(logs_root)?;
        let (path, file) = self.create_unique(logs_root)?;

        let mut file = BufWriter::new(file);
        writeln!(file, "=== CRASH LOG ===")?;
        writeln!(
            file,
            "Timestamp: {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S%.3f %:z")
        )?;
        writeln!(file, "Context: {}", self.context)?;
        writeln!(file, "Error: {}", self.report)?;
        file.flush()?;
        file.get_ref().sync_all()?;

        Ok(path)
    }

    fn create_unique(&self, logs_root: &Path) -> std::io::Result<(PathBuf, File)> {
        let stamp = self.timestamp.format(FILE_STAMP).to_string();
        let mut last_error = None;

        for attempt in 0..=MAX_NAME_COLLISIONS {
            let name = match attempt {
                0 => self.file_name(),
                n => format!("{CRASH_PREFIX}{stamp}_{n}.{LOG_EXTENSION}"),
            };
            let path = logs_root.join(name);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => last_error = Some(e),
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ErrorKind::AlreadyExists.into()))
    }
}

/// Every `*.log` file below `logs_root`, sorted by path.
///
/// Returns an empty list if the root is missing or unreadable.
pub fn list_log_files(logs_root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(logs_root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == LOG_EXTENSION))
        .collect();
    files.sort();
    files
}

/// Crash records directly under `logs_root`, newest first.
pub fn list_crash_records(logs_root: &Path) -> Vec<PathBuf> {
    let mut records: Vec<PathBuf> = WalkDir::new(logs_root)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && is_log_named(entry.path(), CRASH_PREFIX))
        .map(|entry| entry.into_path())
        .collect();

    // Stamps sort lexicographically in chronological order
    records.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
    records
}

fn is_log_named(path: &Path, prefix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(prefix) && name.ends_with(".log"))
}
