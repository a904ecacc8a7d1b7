//! Buffered per-process session log with crash capture.
//!
//! Layout under the logs root:
//! ```text
//! Logs/
//! ├── YYYY-MM-DD/
//! │   └── session_YYYY-MM-DD_HH-mm-ss.log
//! └── crash_YYYY-MM-DD_HH-mm-ss.log
//! ```
//!
//! # Locking
//!
//! A single mutex guards the buffer and the file handle. Public entry points
//! acquire it exactly once and then work on [`SessionState`] directly, so the
//! crash path can log, walk the cause chain, and flush without re-entering
//! the lock.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;
use std::collections::VecDeque;
use std::error::Error;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::Local;

use super::crash::{self, CrashRecord, FILE_STAMP};
use super::entry::{LogEntry, Severity};
use crate::error::PlatformError;

/// Entries buffered before a synchronous flush.
pub const FLUSH_THRESHOLD: usize = 10;

/// Upper bound on causes walked by [`SessionLogger::log_error`].
pub const MAX_CAUSE_DEPTH: usize = 32;

const CATEGORY: &str = "SessionLogger";
const CRASH_CATEGORY: &str = "CRASH";

/// Append-only session log shared by every service in the process.
///
/// The logger never returns errors. If the session file cannot be created it
/// degrades to dropping writes and reports the failure through `tracing`.
pub struct SessionLogger {
    state: Mutex<SessionState>,
}

enum Sink {
    Uninitialized,
    Active(BufWriter<File>),
    /// Initialization failed; writes are dropped but crash records still land.
    Degraded,
    Closed,
}

struct SessionState {
    sink: Sink,
    logs_root: Option<PathBuf>,
    session_path: Option<PathBuf>,
    buffer: VecDeque<LogEntry>,
}

impl SessionLogger {
    /// Create a logger in the uninitialized state.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(SessionState {
                sink: Sink::Uninitialized,
                logs_root: None,
                session_path: None,
                buffer: VecDeque::with_capacity(FLUSH_THRESHOLD),
            }),
        }
    }

    /// Create a logger and immediately open a session under `logs_root`.
    pub fn open(logs_root: impl AsRef<Path>) -> Self {
        let logger = Self::new();
        logger.initialize(logs_root);
        logger
    }

    /// Open today's session file under `logs_root`.
    ///
    /// Only the first call has an effect; a session is never rotated.
    pub fn initialize(&self, logs_root: impl AsRef<Path>) {
        let logs_root = logs_root.as_ref();
        let mut state = self.lock();

        if !matches!(state.sink, Sink::Uninitialized) {
            tracing::warn!(
                "Session logger already initialized; ignoring request for {}",
                logs_root.display()
            );
            return;
        }

        state.logs_root = Some(logs_root.to_path_buf());
        state.buffer.clear();

        let now = Local::now();
        let dated_dir = logs_root.join(now.format("%Y-%m-%d").to_string());
        let session_path = dated_dir.join(format!("session_{}.log", now.format(FILE_STAMP)));

        let opened = std::fs::create_dir_all(&dated_dir).and_then(|_| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&session_path)
        });

        match opened {
            Ok(file) => {
                state.sink = Sink::Active(BufWriter::new(file));
                state.session_path = Some(session_path.clone());
                state.append(
                    Severity::Info,
                    CATEGORY,
                    format!("Session log opened at {}", session_path.display()),
                );
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to open session log {}: {}; log writes will be dropped",
                    session_path.display(),
                    e
                );
                state.sink = Sink::Degraded;
            }
        }
    }

    /// Buffer one entry, flushing synchronously once the threshold is reached.
    pub fn log(&self, level: Severity, category: &str, message: impl Into<String>) {
        self.lock().append(level, category, message);
    }

    /// Record an error and every underlying cause as its own entry.
    ///
    /// Plain `std::error::Error` values carry no backtrace, so no Debug
    /// trace entry is written here; only [`log_crash`](Self::log_crash)
    /// records one, from the `anyhow::Error` it receives.
    pub fn log_error(&self, category: &str, error: &(dyn Error + 'static), context: &str) {
        self.lock().append_error_chain(category, error, None, context);
    }

    /// Record a fatal failure, flush, and write a standalone crash record.
    ///
    /// Returns the crash record path when it could be written. Failures while
    /// writing the record are reported on the console channel only.
    pub fn log_crash(&self, error: &anyhow::Error, context: &str) -> Option<PathBuf> {
        let mut state = self.lock();

        state.append(
            Severity::Fatal,
            CRASH_CATEGORY,
            format!("Application crashed: {context}"),
        );
        state.append_error_chain(
            CRASH_CATEGORY,
            &**error,
            Some(error.backtrace()),
            "fatal error",
        );
        state.flush_buffer();

        let Some(logs_root) = state.logs_root.clone() else {
            tracing::error!("Crash before session logger initialization: {:?}", error);
            return None;
        };

        match CrashRecord::new(context, error).write_to(&logs_root) {
            Ok(path) => {
                tracing::error!("Crash record written to {}", path.display());
                Some(path)
            }
            Err(e) => {
                tracing::warn!("Failed to write crash record: {}", e);
                None
            }
        }
    }

    /// Write buffered entries in order and sync the file to storage.
    pub fn flush(&self) {
        self.lock().flush_buffer();
    }

    /// Final flush and handle release. Later calls are no-ops.
    pub fn shutdown(&self) {
        let mut state = self.lock();
        state.flush_buffer();

        if let Sink::Active(writer) = std::mem::replace(&mut state.sink, Sink::Closed) {
            drop(writer);
            tracing::debug!("Session log closed");
        }
    }

    /// Path of the open session file, if initialization succeeded.
    pub fn current_log_file_path(&self) -> Option<PathBuf> {
        self.lock().session_path.clone()
    }

    pub fn logs_root(&self) -> Option<PathBuf> {
        self.lock().logs_root.clone()
    }

    /// Every `*.log` file under the logs root; empty when unavailable.
    pub fn all_log_files(&self) -> Vec<PathBuf> {
        match self.logs_root() {
            Some(root) => crash::list_log_files(&root),
            None => Vec::new(),
        }
    }

    /// Crash records under the logs root, newest first.
    pub fn crash_files(&self) -> Vec<PathBuf> {
        match self.logs_root() {
            Some(root) => crash::list_crash_records(&root),
            None => Vec::new(),
        }
    }

    /// Whether writes currently reach a session file.
    pub fn is_active(&self) -> bool {
        matches!(self.lock().sink, Sink::Active(_))
    }

    /// Number of entries waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.lock().buffer.len()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        // A panic mid-log leaves the buffer usable; keep logging.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SessionLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SessionLogger {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        state.flush_buffer();
    }
}

impl SessionState {
    fn append(&mut self, level: Severity, category: &str, message: impl Into<String>) {
        if !matches!(self.sink, Sink::Active(_)) {
            return;
        }

        self.buffer.push_back(LogEntry::new(level, category, message));

        if self.buffer.len() >= FLUSH_THRESHOLD {
            self.flush_buffer();
        }
    }

    fn append_error_chain(
        &mut self,
        category: &str,
        error: &(dyn Error + 'static),
        backtrace: Option<&Backtrace>,
        context: &str,
    ) {
        let mut current = Some(error);
        let mut context = context;
        let mut depth = 0;

        while let Some(err) = current {
            if depth == MAX_CAUSE_DEPTH {
                self.append(
                    Severity::Warning,
                    category,
                    format!("Cause chain truncated after {MAX_CAUSE_DEPTH} links"),
                );
                break;
            }

            let mut message = format!("{}: {}", error_kind(err), err);
            if !context.is_empty() {
                message.push_str(" | Context: ");
                message.push_str(context);
            }
            self.append(Severity::Error, category, message);

            // Only the outermost error carries a captured backtrace
            if depth == 0
                && let Some(trace) = backtrace.filter(|bt| bt.status() == BacktraceStatus::Captured)
            {
                self.append(Severity::Debug, category, format!("Backtrace:\n{trace}"));
            }

            current = err.source();
            context = "caused by";
            depth += 1;
        }
    }

    fn flush_buffer(&mut self) {
        let Self { sink, buffer, .. } = self;

        let Sink::Active(writer) = sink else {
            return;
        };
        if buffer.is_empty() {
            return;
        }

        let result = buffer
            .drain(..)
            .try_for_each(|entry| writeln!(writer, "{entry}"))
            .and_then(|_| writer.flush())
            .and_then(|_| writer.get_ref().sync_data());

        if let Err(e) = result {
            tracing::warn!("Failed to flush session log: {}", e);
        }
    }
}

fn error_kind(err: &(dyn Error + 'static)) -> Cow<'static, str> {
    if let Some(platform) = err.downcast_ref::<PlatformError>() {
        Cow::Borrowed(platform.kind())
    } else if let Some(io) = err.downcast_ref::<std::io::Error>() {
        Cow::Owned(format!("io::{:?}", io.kind()))
    } else {
        Cow::Borrowed("Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;
    use tempfile::TempDir;

    fn read_lines(path: &Path) -> Vec<String> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[derive(Debug)]
    struct Layer {
        name: &'static str,
        source: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name)
        }
    }

    impl Error for Layer {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.source.as_deref().map(|layer| layer as &(dyn Error + 'static))
        }
    }

    fn chain(depth: usize) -> Layer {
        (1..depth).fold(
            Layer {
                name: "root",
                source: None,
            },
            |inner, _| Layer {
                name: "wrapper",
                source: Some(Box::new(inner)),
            },
        )
    }

    #[test]
    fn test_uninitialized_logger_drops_writes() {
        let logger = SessionLogger::new();
        logger.log(Severity::Info, "T", "ignored");
        logger.flush();

        assert_eq!(logger.pending(), 0);
        assert!(logger.current_log_file_path().is_none());
        assert!(logger.all_log_files().is_empty());
    }

    #[test]
    fn test_initialize_buffers_announcement() {
        let temp_dir = TempDir::new().unwrap();
        let logger = SessionLogger::open(temp_dir.path());

        assert!(logger.is_active());
        assert_eq!(logger.pending(), 1);

        let path = logger.current_log_file_path().unwrap();
        assert!(path.starts_with(temp_dir.path()));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("session_") && name.ends_with(".log"));
        assert!(read_lines(&path).is_empty());
    }

    #[test]
    fn test_second_initialize_keeps_session() {
        let temp_dir = TempDir::new().unwrap();
        let logger = SessionLogger::open(temp_dir.path().join("a"));
        let first = logger.current_log_file_path();

        logger.initialize(temp_dir.path().join("b"));

        assert_eq!(logger.current_log_file_path(), first);
        assert!(!temp_dir.path().join("b").exists());
    }

    #[test]
    fn test_error_chain_logs_every_cause() {
        let temp_dir = TempDir::new().unwrap();
        let logger = SessionLogger::open(temp_dir.path());

        logger.log_error("Test", &chain(3), "loading");
        logger.flush();

        let lines = read_lines(&logger.current_log_file_path().unwrap());
        let errors: Vec<&String> = lines.iter().filter(|l| l.contains("[Error]")).collect();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].ends_with("Error: wrapper | Context: loading"));
        assert!(errors[1].ends_with("Error: wrapper | Context: caused by"));
        assert!(errors[2].ends_with("Error: root | Context: caused by"));
        assert!(!lines.iter().any(|l| l.contains("[Debug]")));
    }

    #[test]
    fn test_error_chain_is_capped() {
        let temp_dir = TempDir::new().unwrap();
        let logger = SessionLogger::open(temp_dir.path());

        logger.log_error("Test", &chain(MAX_CAUSE_DEPTH + 5), "");
        logger.flush();

        let lines = read_lines(&logger.current_log_file_path().unwrap());
        let errors = lines.iter().filter(|l| l.contains("[Error]")).count();
        assert_eq!(errors, MAX_CAUSE_DEPTH);
        assert!(lines.last().unwrap().contains("Cause chain truncated"));
    }

    #[test]
    fn test_error_kind_names() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(error_kind(&io), "io::PermissionDenied");

        let platform = PlatformError::NotInitialized("logger");
        assert_eq!(error_kind(&platform), "NotInitialized");

        assert_eq!(error_kind(&chain(1)), "Error");
    }

    #[test]
    fn test_shutdown_flushes_and_closes() {
        let temp_dir = TempDir::new().unwrap();
        let logger = SessionLogger::open(temp_dir.path());
        logger.log(Severity::Info, "T", "before shutdown");

        logger.shutdown();
        assert!(!logger.is_active());

        logger.log(Severity::Info, "T", "after shutdown");
        logger.flush();

        let lines = read_lines(&logger.current_log_file_path().unwrap());
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with("[Info] [T] before shutdown"));
    }

    #[test]
    fn test_drop_flushes_pending_entries() {
        let temp_dir = TempDir::new().unwrap();
        let path = {
            let logger = SessionLogger::open(temp_dir.path());
            logger.log(Severity::Warning, "T", "pending");
            logger.current_log_file_path().unwrap()
        };

        assert_eq!(read_lines(&path).len(), 2);
    }
}
