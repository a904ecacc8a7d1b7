//! Session logging: severity levels, buffered entries, and crash capture.

mod crash;
mod entry;
mod session;

pub use crash::{CrashRecord, list_crash_records, list_log_files};
pub use entry::{LogEntry, Severity};
pub use session::{FLUSH_THRESHOLD, MAX_CAUSE_DEPTH, SessionLogger};
