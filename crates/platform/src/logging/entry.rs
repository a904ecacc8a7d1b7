//! Severity levels and the buffered log line.

use std::fmt;

use chrono::{DateTime, Local};

/// Log severity, ordered from least to most severe.
///
/// Every level is written to the session log; the ordering exists for callers
/// that compare levels, not for filtering.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Severity {
    Verbose,
    Debug,
    Info,
    Warning,
    Error,
    Fatal,
}

/// One pending line of the session log.
#[derive(Clone, Debug)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: Severity,
    pub category: String,
    pub message: String,
}

impl LogEntry {
    pub fn new(level: Severity, category: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            category: category.into(),
            message: message.into(),
        }
    }
}

/// Renders `[HH:mm:ss.fff] [LEVEL] [category] message`.
impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] [{}] [{}] {}",
            self.timestamp.format("%H:%M:%S%.3f"),
            self.level,
            self.category,
            self.message
        )
    }
}
