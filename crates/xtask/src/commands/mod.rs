//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check_content;
mod clean;
mod list_logs;
mod tail_logs;

pub use check_content::CheckContent;
pub use clean::Clean;
pub use list_logs::ListLogs;
pub use tail_logs::TailLogs;
