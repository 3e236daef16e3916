//! Job domain types

use serde::{Deserialize, Serialize};

/// Status sent when asking the server to start a job
pub const STATUS_RUNNING: &str = "RUNNING";

/// Job finished its last run
pub const STATUS_READY: &str = "READY";

/// Job is switched off on the server
pub const STATUS_DISABLED: &str = "DISABLED";

/// Statuses after which a job is no longer actively running
pub const DEFAULT_END_STATES: [&str; 2] = [STATUS_READY, STATUS_DISABLED];

/// Server's view of a job at one point in time
///
/// Every trigger response and every poll produces a fresh instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInfo {
    #[serde(default)]
    pub name: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<ProcessInfo>,
}

impl JobInfo {
    /// Whether the status is one of `end_states` (exact, case-sensitive match)
    pub fn is_finished<S: AsRef<str>>(&self, end_states: &[S]) -> bool {
        end_states.iter().any(|s| s.as_ref() == self.status)
    }
}

/// Process backing a job run, reported once the process has started
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    pub status: String,
    /// Milliseconds elapsed
    pub duration: u64,
}
