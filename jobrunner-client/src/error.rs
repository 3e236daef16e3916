//! Error types for the job runner

use std::time::Duration;
use thiserror::Error;

/// Result type alias for job runner operations
pub type Result<T> = std::result::Result<T, JobRunnerError>;

/// Errors that can occur while triggering or polling a job
#[derive(Debug, Error)]
pub enum JobRunnerError {
    /// Missing or invalid configuration, detected before any request is sent
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Response failed validation or carried an unreadable body
    #[error("Communication error: {0}")]
    Communication(String),

    /// Job did not reach an end state in time
    #[error("Job '{}' did not finish within {} ms", .job, .max_wait.as_millis())]
    Timeout {
        /// Name of the polled job
        job: String,
        /// Wait budget that was exceeded
        max_wait: Duration,
    },

    /// Waiting for the job was interrupted from outside
    #[error("Waiting for job '{job}' was interrupted")]
    Interrupted {
        /// Name of the polled job
        job: String,
    },

    /// HTTP request could not be completed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

impl JobRunnerError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn communication(message: impl Into<String>) -> Self {
        Self::Communication(message.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    pub fn is_communication(&self) -> bool {
        matches!(self, Self::Communication(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Interrupted { .. })
    }
}
