//! Job runner configuration
//!
//! Everything a trigger call needs to know about the target server: address,
//! credentials, the job's domain and server group, and the polling policy.

use std::time::Duration;

use jobrunner_core::domain::job::DEFAULT_END_STATES;
use jobrunner_core::domain::server::Server;
use jobrunner_core::domain::user::User;

use crate::error::{JobRunnerError, Result};

/// Default wait between two status polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(15_000);

/// Default time a job may take before polling gives up
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(600_000);

/// Job runner configuration
///
/// The poll interval and end states are plain fields so tests and callers can
/// shorten or extend them without touching the polling code.
#[derive(Debug, Clone)]
pub struct JobRunnerConfig {
    /// Address of the SMC server
    pub server: Server,

    /// Domain (site) the job belongs to, e.g. "SLDSystem"
    pub domain: String,

    /// Server group the request is routed to, e.g. "BOS"
    pub server_group: String,

    /// Credentials sent as HTTP Basic authentication
    pub user: User,

    /// Maximum time to poll before failing with a timeout
    pub timeout: Duration,

    /// Wait between two status polls
    pub poll_interval: Duration,

    /// Statuses that end polling
    pub end_states: Vec<String>,
}

impl JobRunnerConfig {
    /// Creates a configuration with the default timeout, poll interval and end states
    pub fn new(
        server: Server,
        domain: impl Into<String>,
        server_group: impl Into<String>,
        user: User,
    ) -> Self {
        Self {
            server,
            domain: domain.into(),
            server_group: server_group.into(),
            user,
            timeout: DEFAULT_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            end_states: DEFAULT_END_STATES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    pub fn with_end_states<I, S>(mut self, end_states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.end_states = end_states.into_iter().map(Into::into).collect();
        self
    }

    /// Validates the configuration
    ///
    /// Called before every trigger so that credential problems surface as
    /// configuration errors and never reach the network.
    pub fn validate(&self) -> Result<()> {
        if let Some(field) = self.user.missing_field() {
            return Err(JobRunnerError::configuration(format!(
                "{} must not be empty",
                field
            )));
        }

        if self.server.host.is_empty() {
            return Err(JobRunnerError::configuration("server host must not be empty"));
        }

        if self.domain.is_empty() {
            return Err(JobRunnerError::configuration("domain must not be empty"));
        }

        if self.server_group.is_empty() {
            return Err(JobRunnerError::configuration(
                "server group must not be empty",
            ));
        }

        if self.poll_interval.is_zero() {
            return Err(JobRunnerError::configuration(
                "poll interval must be greater than 0",
            ));
        }

        if self.end_states.is_empty() {
            return Err(JobRunnerError::configuration(
                "at least one end state is required",
            ));
        }

        Ok(())
    }
}
