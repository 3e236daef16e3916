//! SMC Job Runner Client
//!
//! Triggers a named job on an SMC server and waits until the job reaches an
//! end state (`READY` or `DISABLED`) or the configured timeout elapses.
//!
//! A trigger call sends one PUT to the job resource, validates the response,
//! and then polls the same resource with GET requests at a fixed interval.
//! Every failure is returned as a [`JobRunnerError`]; nothing is retried.
//!
//! # Example
//!
//! ```no_run
//! use jobrunner_client::{JobRunner, JobRunnerConfig};
//! use jobrunner_core::domain::server::{Protocol, Server};
//! use jobrunner_core::domain::user::User;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = JobRunnerConfig::new(
//!         Server::new(Protocol::Https, "smc.example.com", 443),
//!         "SLDSystem",
//!         "BOS",
//!         User::new("admin", "secret"),
//!     )
//!     .with_timeout(Duration::from_secs(600));
//!
//!     let runner = JobRunner::new(config);
//!     let job = runner.trigger_job("RebuildSearchIndex").await?;
//!
//!     println!("Job finished with status {}", job.status);
//!     Ok(())
//! }
//! ```

pub mod assertion;
pub mod config;
pub mod error;
mod interrupt;
mod poller;
pub mod request;
pub mod transport;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use config::JobRunnerConfig;
pub use error::{JobRunnerError, Result};
pub use interrupt::{InterruptHandle, Interrupted};
pub use jobrunner_core::domain::job::{JobInfo, ProcessInfo};
pub use transport::{HttpResponse, HttpTransport, Transport};

use std::sync::Arc;

use jobrunner_core::dto::job::TriggerJob;
use tracing::{debug, info};

use crate::poller::{StatusPoller, fetch_job_info, log_completion};
use crate::request::JobRequest;

/// Triggers jobs on an SMC server and waits for them to finish
///
/// Each call to [`trigger_job`](Self::trigger_job) is self-contained; the
/// runner keeps no state between calls apart from the TLS flag and the
/// interrupt handle.
#[derive(Clone)]
pub struct JobRunner {
    config: JobRunnerConfig,
    /// Accept any certificate and hostname when building the HTTP transport
    insecure_tls: bool,
    /// Injected transport; when absent an [`HttpTransport`] is built per call
    transport: Option<Arc<dyn Transport>>,
    interrupt: InterruptHandle,
}

impl JobRunner {
    /// Create a job runner that talks to the server over HTTP(S)
    pub fn new(config: JobRunnerConfig) -> Self {
        Self {
            config,
            insecure_tls: false,
            transport: None,
            interrupt: InterruptHandle::new(),
        }
    }

    /// Create a job runner with a custom transport
    ///
    /// The TLS flag has no effect on an injected transport.
    pub fn with_transport(config: JobRunnerConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            transport: Some(transport),
            ..Self::new(config)
        }
    }

    pub fn config(&self) -> &JobRunnerConfig {
        &self.config
    }

    // =============================================================================
    // TLS Policy
    // =============================================================================

    /// Accept any certificate chain and any hostname when set
    pub fn set_insecure_tls(&mut self, insecure_tls: bool) {
        self.insecure_tls = insecure_tls;
    }

    /// Switch off certificate and hostname verification
    pub fn enable_insecure_tls(&mut self) {
        self.set_insecure_tls(true);
    }

    pub fn is_insecure_tls(&self) -> bool {
        self.insecure_tls
    }

    /// Handle to interrupt the waits between polls, e.g. on Ctrl-C
    pub fn interrupt_handle(&self) -> InterruptHandle {
        self.interrupt.clone()
    }

    // =============================================================================
    // Job Lifecycle
    // =============================================================================

    /// Trigger a job and wait until it reaches an end state
    ///
    /// # Arguments
    /// * `job_name` - Name of the job in the configured domain
    ///
    /// # Returns
    /// The last job status reported by the server
    ///
    /// # Errors
    /// * `Configuration` - invalid settings, detected before any request
    /// * `Communication` - a response failed validation or was not valid JSON
    /// * `Timeout` - the job did not finish within the configured timeout
    /// * `Interrupted` - the runner was interrupted before the trigger or
    ///   during a wait between polls
    pub async fn trigger_job(&self, job_name: &str) -> Result<JobInfo> {
        if self.interrupt.is_interrupted() {
            return Err(JobRunnerError::Interrupted {
                job: job_name.to_string(),
            });
        }

        let request = JobRequest::build(&self.config, job_name)?;
        let transport = self.transport()?;

        info!("Triggering job '{}' on {}", job_name, self.config.server);

        let body = serde_json::to_string(&TriggerJob::new(job_name)).map_err(|e| {
            JobRunnerError::configuration(format!("Failed to serialize trigger request: {}", e))
        })?;
        let job_info = fetch_job_info(transport.as_ref(), request.put(body)).await?;

        debug!("Job '{}' accepted with status {}", job_name, job_info.status);

        if job_info.is_finished(&self.config.end_states) {
            log_completion(&job_info, job_name);
            return Ok(job_info);
        }

        StatusPoller {
            transport: transport.as_ref(),
            request: &request,
            poll_interval: self.config.poll_interval,
            max_wait: self.config.timeout,
            end_states: &self.config.end_states,
            interrupt: &self.interrupt,
        }
        .run(&job_info.status)
        .await
    }

    /// Fetch the current status of a job without triggering it
    pub async fn job_status(&self, job_name: &str) -> Result<JobInfo> {
        let request = JobRequest::build(&self.config, job_name)?;
        let transport = self.transport()?;

        fetch_job_info(transport.as_ref(), request.get()).await
    }

    fn transport(&self) -> Result<Arc<dyn Transport>> {
        match &self.transport {
            Some(transport) => Ok(Arc::clone(transport)),
            None => Ok(Arc::new(HttpTransport::new(self.insecure_tls)?)),
        }
    }
}
