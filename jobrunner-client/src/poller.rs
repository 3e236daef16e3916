//! Job status poller
//!
//! Polls the job resource until its status is one of the configured end
//! states. Elapsed time is measured from the start of polling and compared to
//! the wait budget before every wait; the first poll happens one interval
//! after polling starts since the trigger response already reported the
//! initial status.

use std::time::Duration;

use jobrunner_core::domain::job::JobInfo;
use tokio::time::Instant;
use tracing::{debug, info, trace};

use crate::assertion::{ResponseExpectation, validate_response};
use crate::error::{JobRunnerError, Result};
use crate::interrupt::InterruptHandle;
use crate::request::{APPLICATION_JSON, HttpRequest, JobRequest};
use crate::transport::Transport;

/// Expected shape of every trigger and status response
pub(crate) const JOB_RESPONSE: ResponseExpectation<'static> = ResponseExpectation {
    status: 200,
    content_type: APPLICATION_JSON,
    content_required: true,
};

/// Sends `request`, validates the response and parses the job status
pub(crate) async fn fetch_job_info(
    transport: &dyn Transport,
    request: HttpRequest,
) -> Result<JobInfo> {
    let response = transport.execute(request).await?;

    let assertion = validate_response(&response, JOB_RESPONSE);
    if !assertion.succeeded() {
        return Err(JobRunnerError::communication(assertion.summarize("; ")));
    }

    serde_json::from_str(&response.body).map_err(|e| {
        JobRunnerError::communication(format!("Failed to parse job status response: {}", e))
    })
}

/// Polls one job until it finishes, times out, or is interrupted
pub(crate) struct StatusPoller<'a> {
    pub transport: &'a dyn Transport,
    pub request: &'a JobRequest,
    pub poll_interval: Duration,
    pub max_wait: Duration,
    pub end_states: &'a [String],
    pub interrupt: &'a InterruptHandle,
}

impl StatusPoller<'_> {
    /// Runs the polling loop
    ///
    /// `initial_status` is the status reported by the trigger response; it
    /// only serves to detect the first status change.
    pub async fn run(&self, initial_status: &str) -> Result<JobInfo> {
        let job = self.request.job_name();
        let started = Instant::now();
        let mut last_status = initial_status.to_string();

        info!(
            "Waiting for job '{}' (poll interval: {:?}, timeout: {:?})",
            job, self.poll_interval, self.max_wait
        );

        loop {
            if started.elapsed() > self.max_wait {
                return Err(JobRunnerError::Timeout {
                    job: job.to_string(),
                    max_wait: self.max_wait,
                });
            }

            self.interrupt
                .sleep(self.poll_interval)
                .await
                .map_err(|_| JobRunnerError::Interrupted {
                    job: job.to_string(),
                })?;

            let job_info = fetch_job_info(self.transport, self.request.get()).await?;

            trace!("Job '{}' status: {}", job, job_info.status);

            if job_info.is_finished(self.end_states) {
                log_completion(&job_info, job);
                return Ok(job_info);
            }

            if job_info.status != last_status {
                debug!(
                    "Job '{}' changed status from {} to {}",
                    job, last_status, job_info.status
                );
                last_status = job_info.status;
            }
        }
    }
}

/// Logs the final status and, if the process started, its duration
pub(crate) fn log_completion(job_info: &JobInfo, job: &str) {
    match &job_info.process {
        Some(process) => info!(
            "Job '{}' finished with status {} (process {} after {} ms)",
            job, job_info.status, process.status, process.duration
        ),
        None => info!("Job '{}' finished with status {}", job, job_info.status),
    }
}
