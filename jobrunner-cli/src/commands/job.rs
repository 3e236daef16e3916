//! Job command handlers

use anyhow::{Context, Result};
use colored::*;
use jobrunner_client::{JobInfo, JobRunner};
use jobrunner_core::domain::job::{STATUS_DISABLED, STATUS_READY, STATUS_RUNNING};
use tracing::warn;

use crate::config::ConnectionArgs;

/// Trigger each job in order, stopping at the first failure
pub async fn trigger_jobs(jobs: &[String], connection: &ConnectionArgs) -> Result<()> {
    let runner = build_runner(connection);

    let interrupt = runner.interrupt_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, aborting");
            interrupt.interrupt();
        }
    });

    for job in jobs {
        println!("{} {}", "Triggering".bold(), job.cyan());

        let job_info = runner
            .trigger_job(job)
            .await
            .with_context(|| format!("Failed to run job '{}'", job))?;

        print_job_info(&job_info, job);
    }

    Ok(())
}

/// Fetch and display the current status of a job
pub async fn show_status(job: &str, connection: &ConnectionArgs) -> Result<()> {
    let runner = build_runner(connection);

    let job_info = runner
        .job_status(job)
        .await
        .with_context(|| format!("Failed to fetch status of job '{}'", job))?;

    print_job_info(&job_info, job);

    Ok(())
}

fn build_runner(connection: &ConnectionArgs) -> JobRunner {
    let mut runner = JobRunner::new(connection.runner_config());
    if connection.insecure {
        runner.enable_insecure_tls();
    }
    runner
}

fn print_job_info(job_info: &JobInfo, job: &str) {
    println!("  {} Job {}", "▸".cyan(), job.bold());
    println!("    Status:   {}", colorize_status(&job_info.status));
    if let Some(process) = &job_info.process {
        println!("    Process:  {}", process.status);
        println!("    Duration: {} ms", process.duration);
    }
}

fn colorize_status(status: &str) -> ColoredString {
    match status {
        STATUS_READY => status.green(),
        STATUS_DISABLED => status.yellow(),
        STATUS_RUNNING => status.blue(),
        _ => status.normal(),
    }
}
