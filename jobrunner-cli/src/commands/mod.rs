//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod job;

use anyhow::Result;
use clap::Subcommand;

use crate::config::ConnectionArgs;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Trigger jobs one after another and wait for each to finish
    Trigger {
        /// Names of the jobs to run
        #[arg(required = true)]
        jobs: Vec<String>,
    },
    /// Show the current status of a job without triggering it
    Status {
        /// Name of the job
        job: String,
    },
}

/// Handle a CLI command
///
/// # Arguments
/// * `command` - The command to execute
/// * `connection` - Server connection and polling options
pub async fn handle_command(command: Commands, connection: &ConnectionArgs) -> Result<()> {
    match command {
        Commands::Trigger { jobs } => job::trigger_jobs(&jobs, connection).await,
        Commands::Status { job } => job::show_status(&job, connection).await,
    }
}
