//! SMC Job Runner CLI
//!
//! Command-line interface for triggering jobs on an SMC server and waiting
//! for them to finish.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::ConnectionArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jobrunner")]
#[command(about = "Trigger SMC jobs and wait for them to finish", long_about = None)]
struct Cli {
    #[command(flatten)]
    connection: ConnectionArgs,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobrunner_cli=info,jobrunner_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    handle_command(cli.command, &cli.connection).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_trigger_command() {
        let cli = Cli::try_parse_from([
            "jobrunner",
            "--host",
            "smc.example.com",
            "--domain",
            "SLDSystem",
            "--user",
            "admin",
            "--password",
            "secret",
            "--insecure",
            "trigger",
            "RebuildIndex",
            "Cleanup Job",
        ])
        .unwrap();

        assert_eq!(cli.connection.host, "smc.example.com");
        assert!(cli.connection.insecure);
        match cli.command {
            Commands::Trigger { jobs } => assert_eq!(jobs, vec!["RebuildIndex", "Cleanup Job"]),
            _ => panic!("expected trigger command"),
        }
    }

    #[test]
    fn test_trigger_requires_a_job() {
        let result = Cli::try_parse_from([
            "jobrunner",
            "--host",
            "smc.example.com",
            "--domain",
            "SLDSystem",
            "--user",
            "admin",
            "--password",
            "secret",
            "trigger",
        ]);
        assert!(result.is_err());
    }
}
