//! Configuration module
//!
//! Connection settings shared by all commands. Every option can also be
//! supplied through an `SMC_*` environment variable.

use std::time::Duration;

use clap::Args;
use jobrunner_client::JobRunnerConfig;
use jobrunner_client::config::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};
use jobrunner_core::domain::server::{Protocol, Server};
use jobrunner_core::domain::user::User;

/// Connection and polling options
#[derive(Args)]
pub struct ConnectionArgs {
    /// Protocol used to reach the server (http or https)
    #[arg(long, env = "SMC_PROTOCOL", default_value = "https")]
    pub protocol: Protocol,

    /// Host name of the server
    #[arg(long, env = "SMC_HOST")]
    pub host: String,

    /// Port of the server [default: 80 for http, 443 for https]
    #[arg(long, env = "SMC_PORT")]
    pub port: Option<u16>,

    /// Domain the jobs belong to
    #[arg(long, env = "SMC_DOMAIN")]
    pub domain: String,

    /// Server group handling the request
    #[arg(long, env = "SMC_SERVER_GROUP", default_value = "BOS")]
    pub server_group: String,

    /// User name for basic authentication
    #[arg(long, env = "SMC_USER")]
    pub user: String,

    /// Password for basic authentication
    #[arg(long, env = "SMC_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Maximum time to wait for a job, in milliseconds
    #[arg(long, env = "SMC_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// Wait between two status polls, in milliseconds
    #[arg(long, env = "SMC_POLL_INTERVAL_MS", default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64)]
    pub poll_interval_ms: u64,

    /// Accept any TLS certificate and hostname
    #[arg(long, env = "SMC_INSECURE")]
    pub insecure: bool,
}

impl ConnectionArgs {
    /// Builds the runner configuration from the parsed options
    pub fn runner_config(&self) -> JobRunnerConfig {
        let port = self.port.unwrap_or_else(|| self.protocol.default_port());

        JobRunnerConfig::new(
            Server::new(self.protocol, self.host.clone(), port),
            self.domain.clone(),
            self.server_group.clone(),
            User::new(self.user.clone(), self.password.clone()),
        )
        .with_timeout(Duration::from_millis(self.timeout_ms))
        .with_poll_interval(Duration::from_millis(self.poll_interval_ms))
    }
}
