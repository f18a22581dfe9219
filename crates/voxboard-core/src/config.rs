// ── Runtime configuration ──
//
// Everything comes from `VOXBOARD_*` environment variables; there is no
// config file. The five connection settings are required and carry no
// defaults. The password never appears in Debug output.

use std::time::Duration;

use figment::{
    Figment,
    providers::Env,
};
use secrecy::SecretString;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

/// Runtime configuration for the poller and the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Voice server hostname or address.
    pub host: String,
    /// ServerQuery port (the admin port, not the voice port).
    pub port: u16,
    /// ServerQuery admin username.
    pub username: String,
    /// ServerQuery admin password.
    pub password: SecretString,
    /// Numeric virtual-server identifier to select after connecting.
    pub server_id: u64,

    /// Address the dashboard listens on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Seconds to sleep between poll cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Deadline applied to every individual query-protocol call.
    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,
}

fn default_listen_addr() -> String {
    "0.0.0.0:2208".into()
}
fn default_poll_interval_secs() -> u64 {
    5
}
fn default_query_timeout_secs() -> u64 {
    10
}

impl Config {
    pub const ENV_PREFIX: &'static str = "VOXBOARD_";

    /// Load from `VOXBOARD_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::extract(Figment::new().merge(Env::prefixed(Self::ENV_PREFIX)))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// `host:port` of the query endpoint.
    pub fn query_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}
