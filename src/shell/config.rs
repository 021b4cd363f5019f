use crate::shared::infrastructure::remote_api::RemoteApiConfig;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REMOTE_API_BASE_URL: &str = "http://localhost:8081";
const DEFAULT_REMOTE_API_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub jwt_secret: String,
    pub remote_api: RemoteApiConfig,
    /// `None` disables the background sync worker.
    pub sync_interval: Option<Duration>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let value = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let bind_addr = parse(
            "BIND_ADDR",
            value("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
        )?;
        let jwt_secret = value("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let timeout_ms: u64 = match value("REMOTE_API_TIMEOUT_MS") {
            Some(raw) => parse("REMOTE_API_TIMEOUT_MS", raw)?,
            None => DEFAULT_REMOTE_API_TIMEOUT_MS,
        };
        let sync_interval_secs: u64 = match value("SYNC_INTERVAL_SECS") {
            Some(raw) => parse("SYNC_INTERVAL_SECS", raw)?,
            None => 0,
        };

        Ok(Self {
            bind_addr,
            jwt_secret,
            remote_api: RemoteApiConfig {
                base_url: value("REMOTE_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_REMOTE_API_BASE_URL.into()),
                token: value("REMOTE_API_TOKEN"),
                timeout: Duration::from_millis(timeout_ms),
            },
            sync_interval: (sync_interval_secs > 0).then(|| Duration::from_secs(sync_interval_secs)),
        })
    }
}

fn parse<T: std::str::FromStr>(name: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value: raw })
}
