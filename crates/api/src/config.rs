//! Process configuration, read from the environment.

use std::net::SocketAddr;

use cookbook_observability::{LogFormat, UnknownLogFormat};
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "COOKBOOK_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "COOKBOOK_LOG_FORMAT";

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("COOKBOOK_BIND_ADDR={value:?} is not a socket address: {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error("COOKBOOK_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] UnknownLogFormat),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<SocketAddr>()
                .map_err(|source| ConfigError::InvalidBindAddr { value: raw.clone(), source })?,
            None => SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)),
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse::<LogFormat>()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}
