//! Process configuration, read from environment variables.

use std::env;
use std::net::SocketAddr;

use storefront_observability::LogFormat;
use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "STOREFRONT_BIND_ADDR";
pub const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var} value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    /// Load from the process environment. Unset variables fall back to defaults.
    ///
    /// Runs before logging is initialized, so it reports nothing itself; the
    /// caller logs the resolved values.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_addr = match lookup(BIND_ADDR_VAR) {
            Some(raw) => parse_var(BIND_ADDR_VAR, &raw)?,
            None => defaults.bind_addr,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => parse_var(LOG_FORMAT_VAR, &raw)?,
            None => defaults.log_format,
        };

        Ok(Self {
            bind_addr,
            log_format,
        })
    }
}

fn parse_var<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: core::str::FromStr,
    T::Err: core::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
