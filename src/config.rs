//! Host configuration parsed from environment variables.
//!
//! Variables (all optional):
//! - `PORT`: listen port, default 3000
//! - `API_UPSTREAM_URL`: backend base URL that `/api/*` is forwarded to,
//!   default `http://127.0.0.1:8080`
//! - `API_UPSTREAM_TIMEOUT_SECS`: per-request timeout, default 30
//! - `API_MAX_BODY_BYTES`: largest request body forwarded (uploads), default 50 MiB

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_UPSTREAM_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// Upstream URL must be absolute http(s).
    #[error("invalid API_UPSTREAM_URL: {0}")]
    InvalidUpstream(String),

    #[error("invalid {var}: {value}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Base URL without a trailing slash.
    pub api_upstream: String,
    pub upstream_timeout_secs: u64,
    pub max_body_bytes: usize,
}

impl HostConfig {
    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the first malformed variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            port: parse_port(lookup("PORT").as_deref())?,
            api_upstream: parse_upstream(lookup("API_UPSTREAM_URL").as_deref())?,
            upstream_timeout_secs: parse_number(
                "API_UPSTREAM_TIMEOUT_SECS",
                lookup("API_UPSTREAM_TIMEOUT_SECS").as_deref(),
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?,
            max_body_bytes: parse_number(
                "API_MAX_BODY_BYTES",
                lookup("API_MAX_BODY_BYTES").as_deref(),
                DEFAULT_MAX_BODY_BYTES,
            )?,
        })
    }
}

fn blank_to_none(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match blank_to_none(raw) {
        None => Ok(DEFAULT_PORT),
        Some(v) => match v.parse::<u16>() {
            Ok(port) if port > 0 => Ok(port),
            _ => Err(ConfigError::InvalidPort(v.to_owned())),
        },
    }
}

fn parse_upstream(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(url) = blank_to_none(raw) else {
        return Ok(DEFAULT_API_UPSTREAM_URL.to_owned());
    };
    let url = url.trim_end_matches('/');
    let host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"));
    match host {
        Some(rest) if !rest.is_empty() => Ok(url.to_owned()),
        _ => Err(ConfigError::InvalidUpstream(url.to_owned())),
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: Option<&str>, default: T) -> Result<T, ConfigError> {
    match blank_to_none(raw) {
        None => Ok(default),
        Some(v) => v
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidNumber { var, value: v.to_owned() }),
    }
}
