//! Server configuration read from the environment at startup.

use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use chrono::TimeDelta;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CONTENT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_WORD_TIME_LIMIT_SECS: u32 = 60;
const DEFAULT_SESSION_IDLE_TTL_SECS: i64 = 30 * 60;
const DEFAULT_SESSION_SWEEP_SECS: u64 = 60;

/// Settings for one server process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Interface to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
    /// Directory holding the YAML catalog; built-in content when absent.
    pub content_dir: Option<PathBuf>,
    /// Remote content provider; the local catalog when absent.
    pub upstream_url: Option<String>,
    /// Timeout for upstream requests.
    pub content_timeout: Duration,
    /// Countdown length for timed word games.
    pub word_time_limit_secs: u32,
    /// Sessions untouched for this long are evicted.
    pub session_idle_ttl: TimeDelta,
    /// How often stale sessions are swept.
    pub session_sweep_interval: Duration,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, treating blank values as
    /// unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable holds an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let lookup = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let word_time_limit_secs =
            parse(&lookup, "WORD_TIME_LIMIT_SECS", DEFAULT_WORD_TIME_LIMIT_SECS)?;
        if word_time_limit_secs == 0 {
            return Err(AppError::Config("WORD_TIME_LIMIT_SECS must be positive".to_owned()));
        }
        let idle_ttl_secs = parse(&lookup, "SESSION_IDLE_TTL_SECS", DEFAULT_SESSION_IDLE_TTL_SECS)?;
        let session_idle_ttl = TimeDelta::try_seconds(idle_ttl_secs)
            .filter(|ttl| *ttl > TimeDelta::zero())
            .ok_or_else(|| AppError::Config("SESSION_IDLE_TTL_SECS must be positive".to_owned()))?;
        let sweep_secs = parse(&lookup, "SESSION_SWEEP_SECS", DEFAULT_SESSION_SWEEP_SECS)?;
        if sweep_secs == 0 {
            return Err(AppError::Config("SESSION_SWEEP_SECS must be positive".to_owned()));
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: parse(&lookup, "PORT", DEFAULT_PORT)?,
            content_dir: lookup("CONTENT_DIR").map(PathBuf::from),
            upstream_url: lookup("CONTENT_UPSTREAM_URL"),
            content_timeout: Duration::from_secs(parse(
                &lookup,
                "CONTENT_TIMEOUT_SECS",
                DEFAULT_CONTENT_TIMEOUT_SECS,
            )?),
            word_time_limit_secs,
            session_idle_ttl,
            session_sweep_interval: Duration::from_secs(sweep_secs),
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `HOST:PORT` is not a socket address.
    pub fn addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|e| AppError::Config(format!("{key} is invalid: {e}"))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        // Act
        let config = config_from(&[]).unwrap();

        // Assert
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
        assert_eq!(config.content_dir, None);
        assert_eq!(config.upstream_url, None);
        assert_eq!(config.content_timeout, Duration::from_secs(10));
        assert_eq!(config.word_time_limit_secs, 60);
        assert_eq!(config.session_idle_ttl, TimeDelta::minutes(30));
        assert_eq!(config.session_sweep_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_values_are_read_and_trimmed() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", " 8080 "),
            ("CONTENT_DIR", "/srv/content"),
            ("CONTENT_UPSTREAM_URL", "http://content.local"),
            ("CONTENT_TIMEOUT_SECS", "3"),
            ("WORD_TIME_LIMIT_SECS", "90"),
        ])
        .unwrap();

        assert_eq!(config.addr().unwrap().to_string(), "127.0.0.1:8080");
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/content")));
        assert_eq!(config.upstream_url.as_deref(), Some("http://content.local"));
        assert_eq!(config.content_timeout, Duration::from_secs(3));
        assert_eq!(config.word_time_limit_secs, 90);
    }

    #[test]
    fn test_blank_values_count_as_unset() {
        let config = config_from(&[("CONTENT_DIR", "  "), ("PORT", "")]).unwrap();

        assert_eq!(config.content_dir, None);
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_invalid_port_is_a_config_error() {
        let result = config_from(&[("PORT", "seventy")]);

        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains("PORT")));
    }

    #[test]
    fn test_zero_time_limit_is_rejected() {
        let result = config_from(&[("WORD_TIME_LIMIT_SECS", "0")]);

        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_session_eviction_settings() {
        let config = config_from(&[("SESSION_IDLE_TTL_SECS", "600"), ("SESSION_SWEEP_SECS", "15")])
            .unwrap();

        assert_eq!(config.session_idle_ttl, TimeDelta::minutes(10));
        assert_eq!(config.session_sweep_interval, Duration::from_secs(15));
        assert!(matches!(
            config_from(&[("SESSION_IDLE_TTL_SECS", "-5")]),
            Err(AppError::Config(_))
        ));
        assert!(matches!(
            config_from(&[("SESSION_SWEEP_SECS", "0")]),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_invalid_host_fails_at_addr() {
        let config = config_from(&[("HOST", "not a host")]).unwrap();

        assert!(matches!(config.addr(), Err(AppError::Config(_))));
    }
}
