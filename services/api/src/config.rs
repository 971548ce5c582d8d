//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use tracing::Level;

use crate::adapters::Latency;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub log_level: Level,
    pub latency_base_ms: u64,
    pub latency_jitter_ms: u64,
    /// Populate the stores from the bundled fixtures; otherwise start empty.
    pub seed_fixtures: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let latency_base_ms =
            parse_var(&lookup, "MOCK_LATENCY_BASE_MS", Latency::DEFAULT_BASE_MS)?;
        let latency_jitter_ms =
            parse_var(&lookup, "MOCK_LATENCY_JITTER_MS", Latency::DEFAULT_JITTER_MS)?;
        let seed_fixtures = parse_var(&lookup, "SEED_FIXTURES", true)?;

        Ok(Self {
            log_level,
            latency_base_ms,
            latency_jitter_ms,
            seed_fixtures,
        })
    }

    pub fn latency(&self) -> Latency {
        Latency::from_millis(self.latency_base_ms, self.latency_jitter_ms)
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue(key.to_string(), e.to_string())),
    }
}
