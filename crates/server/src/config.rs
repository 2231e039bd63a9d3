use database::db::DatabaseConfig;
use std::{path::PathBuf, time::Duration};
use thiserror::Error;

const DEFAULT_DATABASE_PATH: &str = "backend/Hotelek.db";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SCHEMA_GUARD_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a whole number of seconds, got {value:?}")]
    InvalidSeconds { name: &'static str, value: String },
}

/// Runtime settings, read from the environment and an optional `.env` file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub bind_addr: String,
    pub busy_timeout: Duration,
    pub schema_guard_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for unset keys
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let seconds = |name: &'static str, default: u64| -> Result<Duration, ConfigError> {
            match lookup(name) {
                Some(value) => value
                    .trim()
                    .parse()
                    .map(Duration::from_secs)
                    .map_err(|_| ConfigError::InvalidSeconds { name, value }),
                None => Ok(Duration::from_secs(default)),
            }
        };

        Ok(Self {
            database_path: lookup("HOTEL_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH)),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            busy_timeout: seconds("DB_BUSY_TIMEOUT_SECS", DEFAULT_BUSY_TIMEOUT_SECS)?,
            schema_guard_timeout: seconds(
                "SCHEMA_GUARD_TIMEOUT_SECS",
                DEFAULT_SCHEMA_GUARD_TIMEOUT_SECS,
            )?,
        })
    }

    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig::for_file(&self.database_path, self.busy_timeout)
    }
}
