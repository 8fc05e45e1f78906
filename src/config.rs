use std::env;
use std::time::Duration;

use thiserror::Error;

/// Wall-clock budget for a single store call.
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 100;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable '{0}'")]
    Missing(&'static str),
    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub store_timeout: Duration,
    /// Whether an update on an unknown `order_item_id` inserts a partial record.
    pub upsert_on_miss: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let timeout_secs = parse_or(&lookup, "STORE_TIMEOUT_SECS", DEFAULT_STORE_TIMEOUT_SECS)?;
        let upsert_on_miss = parse_or(&lookup, "ORDER_ITEM_UPSERT_ON_MISS", false)?;

        Ok(Self {
            host,
            port,
            database_url,
            store_timeout: Duration::from_secs(timeout_secs),
            upsert_on_miss,
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        None => Ok(default),
    }
}
