use std::env;
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

const DEFAULT_DATABASE_URL: &str = "sqlite://votes.db?mode=rwc";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_MAX_CONNECTIONS: &str = "10";

#[derive(Debug, thiserror::Error)]
#[error("Invalid {key} value {value:?}: {reason}")]
pub struct ConfigError {
    key: &'static str,
    value: String,
    reason: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub static_dir: PathBuf,
    pub max_connections: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for
    /// unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: try_load(&lookup, "DATABASE_URL", DEFAULT_DATABASE_URL)?,
            bind_addr: try_load(&lookup, "BIND_ADDR", DEFAULT_BIND_ADDR)?,
            static_dir: try_load(&lookup, "STATIC_DIR", DEFAULT_STATIC_DIR)?,
            max_connections: try_load(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let value = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value.parse().map_err(|e: T::Err| ConfigError {
        key,
        reason: e.to_string(),
        value,
    })
}
