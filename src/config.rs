//! Configuration management for the contacts API.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

/// Configuration for the contacts API.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL, e.g. `sqlite:contacts.db`
    pub database_url: String,

    /// Address the HTTP server listens on (default: 127.0.0.1:3000)
    pub bind_address: SocketAddr,

    /// Upper bound on pooled connections (default: 5)
    pub max_connections: u32,

    /// Seconds to wait for a pooled connection (default: 10)
    pub connect_timeout: u64,

    /// Log filter used when `RUST_LOG` is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `DATABASE_URL`: SQLite connection URL
    ///
    /// Optional environment variables:
    /// - `BIND_ADDRESS`: listen address (default: 127.0.0.1:3000)
    /// - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
    /// - `DATABASE_CONNECT_TIMEOUT`: pool acquire timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("DATABASE_URL".to_string()))?;

        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_URL".to_string(),
                reason: "Must start with sqlite:".to_string(),
            });
        }

        let bind_address = match env::var("BIND_ADDRESS") {
            Ok(val) => val.parse::<SocketAddr>().map_err(|_| ConfigError::InvalidValue {
                var: "BIND_ADDRESS".to_string(),
                reason: format!("Must be a socket address like 127.0.0.1:3000, got: {}", val),
            })?,
            Err(_) => Self::default().bind_address,
        };

        let max_connections = Self::parse_env_u32("DATABASE_MAX_CONNECTIONS", 5)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                var: "DATABASE_MAX_CONNECTIONS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let connect_timeout = Self::parse_env_u64("DATABASE_CONNECT_TIMEOUT", 10)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            database_url,
            bind_address,
            max_connections,
            connect_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "sqlite:contacts.db".to_string(),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_connections: 5,
            connect_timeout: 10,
            log_level: "info".to_string(),
        }
    }
}
