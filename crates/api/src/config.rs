//! Environment-driven configuration for the API server.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `API_HOST` | bind address | `0.0.0.0` |
//! | `API_PORT` | listen port | `3000` |
//! | `DATABASE_URL` | PostgreSQL connection string | required |
//! | `LOG_LEVEL` | tracing level | `info` |
//! | `API_CORS_ORIGINS` | comma-separated allowed origins | unset |
//! | `API_REQUEST_TIMEOUT_SECONDS` | per-request timeout | `30` |

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_level: Level,
    pub cors_origins: Option<Vec<String>>,
    pub request_timeout: u64,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl ApiConfig {
    /// Reads the configuration from the process environment. Fails when
    /// `DATABASE_URL` is missing or `API_PORT` is not a valid port.
    pub fn from_env() -> Result<Self> {
        let host = env_or("API_HOST", "0.0.0.0");
        let port = env_or("API_PORT", "3000")
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        let database_url = env::var("DATABASE_URL")
            .wrap_err("DATABASE_URL environment variable must be set")?;

        // Unknown level strings fall back to info rather than failing boot.
        let log_level = env_or("LOG_LEVEL", "info")
            .parse::<Level>()
            .unwrap_or(Level::INFO);

        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|raw| {
            raw.split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect()
        });

        let request_timeout = env_or("API_REQUEST_TIMEOUT_SECONDS", "30")
            .parse()
            .unwrap_or(30);

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            request_timeout,
        })
    }

    /// The bind address in `host:port` form.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
