//! Application configuration management

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::cli::CliOptions;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    fn from_value(value: &str) -> Self {
        if value.eq_ignore_ascii_case("pretty") {
            LogFormat::Pretty
        } else {
            LogFormat::Json
        }
    }
}

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP gateway listens on
    pub api_endpoint: String,

    /// SQLite database URL. File databases are created when missing.
    pub database_url: String,

    /// Connection pool size
    pub database_max_connections: u32,

    /// Deadline applied to calls that carry none. `None` disables it.
    pub query_timeout: Option<Duration>,

    /// Seed the demo races at startup
    pub seed_demo_data: bool,

    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: "0.0.0.0:8000".to_string(),
            database_url: "sqlite:./data/racing.db".to_string(),
            database_max_connections: 5,
            query_timeout: Some(Duration::from_millis(5000)),
            seed_demo_data: true,
            log_format: LogFormat::Json,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .with_context(|| format!("Invalid DATABASE_MAX_CONNECTIONS: {value}"))?,
            None => defaults.database_max_connections,
        };

        let query_timeout = match lookup("QUERY_TIMEOUT_MS") {
            Some(value) => {
                let ms: u64 = value
                    .parse()
                    .with_context(|| format!("Invalid QUERY_TIMEOUT_MS: {value}"))?;
                (ms > 0).then(|| Duration::from_millis(ms))
            }
            None => defaults.query_timeout,
        };

        Ok(Self {
            api_endpoint: lookup("API_ENDPOINT").unwrap_or(defaults.api_endpoint),

            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),

            database_max_connections,

            query_timeout,

            seed_demo_data: lookup("SEED_DEMO_DATA")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.seed_demo_data),

            log_format: lookup("LOG_FORMAT")
                .map(|v| LogFormat::from_value(&v))
                .unwrap_or_default(),
        })
    }

    /// Command line flags win over the environment.
    pub fn apply_cli(mut self, cli: CliOptions) -> Self {
        if let Some(endpoint) = cli.api_endpoint {
            self.api_endpoint = endpoint;
        }
        if let Some(url) = cli.database_url {
            self.database_url = url;
        }
        self
    }
}
