//! Database connection and operations

pub mod filter;
pub mod order_by;
pub mod queries;
pub mod races;
pub mod seed;
pub mod sqlite_helpers;

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub use filter::apply_filter;
pub use order_by::{OrderBy, OrderDirection, OrderField, apply_order_by};
pub use queries::RaceQuery;
pub use races::RaceRepository;

/// Database wrapper providing connection pool access
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    races: RaceRepository,
}

impl Database {
    /// Create a new database wrapper from an existing pool
    pub fn new(pool: SqlitePool) -> Self {
        let races = RaceRepository::new(pool.clone());
        Self { pool, races }
    }

    /// Create a new database connection pool. File databases are created when missing.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .with_context(|| format!("Invalid database URL: {url}"))?
            .create_if_missing(true);

        if let Some(dir) = database_dir(&options) {
            tokio::fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create database directory {}", dir.display()))?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to {url}"))?;

        Ok(Self::new(pool))
    }

    /// Get the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the races repository
    pub fn races(&self) -> RaceRepository {
        self.races.clone()
    }

    /// Create tables that do not exist yet
    pub async fn migrate(&self) -> Result<()> {
        seed::create_schema(&self.pool)
            .await
            .context("Failed to create races schema")?;
        Ok(())
    }
}

/// Directory a file database lives in, when it has one. In-memory stores
/// (named `file:...` by the driver) and bare file names need no directory.
fn database_dir(options: &SqliteConnectOptions) -> Option<&Path> {
    let filename = options.get_filename();
    let name = filename.to_string_lossy();
    if name.is_empty() || name.starts_with("file:") || name == ":memory:" {
        return None;
    }
    filename
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
}
