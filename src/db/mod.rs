//! Persistence connector.
//!
//! Owns the single SQLite connection pool shared by every request. The pool
//! is opened lazily on the first `connect()` call and reused afterwards;
//! a failed attempt is not remembered, so the next call tries again.

use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{debug, info};

const CREATE_CONTACTS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS contacts (
    id          TEXT PRIMARY KEY NOT NULL,
    name        TEXT NOT NULL,
    phone       TEXT NOT NULL,
    created_at  INTEGER NOT NULL,
    updated_at  INTEGER NOT NULL
)";

const CREATE_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_contacts_created_at ON contacts (created_at)";

/// Whether `url` names an in-memory SQLite database.
fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Settings for opening the pool.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,
    /// Maximum connections in the pool
    pub max_connections: u32,
    /// How long to wait for a free connection
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

impl From<&Config> for DatabaseConfig {
    fn from(config: &Config) -> Self {
        Self {
            url: config.database_url.clone(),
            max_connections: config.max_connections,
            acquire_timeout: Duration::from_secs(config.connect_timeout),
        }
    }
}

/// Lazily connected handle to the contact store.
#[derive(Debug)]
pub struct Database {
    config: DatabaseConfig,
    pool: OnceCell<SqlitePool>,
}

impl Database {
    /// Create a handle without touching the store.
    pub fn new(config: DatabaseConfig) -> Self {
        Self {
            config,
            pool: OnceCell::new(),
        }
    }

    /// Return the shared pool, opening it and creating the schema first if
    /// this is the first successful call.
    ///
    /// Concurrent first callers wait on a single initialization.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Connection` if the store cannot be opened.
    pub async fn connect(&self) -> StoreResult<&SqlitePool> {
        self.pool.get_or_try_init(|| self.open()).await
    }

    /// Whether a pool has been opened.
    pub fn is_connected(&self) -> bool {
        self.pool.initialized()
    }

    async fn open(&self) -> StoreResult<SqlitePool> {
        debug!(url = %self.config.url, "Opening contact store");

        let options = SqliteConnectOptions::from_str(&self.config.url)
            .map_err(|e| StoreError::Connection(e.to_string()))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(self.config.max_connections)
            .acquire_timeout(self.config.acquire_timeout);
        if is_in_memory(&self.config.url) {
            // An in-memory database is dropped along with its last connection.
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        sqlx::query(CREATE_CONTACTS_TABLE)
            .execute(&pool)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        sqlx::query(CREATE_CREATED_AT_INDEX)
            .execute(&pool)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        info!(
            url = %self.config.url,
            max_connections = self.config.max_connections,
            "Connected to contact store"
        );
        Ok(pool)
    }

    /// Close the pool if it was opened.
    pub async fn close(&self) {
        if let Some(pool) = self.pool.get() {
            pool.close().await;
        }
    }
}
