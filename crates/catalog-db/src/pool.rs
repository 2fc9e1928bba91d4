//! # Database Pool Management
//!
//! Connection pool creation and configuration for SQLite.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Database Handle Lifecycle                          │
//! │                                                                         │
//! │  DbConfig::new(url) ← Connection string + pool settings                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new(config).await ← Open pool + run migrations              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.products() ← Repository borrowing the pool                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.close().await ← Owner releases every connection                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::repository::product::ProductRepository;
use crate::repository::MissingRowPolicy;

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("sqlite://catalog.db")
///     .max_connections(1)
///     .missing_row_policy(MissingRowPolicy::NotFound);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Connection string, e.g. `sqlite://catalog.db` or `sqlite::memory:`.
    pub database_url: String,

    /// Maximum number of connections in the pool.
    /// Default: 1 (every operation runs sequentially)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,

    /// Whether update/delete report rows they did not find.
    /// Default: [`MissingRowPolicy::Ignore`]
    pub missing_row_policy: MissingRowPolicy,
}

impl DbConfig {
    /// Creates a new database configuration for the given connection string.
    ///
    /// File-backed SQLite databases are created if they don't exist.
    pub fn new(database_url: impl Into<String>) -> Self {
        DbConfig {
            database_url: database_url.into(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
            missing_row_policy: MissingRowPolicy::Ignore,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Sets the missing-row policy handed to repositories.
    pub fn missing_row_policy(mut self, policy: MissingRowPolicy) -> Self {
        self.missing_row_policy = policy;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// Each call gets its own isolated database, which lives as long as
    /// the pool's single connection.
    pub fn in_memory() -> Self {
        DbConfig {
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            ..DbConfig::new("sqlite::memory:")
        }
    }
}

// =============================================================================
// Database
// =============================================================================

/// Database handle owning the connection pool.
///
/// The handle is passed explicitly to whatever needs it; there is no global
/// connection. Cloning shares the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    /// The SQLite connection pool.
    pool: SqlitePool,

    missing_row_policy: MissingRowPolicy,
}

impl Database {
    /// Opens the connection pool.
    ///
    /// ## What This Does
    /// 1. Parses the connection string
    /// 2. Configures SQLite:
    ///    - WAL journal (in-memory databases ignore it)
    ///    - NORMAL synchronous
    ///    - Create the file if missing
    /// 3. Creates the connection pool
    /// 4. Runs migrations (if enabled)
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            url = %config.database_url.chars().take(30).collect::<String>(),
            "Initializing database connection"
        );

        let connect_options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        let db = Database {
            pool,
            missing_row_policy: config.missing_row_policy,
        };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Runs database migrations.
    ///
    /// Called by `new()` when `run_migrations` is true. Safe to call again.
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running database migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product repository.
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone(), self.missing_row_policy)
    }

    /// Closes the database connection pool.
    ///
    /// After calling close, all repository operations will fail.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
