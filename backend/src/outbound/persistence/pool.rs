//! Connection pool for the Diesel SQLite store.
//!
//! The store is a single local file with one writer, so the pool defaults to
//! a single connection: checked out serially, every operation observes the
//! program order of the operations issued before it. Diesel's SQLite
//! connection is synchronous; [`DbPool::run`] moves each operation onto the
//! blocking thread pool so callers await a suspension point instead of
//! stalling the async scheduler.

use std::path::{Path, PathBuf};
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// Failed to check out a connection from the pool.
    #[error("failed to get connection from pool: {message}")]
    Checkout {
        /// Underlying checkout detail.
        message: String,
    },

    /// Failed to build the connection pool.
    #[error("failed to build connection pool: {message}")]
    Build {
        /// Underlying build detail.
        message: String,
    },

    /// The blocking task running the operation was cancelled or panicked.
    #[error("store task failed to complete: {message}")]
    Runtime {
        /// Underlying join detail.
        message: String,
    },
}

impl PoolError {
    /// Create a checkout error with the given message.
    pub fn checkout(message: impl Into<String>) -> Self {
        Self::Checkout {
            message: message.into(),
        }
    }

    /// Create a build error with the given message.
    pub fn build(message: impl Into<String>) -> Self {
        Self::Build {
            message: message.into(),
        }
    }

    /// Create a runtime error with the given message.
    pub fn runtime(message: impl Into<String>) -> Self {
        Self::Runtime {
            message: message.into(),
        }
    }
}

/// Configuration for the store connection pool.
///
/// # Example
///
/// ```ignore
/// let config = PoolConfig::new("/var/lib/app/store.db")
///     .with_max_size(1)
///     .with_connection_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct PoolConfig {
    database_path: PathBuf,
    max_size: u32,
    connection_timeout: Duration,
    busy_timeout: Duration,
}

impl PoolConfig {
    /// Create a new configuration for the given store file.
    ///
    /// Uses sensible defaults for a single-file store:
    /// - `max_size`: 1 connection (single writer)
    /// - `connection_timeout`: 30 seconds
    /// - `busy_timeout`: 5 seconds
    pub fn new(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            max_size: 1,
            connection_timeout: Duration::from_secs(30),
            busy_timeout: Duration::from_secs(5),
        }
    }

    /// Set the maximum number of connections in the pool.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Set the SQLite busy handler timeout applied to each connection.
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Get the store file path.
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

/// Pragmas applied to every connection as it joins the pool.
///
/// Foreign keys are off by default in SQLite; the review and favourite
/// tables rely on them, so they are switched on here rather than trusted to
/// application logic.
#[derive(Debug, Clone, Copy)]
struct ConnectionPragmas {
    busy_timeout_ms: u128,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionPragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout_ms
        ))
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Connection pool for the SQLite store.
///
/// # Example
///
/// ```ignore
/// let pool = DbPool::new(PoolConfig::new(path))?;
/// let rows = pool.run(|conn| users::table.load::<UserRow>(conn)).await;
/// ```
#[derive(Clone)]
pub struct DbPool {
    inner: Pool<ConnectionManager<SqliteConnection>>,
}

impl DbPool {
    /// Create a new connection pool with the given configuration.
    ///
    /// Opening the pool creates the store file when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Build` if the pool cannot be constructed (e.g.
    /// an unwritable path).
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        let manager = ConnectionManager::<SqliteConnection>::new(
            config.database_path.display().to_string(),
        );

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .connection_customizer(Box::new(ConnectionPragmas {
                busy_timeout_ms: config.busy_timeout.as_millis(),
            }))
            .build(manager)
            .map_err(|err| PoolError::build(err.to_string()))?;

        Ok(Self { inner: pool })
    }

    /// Run a store operation on the blocking thread pool.
    ///
    /// The outer error reports pool-level failures (checkout, cancelled
    /// task); the inner result is whatever the operation returned. Adapters
    /// map both layers into their port error.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Checkout` when no connection can be obtained
    /// within the configured timeout, and `PoolError::Runtime` when the
    /// blocking task is cancelled or panics.
    pub async fn run<T, E, F>(&self, operation: F) -> Result<Result<T, E>, PoolError>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: Send + 'static,
    {
        let pool = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get().map_err(|err| PoolError::checkout(err.to_string()))?;
            Ok(operation(&mut conn))
        })
        .await
        .map_err(|err| PoolError::runtime(err.to_string()))?
    }
}
