//! SQLite backend. The app keeps a single `kv_entries` table; the saved
//! answer set is one row in it.

use std::sync::Arc;
use std::time::Duration;

use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use thiserror::Error;

use crate::repository::{KeyValueRepository, Storage};

mod kv_repo;
mod migrate;

#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SqliteInitError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// One writer plus a concurrent read.
const MAX_CONNECTIONS: u32 = 2;
const BUSY_TIMEOUT_PRAGMA: &str = "PRAGMA busy_timeout = 5000;";

impl SqliteRepository {
    /// Open a pool on `database_url` with WAL journaling and a busy timeout.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if the database cannot be opened or a
    /// pragma is rejected.
    pub async fn connect(database_url: &str) -> Result<Self, SqliteInitError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(5))
            .after_connect(|conn, _meta| {
                Box::pin(async move {
                    sqlx::query("PRAGMA journal_mode = WAL;")
                        .execute(&mut *conn)
                        .await?;
                    sqlx::query(BUSY_TIMEOUT_PRAGMA)
                        .execute(&mut *conn)
                        .await?;
                    Ok(())
                })
            })
            .connect(database_url)
            .await?;
        tracing::debug!(database_url, max_connections = MAX_CONNECTIONS, "answer database opened");
        Ok(Self { pool })
    }

    /// Bring `kv_entries` up to the current schema version.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if a migration statement fails.
    pub async fn migrate(&self) -> Result<(), SqliteInitError> {
        migrate::run_migrations(&self.pool).await
    }
}

impl Storage {
    /// Open, migrate and wrap the key-value table behind the `Storage` seam.
    ///
    /// # Errors
    ///
    /// Returns `SqliteInitError` if opening or migrating fails.
    pub async fn sqlite(database_url: &str) -> Result<Self, SqliteInitError> {
        let repo = SqliteRepository::connect(database_url).await?;
        repo.migrate().await?;
        let kv: Arc<dyn KeyValueRepository> = Arc::new(repo);
        Ok(Self { kv })
    }
}
