//! Database schema definitions and initialization

use std::{path::Path, time::Duration};

use lane_core::{Error, Result};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
    SqlitePool,
};

/// Database schema as SQL string - executed once on open
pub(crate) const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS lanes (
    id TEXT PRIMARY KEY NOT NULL,
    length INTEGER NOT NULL CHECK(length >= 1),
    cranes TEXT NOT NULL,
    created_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now')),
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_lanes_created_at ON lanes(created_at);
";

/// Create `SQLite` connection pool for a database file
pub(crate) async fn create_connection_pool(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(5)
        .min_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| Error::storage(format!("Failed to connect to database: {e}")))
}

/// Initialize database schema
pub(crate) async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(SCHEMA)
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(|e| Error::storage(format!("Failed to initialize schema: {e}")))
}
