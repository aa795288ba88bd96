//! Lane persistence using `SQLx`
//!
//! This module provides async SQLite-based persistence with:
//! - Connection pooling (no Arc<Mutex<>>)
//! - Zero unwraps, zero panics
//! - Simple embedded schema (no migration files)
//!
//! Each lane is one row; its cranes are stored as a JSON array of
//! `{role, position}` so the record mirrors the domain value exactly.

use std::path::Path;

use lane_core::{Error, Lane, LaneId, LaneRepository, Result};
use sqlx::SqlitePool;

mod query;
mod schema;

/// Database wrapper for lane storage with connection pooling
#[derive(Clone)]
pub struct LaneDb {
    pool: SqlitePool,
}

impl LaneDb {
    /// Open or create a lane database at the given path
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if:
    /// - The parent directory cannot be created
    /// - Database file cannot be opened
    /// - Schema initialization fails
    pub async fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::storage(format!(
                    "Failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let pool = schema::create_connection_pool(path).await?;
        schema::init_schema(&pool).await?;
        tracing::debug!(path = %path.display(), "lane database opened");
        Ok(Self { pool })
    }

    /// Close the pool, waiting for connections to finish
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait::async_trait]
impl LaneRepository for LaneDb {
    async fn create(&self, lane: &Lane) -> Result<Lane> {
        let id = LaneId::generate();
        query::insert_lane(&self.pool, lane, &id).await?;
        Ok(lane.clone().with_id(id))
    }

    async fn find_by_id(&self, id: &LaneId) -> Result<Option<Lane>> {
        query::query_lane_by_id(&self.pool, id).await
    }

    async fn find_all(&self) -> Result<Vec<Lane>> {
        query::query_lanes(&self.pool).await
    }

    async fn upsert(&self, lane: &Lane) -> Result<Lane> {
        let id = lane
            .id()
            .ok_or_else(|| Error::invalid_input("cannot upsert a lane without an id"))?;
        query::upsert_lane(&self.pool, lane, id).await?;
        Ok(lane.clone())
    }
}
