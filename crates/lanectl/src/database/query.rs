//! Query execution and row parsing for lane records

use std::time::SystemTime;

use lane_core::{Crane, Error, Lane, LaneId, Result};
use sqlx::{Row, SqlitePool};

/// Get current Unix timestamp
pub(crate) fn get_current_timestamp() -> Result<i64> {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|e| Error::storage(format!("System time error: {e}")))
        .and_then(|d| {
            i64::try_from(d.as_secs())
                .map_err(|e| Error::storage(format!("System time out of range: {e}")))
        })
}

/// Serialize cranes to the JSON stored in the `cranes` column
pub(crate) fn encode_cranes(lane: &Lane) -> Result<String> {
    serde_json::to_string(lane.cranes())
        .map_err(|e| Error::storage(format!("Failed to serialize cranes: {e}")))
}

/// Parse a database row into a Lane, rejecting records that break lane invariants
pub(crate) fn parse_lane_row(row: &sqlx::sqlite::SqliteRow) -> Result<Lane> {
    let id: String = row
        .try_get("id")
        .map_err(|e| Error::storage(format!("Failed to read id: {e}")))?;
    let length: i64 = row
        .try_get("length")
        .map_err(|e| Error::storage(format!("Failed to read length: {e}")))?;
    let cranes_json: String = row
        .try_get("cranes")
        .map_err(|e| Error::storage(format!("Failed to read cranes: {e}")))?;

    let id = LaneId::parse(id).map_err(|e| Error::storage(format!("Invalid lane id: {e}")))?;
    let length = u32::try_from(length)
        .map_err(|_| Error::storage(format!("Lane {id} has invalid length {length}")))?;
    let cranes: Vec<Crane> = serde_json::from_str(&cranes_json)
        .map_err(|e| Error::storage(format!("Lane {id} has invalid cranes JSON: {e}")))?;

    let lane = Lane::from_parts(Some(id.clone()), length, cranes);
    lane.check_invariants()
        .map_err(|violation| Error::storage(format!("Corrupt lane record {id}: {violation}")))?;
    Ok(lane)
}

/// Insert a new lane row
pub(crate) async fn insert_lane(pool: &SqlitePool, lane: &Lane, id: &LaneId) -> Result<()> {
    let now = get_current_timestamp()?;
    let cranes = encode_cranes(lane)?;

    sqlx::query(
        "INSERT INTO lanes (id, length, cranes, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id.as_str())
    .bind(i64::from(lane.length()))
    .bind(cranes)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map(|_| ())
    .map_err(|e| Error::storage(format!("Failed to create lane: {e}")))
}

/// Insert or replace the row for `id`
pub(crate) async fn upsert_lane(pool: &SqlitePool, lane: &Lane, id: &LaneId) -> Result<()> {
    let now = get_current_timestamp()?;
    let cranes = encode_cranes(lane)?;

    sqlx::query(
        "INSERT INTO lanes (id, length, cranes, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?)
         ON CONFLICT(id) DO UPDATE SET
             length = excluded.length,
             cranes = excluded.cranes,
             updated_at = excluded.updated_at",
    )
    .bind(id.as_str())
    .bind(i64::from(lane.length()))
    .bind(cranes)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .map(|_| ())
    .map_err(|e| Error::storage(format!("Failed to save lane {id}: {e}")))
}

/// Query a lane by id
pub(crate) async fn query_lane_by_id(pool: &SqlitePool, id: &LaneId) -> Result<Option<Lane>> {
    sqlx::query("SELECT id, length, cranes FROM lanes WHERE id = ?")
        .bind(id.as_str())
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::storage(format!("Failed to query lane: {e}")))
        .and_then(|opt_row| opt_row.map_or(Ok(None), |row| parse_lane_row(&row).map(Some)))
}

/// Query all lanes in creation order
pub(crate) async fn query_lanes(pool: &SqlitePool) -> Result<Vec<Lane>> {
    let rows = sqlx::query("SELECT id, length, cranes FROM lanes ORDER BY created_at, rowid")
        .fetch_all(pool)
        .await
        .map_err(|e| Error::storage(format!("Failed to query lanes: {e}")))?;

    rows.iter().map(parse_lane_row).collect()
}
