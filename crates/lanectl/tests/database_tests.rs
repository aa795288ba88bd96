//! `LaneDb` persistence tests against a real `SQLite` file

use std::sync::Arc;

use lane_core::{CraneRole, Error, Lane, LaneEngine, LaneId, LaneRepository, Result};
use lanectl::LaneDb;
use tempfile::TempDir;

async fn open_temp() -> Result<(TempDir, LaneDb)> {
    let dir = tempfile::tempdir().map_err(|e| Error::storage(e.to_string()))?;
    let db = LaneDb::open(&dir.path().join("lanes.db")).await?;
    Ok((dir, db))
}

fn positions(lane: &Lane) -> Result<(u32, u32)> {
    Ok((
        lane.crane(CraneRole::Near)?.position,
        lane.crane(CraneRole::Far)?.position,
    ))
}

#[tokio::test]
async fn test_create_assigns_id_and_round_trips() -> Result<()> {
    let (_dir, db) = open_temp().await?;

    let created = db.create(&Lane::create(20)?).await?;
    let id = created
        .id()
        .cloned()
        .ok_or_else(|| Error::storage("created lane has no id"))?;

    let loaded = db.find_by_id(&id).await?;
    assert_eq!(loaded, Some(created));
    Ok(())
}

#[tokio::test]
async fn test_find_by_unknown_id_is_none() -> Result<()> {
    let (_dir, db) = open_temp().await?;
    assert_eq!(db.find_by_id(&LaneId::parse("missing")?).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_upsert_replaces_in_place() -> Result<()> {
    let (_dir, db) = open_temp().await?;
    let created = db.create(&Lane::create(10)?).await?;

    let moved = created.move_crane(CraneRole::Far, 4)?;
    db.upsert(&moved).await?;

    let all = db.find_all().await?;
    assert_eq!(all.len(), 1);
    assert_eq!(positions(&all[0])?, (0, 4));
    Ok(())
}

#[tokio::test]
async fn test_upsert_without_id_is_rejected() -> Result<()> {
    let (_dir, db) = open_temp().await?;
    let result = db.upsert(&Lane::create(3)?).await;
    assert!(matches!(result, Err(Error::InvalidInput(_))));
    Ok(())
}

#[tokio::test]
async fn test_lanes_survive_reopen() -> Result<()> {
    let dir = tempfile::tempdir().map_err(|e| Error::storage(e.to_string()))?;
    let path = dir.path().join("lanes.db");

    let db = LaneDb::open(&path).await?;
    db.create(&Lane::create(5)?).await?;
    db.create(&Lane::create(6)?).await?;
    db.close().await;

    let reopened = LaneDb::open(&path).await?;
    let lengths: Vec<u32> = reopened
        .find_all()
        .await?
        .iter()
        .map(Lane::length)
        .collect();
    assert_eq!(lengths, vec![5, 6]);
    Ok(())
}

#[tokio::test]
async fn test_engine_over_sqlite_pushes_far_crane() -> Result<()> {
    let (_dir, db) = open_temp().await?;
    let engine = LaneEngine::new(Arc::new(db));

    let lanes = engine.create_lanes(4, 20).await?;
    assert_eq!(lanes.len(), 4);
    assert_eq!(engine.find_all().await?.len(), 4);

    let id = lanes[0]
        .id()
        .cloned()
        .ok_or_else(|| Error::storage("created lane has no id"))?;
    engine.move_crane(&id, CraneRole::Far, 10).await?;
    engine.move_crane(&id, CraneRole::Near, 15).await?;

    let stored = engine.find_by_id(&id).await?;
    assert_eq!(positions(&stored)?, (15, 16));
    Ok(())
}

#[tokio::test]
async fn test_engine_over_sqlite_rejects_blocked_far_move() -> Result<()> {
    let (_dir, db) = open_temp().await?;
    let engine = LaneEngine::new(Arc::new(db));
    let lanes = engine.create_lanes(1, 20).await?;
    let id = lanes[0]
        .id()
        .cloned()
        .ok_or_else(|| Error::storage("created lane has no id"))?;

    engine.move_crane(&id, CraneRole::Near, 8).await?;
    let result = engine.move_crane(&id, CraneRole::Far, 8).await;

    assert!(matches!(result, Err(Error::MovementNotAllowed(_))));
    assert_eq!(positions(&engine.find_by_id(&id).await?)?, (8, 21));
    Ok(())
}
