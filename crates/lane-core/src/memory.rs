//! In-memory lane store.
//!
//! Backed by persistent `im` collections behind a `tokio` `RwLock`, so reads
//! clone a cheap snapshot and never hold the lock across an await.

use im::{HashMap, Vector};
use tokio::sync::RwLock;

use crate::{
    domain::{Lane, LaneId},
    repository::LaneRepository,
    Error, Result,
};

#[derive(Debug, Clone, Default)]
struct Snapshot {
    order: Vector<LaneId>,
    lanes: HashMap<LaneId, Lane>,
}

/// Lane store kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryLaneRepository {
    state: RwLock<Snapshot>,
}

impl InMemoryLaneRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored lanes
    pub async fn len(&self) -> usize {
        self.state.read().await.lanes.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait::async_trait]
impl LaneRepository for InMemoryLaneRepository {
    async fn create(&self, lane: &Lane) -> Result<Lane> {
        let stored = lane.clone().with_id(LaneId::generate());
        let id = stored.id().cloned().ok_or_else(|| Error::storage("generated id missing"))?;

        let mut state = self.state.write().await;
        state.order.push_back(id.clone());
        state.lanes.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &LaneId) -> Result<Option<Lane>> {
        Ok(self.state.read().await.lanes.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Lane>> {
        let snapshot = self.state.read().await.clone();
        Ok(snapshot
            .order
            .iter()
            .filter_map(|id| snapshot.lanes.get(id).cloned())
            .collect())
    }

    async fn upsert(&self, lane: &Lane) -> Result<Lane> {
        let id = lane
            .id()
            .cloned()
            .ok_or_else(|| Error::invalid_input("cannot upsert a lane without an id"))?;

        let mut state = self.state.write().await;
        if state.lanes.insert(id.clone(), lane.clone()).is_none() {
            state.order.push_back(id);
        }
        Ok(lane.clone())
    }
}
