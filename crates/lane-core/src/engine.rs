//! Lane engine: creation fan-out and the read-decide-write move cycle.
//!
//! The engine owns no state besides a handle to the store. Decisions are made
//! by the pure [`Lane`] transitions; the engine only loads, persists, and logs.
//!
//! Moves are not serialized. Two concurrent moves on the same lane both read
//! the current record and the later write wins.

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::{
    domain::{CraneRole, Lane, LaneId, MoveOutcome},
    repository::LaneRepository,
    Error, Result,
};

/// Default cap on lanes created by one request
pub const DEFAULT_MAX_LANES_PER_REQUEST: u32 = 100;

/// Lane engine over an injected store
#[derive(Debug)]
pub struct LaneEngine<R> {
    store: Arc<R>,
    max_lanes_per_request: u32,
}

impl<R> Clone for LaneEngine<R> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            max_lanes_per_request: self.max_lanes_per_request,
        }
    }
}

impl<R> LaneEngine<R>
where
    R: LaneRepository + 'static,
{
    #[must_use]
    pub const fn new(store: Arc<R>) -> Self {
        Self {
            store,
            max_lanes_per_request: DEFAULT_MAX_LANES_PER_REQUEST,
        }
    }

    /// Override the per-request lane cap
    #[must_use]
    pub fn with_max_lanes_per_request(self, max_lanes_per_request: u32) -> Self {
        Self {
            store: self.store,
            max_lanes_per_request,
        }
    }

    #[must_use]
    pub const fn max_lanes_per_request(&self) -> u32 {
        self.max_lanes_per_request
    }

    #[must_use]
    pub fn store(&self) -> &R {
        &self.store
    }

    /// Create `count` lanes of `length` positions, each persisted by its own task.
    ///
    /// Every task is joined before returning. The result order is the order in
    /// which tasks finished.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidInput` if `count` is outside `1..=max_lanes_per_request`
    ///   or `length` is 0
    /// - `Error::LaneCreation` if any lane fails to persist. The first failure
    ///   observed is returned; lanes already stored are kept.
    #[tracing::instrument(skip(self))]
    pub async fn create_lanes(&self, count: u32, length: u32) -> Result<Vec<Lane>> {
        if count == 0 || count > self.max_lanes_per_request {
            return Err(Error::invalid_input(format!(
                "lane count must be between 1 and {}, got {count}",
                self.max_lanes_per_request
            )));
        }
        let template = Lane::create(length)?;

        let mut tasks = JoinSet::new();
        for _ in 0..count {
            let store = Arc::clone(&self.store);
            let lane = template.clone();
            tasks.spawn(async move { store.create(&lane).await });
        }

        let mut created = Vec::new();
        let mut first_failure: Option<Error> = None;
        while let Some(joined) = tasks.join_next().await {
            let failure = match joined {
                Ok(Ok(lane)) => {
                    created.push(lane);
                    continue;
                }
                Ok(Err(e)) => e.to_string(),
                Err(join_error) => format!("creation task aborted: {join_error}"),
            };
            warn!(error = %failure, "lane persistence failed");
            first_failure.get_or_insert_with(|| {
                Error::lane_creation(format!(
                    "an error happened while creating lanes: {failure}"
                ))
            });
        }

        if let Some(err) = first_failure {
            warn!(
                persisted = created.len(),
                requested = count,
                "lane creation incomplete; stored lanes are kept"
            );
            return Err(err);
        }

        info!(count = created.len(), length, "lanes created");
        Ok(created)
    }

    /// List every stored lane.
    ///
    /// # Errors
    ///
    /// Returns `Error::Storage` if the store cannot be read.
    pub async fn find_all(&self) -> Result<Vec<Lane>> {
        self.store.find_all().await.map_err(into_storage)
    }

    /// Load one lane.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if no lane has this id
    /// - `Error::Storage` if the store cannot be read
    pub async fn find_by_id(&self, id: &LaneId) -> Result<Lane> {
        self.store
            .find_by_id(id)
            .await
            .map_err(into_storage)?
            .ok_or_else(|| Error::not_found(format!("lane not found for id: {id}")))
    }

    /// Move one crane on a stored lane and persist the result.
    ///
    /// Rejected moves write nothing.
    ///
    /// # Errors
    ///
    /// - `Error::NotFound` if the lane or one of its cranes is missing
    /// - `Error::MovementNotAllowed` if the move breaks a bound or the priority rule
    /// - `Error::Storage` if loading or saving fails
    #[tracing::instrument(skip(self), fields(lane = %lane_id))]
    pub async fn move_crane(&self, lane_id: &LaneId, role: CraneRole, desired: i64) -> Result<Lane> {
        let lane = self.find_by_id(lane_id).await?;

        let (moved, outcome) = lane.plan_move(role, desired).map_err(|e| {
            debug!(error = %e, "move rejected");
            e
        })?;

        let saved = self.store.upsert(&moved).await.map_err(into_storage)?;

        match outcome {
            MoveOutcome::Moved => info!(%role, position = desired, "crane moved"),
            MoveOutcome::PushedThrough { far_from, far_to } => info!(
                %role,
                position = desired,
                far_from,
                far_to,
                "crane moved; far crane pushed through"
            ),
        }
        Ok(saved)
    }
}

fn into_storage(err: Error) -> Error {
    match err {
        Error::Storage(_) => err,
        other => Error::storage(other.to_string()),
    }
}
