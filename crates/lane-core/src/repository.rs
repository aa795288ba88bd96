//! Lane Repository Trait - persistence boundary for lane records.
//!
//! The engine depends on this trait, never on a concrete store. Two
//! implementations ship with the workspace:
//! - [`crate::memory::InMemoryLaneRepository`] for tests and embedded use
//! - `lanectl::database::LaneDb` over `SQLite`
//!
//! # Error Handling
//!
//! Store failures are reported as `Error::Storage`. A missing lane is not an
//! error at this layer: `find_by_id` returns `None` and the engine decides how
//! to surface it.

use crate::{
    domain::{Lane, LaneId},
    Result,
};

/// Durable keyed storage of lane records.
///
/// Identifier generation belongs to the store. Writes are last-writer-wins;
/// implementations are not required to detect concurrent updates.
#[async_trait::async_trait]
pub trait LaneRepository: Send + Sync {
    /// Store a new lane and return it carrying its assigned identifier.
    ///
    /// Any identifier already on `lane` is ignored.
    async fn create(&self, lane: &Lane) -> Result<Lane>;

    /// Get a lane by its identifier.
    async fn find_by_id(&self, id: &LaneId) -> Result<Option<Lane>>;

    /// List every stored lane.
    async fn find_all(&self) -> Result<Vec<Lane>>;

    /// Insert or replace the lane with the same identifier.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `lane` has no identifier.
    async fn upsert(&self, lane: &Lane) -> Result<Lane>;
}
