//! External representation of lanes.
//!
//! ```json
//! {
//!   "id": "0b6f…",
//!   "positions": 20,
//!   "cranes": [
//!     { "currentPosition": 0, "laneOrder": "NEAR" },
//!     { "currentPosition": 21, "laneOrder": "FAR" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{Crane, CraneRole, Lane, LaneId};

/// Crane as exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CraneView {
    pub current_position: u32,
    pub lane_order: CraneRole,
}

/// Lane as exposed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LaneId>,
    pub positions: u32,
    pub cranes: Vec<CraneView>,
}

impl From<Crane> for CraneView {
    fn from(crane: Crane) -> Self {
        Self {
            current_position: crane.position,
            lane_order: crane.role,
        }
    }
}

impl From<CraneView> for Crane {
    fn from(view: CraneView) -> Self {
        Self::new(view.lane_order, view.current_position)
    }
}

impl From<&Lane> for LaneView {
    fn from(lane: &Lane) -> Self {
        Self {
            id: lane.id().cloned(),
            positions: lane.length(),
            cranes: lane.cranes().iter().copied().map(CraneView::from).collect(),
        }
    }
}

impl From<LaneView> for Lane {
    fn from(view: LaneView) -> Self {
        Self::from_parts(
            view.id,
            view.positions,
            view.cranes.into_iter().map(Crane::from).collect(),
        )
    }
}
