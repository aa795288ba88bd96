//! Lane domain: identifiers, cranes, and the lane aggregate.

pub mod crane;
pub mod identifiers;
pub mod lane;

pub use crane::{Crane, CraneRole};
pub use identifiers::LaneId;
pub use lane::{InvariantViolation, Lane, MoveOutcome, MAX_LANE_LENGTH};
