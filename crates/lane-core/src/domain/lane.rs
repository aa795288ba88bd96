//! Lane aggregate root with the crane movement rules.
//!
//! A Lane is a bounded track of `length` discrete positions hosting exactly
//! one NEAR and one FAR crane.
//!
//! # Invariants
//!
//! 1. Exactly one NEAR and one FAR crane
//! 2. `0 <= NEAR.position <= FAR.position <= length + 1`
//! 3. A new lane has NEAR at 0 and FAR at `length + 1`
//! 4. An accepted move never leaves both cranes on the same position
//!
//! # Movement
//!
//! The two roles are deliberately asymmetric:
//! - FAR may never reach or pass NEAR. Such a move is rejected.
//! - NEAR always gets its requested position (within bounds). If it would reach
//!   or pass FAR, FAR is pushed to `desired + 1`.

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

use thiserror::Error;

use super::{
    crane::{Crane, CraneRole},
    identifiers::LaneId,
};
use crate::{Error, Result};

/// Largest lane length for which `length + 1` still fits a position.
pub const MAX_LANE_LENGTH: u32 = u32::MAX - 1;

// ============================================================================
// DOMAIN ERRORS
// ============================================================================

/// A broken lane invariant, found when checking a stored record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("lane length {0} is out of range")]
    LengthOutOfRange(u32),

    #[error("expected exactly one {role} crane, found {count}")]
    RoleCount { role: CraneRole, count: usize },

    #[error("expected exactly two cranes, found {0}")]
    CraneCount(usize),

    #[error("{role} crane at {position} is outside [0, {max}]")]
    OutOfBounds {
        role: CraneRole,
        position: u32,
        max: u32,
    },

    #[error("NEAR crane at {near} is past FAR crane at {far}")]
    Crossed { near: u32, far: u32 },

    #[error("both cranes occupy position {0}")]
    Overlap(u32),
}

// ============================================================================
// MOVE OUTCOME
// ============================================================================

/// How an accepted move was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Only the requested crane moved
    Moved,
    /// NEAR reached or passed FAR, so FAR was relocated to `NEAR + 1`
    PushedThrough { far_from: u32, far_to: u32 },
}

// ============================================================================
// LANE AGGREGATE ROOT
// ============================================================================

/// Lane aggregate root.
///
/// Lanes are values: every transition returns a new `Lane` with the same id
/// and length. A lane that has not been stored yet has no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    id: Option<LaneId>,
    length: u32,
    cranes: Vec<Crane>,
}

impl Lane {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create an unsaved lane with NEAR at 0 and FAR at `length + 1`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if `length` is 0 or above [`MAX_LANE_LENGTH`].
    pub fn create(length: u32) -> Result<Self> {
        if length == 0 || length > MAX_LANE_LENGTH {
            return Err(Error::invalid_input(format!(
                "lane length must be between 1 and {MAX_LANE_LENGTH}, got {length}"
            )));
        }

        Ok(Self {
            id: None,
            length,
            cranes: vec![
                Crane::new(CraneRole::Near, 0),
                Crane::new(CraneRole::Far, length + 1),
            ],
        })
    }

    /// Rebuild a lane from stored parts without checking invariants.
    ///
    /// Stores use this when loading records; call [`Lane::check_invariants`]
    /// to detect corrupt data.
    #[must_use]
    pub const fn from_parts(id: Option<LaneId>, length: u32, cranes: Vec<Crane>) -> Self {
        Self { id, length, cranes }
    }

    /// Same lane carrying a store-assigned identifier
    #[must_use]
    pub fn with_id(self, id: LaneId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    // ========================================================================
    // QUERY METHODS
    // ========================================================================

    #[must_use]
    pub const fn id(&self) -> Option<&LaneId> {
        self.id.as_ref()
    }

    /// Number of discrete positions on the track
    #[must_use]
    pub const fn length(&self) -> u32 {
        self.length
    }

    #[must_use]
    pub fn cranes(&self) -> &[Crane] {
        &self.cranes
    }

    /// Look up the crane holding `role`.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if the lane has no crane with that role,
    /// which only happens with corrupt stored data.
    pub fn crane(&self, role: CraneRole) -> Result<Crane> {
        self.cranes
            .iter()
            .find(|crane| crane.role == role)
            .copied()
            .ok_or_else(|| {
                Error::not_found(format!(
                    "crane not found for lane id: {} and role {role}",
                    self.id_label()
                ))
            })
    }

    /// Verify every lane invariant, reporting the first one broken.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn check_invariants(&self) -> std::result::Result<(), InvariantViolation> {
        if self.length == 0 || self.length > MAX_LANE_LENGTH {
            return Err(InvariantViolation::LengthOutOfRange(self.length));
        }
        if self.cranes.len() != 2 {
            return Err(InvariantViolation::CraneCount(self.cranes.len()));
        }

        let max = self.length + 1;
        for role in [CraneRole::Near, CraneRole::Far] {
            let count = self.cranes.iter().filter(|c| c.role == role).count();
            if count != 1 {
                return Err(InvariantViolation::RoleCount { role, count });
            }
        }
        if let Some(crane) = self.cranes.iter().find(|c| c.position > max) {
            return Err(InvariantViolation::OutOfBounds {
                role: crane.role,
                position: crane.position,
                max,
            });
        }

        let near = self.position_of(CraneRole::Near);
        let far = self.position_of(CraneRole::Far);
        match near.cmp(&far) {
            std::cmp::Ordering::Greater => Err(InvariantViolation::Crossed { near, far }),
            std::cmp::Ordering::Equal => Err(InvariantViolation::Overlap(near)),
            std::cmp::Ordering::Less => Ok(()),
        }
    }

    // ========================================================================
    // STATE TRANSITION METHODS
    // ========================================================================

    /// Move the crane holding `role` to `desired`, returning the new lane.
    ///
    /// # Errors
    ///
    /// See [`Lane::plan_move`].
    pub fn move_crane(&self, role: CraneRole, desired: i64) -> Result<Self> {
        self.plan_move(role, desired).map(|(lane, _)| lane)
    }

    /// Decide a move and report how it was resolved.
    ///
    /// Checks run in order: non-negative, within `length`, cranes present,
    /// then the role priority rule.
    ///
    /// # Errors
    ///
    /// - `Error::MovementNotAllowed` if `desired` is negative or above `length`
    /// - `Error::NotFound` if either crane is missing
    /// - `Error::MovementNotAllowed` if FAR would reach or pass NEAR
    pub fn plan_move(&self, role: CraneRole, desired: i64) -> Result<(Self, MoveOutcome)> {
        let desired = self.validate_desired_position(desired)?;
        let moving = self.crane(role)?;
        let other = self.crane(role.counterpart())?;

        match role {
            CraneRole::Far => {
                if desired <= other.position {
                    return Err(Error::movement_not_allowed(
                        "the near crane is blocking this movement",
                    ));
                }
                Ok((self.replace_cranes(other, moving.at(desired)), MoveOutcome::Moved))
            }
            CraneRole::Near => {
                if desired >= other.position {
                    let far_to = desired + 1;
                    let outcome = MoveOutcome::PushedThrough {
                        far_from: other.position,
                        far_to,
                    };
                    return Ok((
                        self.replace_cranes(moving.at(desired), other.at(far_to)),
                        outcome,
                    ));
                }
                Ok((self.replace_cranes(moving.at(desired), other), MoveOutcome::Moved))
            }
        }
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    fn validate_desired_position(&self, desired: i64) -> Result<u32> {
        if desired < 0 {
            return Err(Error::movement_not_allowed(
                "desired position must not be negative",
            ));
        }
        if desired > i64::from(self.length) {
            return Err(Error::movement_not_allowed(
                "desired position exceeds lane length",
            ));
        }
        u32::try_from(desired)
            .map_err(|_| Error::movement_not_allowed("desired position exceeds lane length"))
    }

    fn replace_cranes(&self, near: Crane, far: Crane) -> Self {
        Self {
            id: self.id.clone(),
            length: self.length,
            cranes: vec![near, far],
        }
    }

    fn position_of(&self, role: CraneRole) -> u32 {
        self.cranes
            .iter()
            .find(|c| c.role == role)
            .map_or(0, |c| c.position)
    }

    fn id_label(&self) -> &str {
        self.id.as_ref().map_or("<unsaved>", LaneId::as_str)
    }
}
