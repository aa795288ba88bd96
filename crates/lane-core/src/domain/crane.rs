//! Crane roles and positions.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The role a crane holds within its lane.
///
/// Roles are fixed at creation. NEAR starts at position 0 and its requested
/// moves take priority; FAR starts beyond the last position and yields.
///
/// `FIRST`/`SECOND` are accepted as aliases when parsing.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum CraneRole {
    #[serde(rename = "NEAR", alias = "FIRST")]
    #[strum(to_string = "NEAR", serialize = "FIRST")]
    Near,
    #[serde(rename = "FAR", alias = "SECOND")]
    #[strum(to_string = "FAR", serialize = "SECOND")]
    Far,
}

impl CraneRole {
    /// The other crane in the same lane
    #[must_use]
    pub const fn counterpart(self) -> Self {
        match self {
            Self::Near => Self::Far,
            Self::Far => Self::Near,
        }
    }
}

/// A crane at a discrete position on its lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crane {
    pub role: CraneRole,
    pub position: u32,
}

impl Crane {
    #[must_use]
    pub const fn new(role: CraneRole, position: u32) -> Self {
        Self { role, position }
    }

    /// Same crane, new position
    #[must_use]
    pub const fn at(self, position: u32) -> Self {
        Self {
            role: self.role,
            position,
        }
    }
}
