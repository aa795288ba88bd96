//! Error types for lane-core
//!
//! Errors fall into three groups:
//! - **Domain rejections**: `NotFound`, `MovementNotAllowed` (deterministic, never retried)
//! - **Infrastructure failures**: `LaneCreation`, `Storage` (may succeed on retry)
//! - **Caller mistakes**: `InvalidInput`, `InvalidConfig`

use thiserror::Error;

/// Core error type for lane operations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Referenced lane or crane role does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Desired position breaks a bound or loses to the crane priority rule
    #[error("Movement not allowed: {0}")]
    MovementNotAllowed(String),

    /// Persistence failed while creating lanes
    #[error("Lane creation failed: {0}")]
    LaneCreation(String),

    /// Store failure outside lane creation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Caller supplied a request that breaks the input contract
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file or environment value is malformed
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Create a not found error
    #[must_use]
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a movement rejection
    #[must_use]
    pub fn movement_not_allowed(msg: impl Into<String>) -> Self {
        Self::MovementNotAllowed(msg.into())
    }

    /// Create a lane creation failure
    #[must_use]
    pub fn lane_creation(msg: impl Into<String>) -> Self {
        Self::LaneCreation(msg.into())
    }

    /// Create a storage failure
    #[must_use]
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create an invalid input error
    #[must_use]
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid config error
    #[must_use]
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Process exit code for this error kind.
    ///
    /// - 1: invalid input or config
    /// - 2: not found
    /// - 3: movement not allowed
    /// - 4: lane creation or storage failure
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput(_) | Self::InvalidConfig(_) => 1,
            Self::NotFound(_) => 2,
            Self::MovementNotAllowed(_) => 3,
            Self::LaneCreation(_) | Self::Storage(_) => 4,
        }
    }

    /// Whether retrying the same call could succeed.
    ///
    /// Only infrastructure failures qualify. Domain rejections are
    /// deterministic for the same input.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::LaneCreation(_) | Self::Storage(_))
    }
}

/// Result type alias for lane-core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        assert_eq!(Error::invalid_input("x").exit_code(), 1);
        assert_eq!(Error::invalid_config("x").exit_code(), 1);
        assert_eq!(Error::not_found("x").exit_code(), 2);
        assert_eq!(Error::movement_not_allowed("x").exit_code(), 3);
        assert_eq!(Error::lane_creation("x").exit_code(), 4);
        assert_eq!(Error::storage("x").exit_code(), 4);
    }

    #[test]
    fn test_only_infrastructure_errors_are_retryable() {
        assert!(Error::lane_creation("disk full").is_retryable());
        assert!(Error::storage("locked").is_retryable());
        assert!(!Error::movement_not_allowed("blocked").is_retryable());
        assert!(!Error::not_found("lane").is_retryable());
        assert!(!Error::invalid_input("count").is_retryable());
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = Error::movement_not_allowed("the near crane is blocking this movement");
        assert_eq!(
            err.to_string(),
            "Movement not allowed: the near crane is blocking this movement"
        );
    }
}
