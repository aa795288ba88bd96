//! Lane identifiers.
//!
//! Identifiers are opaque strings assigned by the store. The only rule the
//! domain enforces is that an identifier is never blank.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Store-assigned lane identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaneId(String);

impl LaneId {
    /// Parse an identifier supplied by a caller or read from storage.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if the identifier is empty or only whitespace.
    pub fn parse(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::invalid_input("lane id must not be empty"));
        }
        Ok(Self(id))
    }

    /// Generate a fresh random identifier (UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Get the ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LaneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_blank() {
        assert!(LaneId::parse("").is_err());
        assert!(LaneId::parse("   ").is_err());
    }

    #[test]
    fn test_parse_keeps_value_verbatim() -> Result<()> {
        let id = LaneId::parse("5f1b2c")?;
        assert_eq!(id.as_str(), "5f1b2c");
        assert_eq!(id.to_string(), "5f1b2c");
        Ok(())
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        assert_ne!(LaneId::generate(), LaneId::generate());
    }

    #[test]
    fn test_serializes_as_plain_string() -> std::result::Result<(), serde_json::Error> {
        let id = LaneId(String::from("abc"));
        assert_eq!(serde_json::to_string(&id)?, "\"abc\"");
        Ok(())
    }
}
