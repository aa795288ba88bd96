//! Caller-contract requests.
//!
//! Requests arrive loosely typed (every field optional, integers signed) and
//! are validated into commands the engine accepts. Validation reports every
//! broken field at once, one `field: message` entry per problem.

use serde::{Deserialize, Serialize};

use crate::{
    domain::{CraneRole, LaneId, MAX_LANE_LENGTH},
    Error, Result,
};

/// Request to create a batch of lanes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLanesRequest {
    /// Number of lanes to create
    pub lanes: Option<i64>,
    /// Positions per lane
    pub positions: Option<i64>,
}

/// Validated lane creation command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateLanes {
    pub count: u32,
    pub length: u32,
}

/// Request to move one crane
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCraneRequest {
    pub lane_id: Option<String>,
    pub lane_order: Option<CraneRole>,
    pub desired_position: Option<i64>,
}

/// Validated crane move command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveCrane {
    pub lane_id: LaneId,
    pub role: CraneRole,
    pub desired_position: i64,
}

impl CreateLanesRequest {
    #[must_use]
    pub const fn new(lanes: i64, positions: i64) -> Self {
        Self {
            lanes: Some(lanes),
            positions: Some(positions),
        }
    }

    /// Validate against the per-request lane cap.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` listing every broken field.
    pub fn validate(&self, max_lanes: u32) -> Result<CreateLanes> {
        let mut errors = Vec::new();

        let count = match self.lanes {
            None => {
                errors.push("lanes: must not be null".to_string());
                None
            }
            Some(n) if n < 1 => {
                errors.push("lanes: minimum value is 1".to_string());
                None
            }
            Some(n) if n > i64::from(max_lanes) => {
                errors.push(format!("lanes: you can't create more than {max_lanes} lanes"));
                None
            }
            Some(n) => u32::try_from(n).ok(),
        };

        let length = match self.positions {
            None => {
                errors.push("positions: must not be null".to_string());
                None
            }
            Some(n) if n < 1 => {
                errors.push("positions: minimum value is 1".to_string());
                None
            }
            Some(n) if n > i64::from(MAX_LANE_LENGTH) => {
                errors.push(format!("positions: maximum value is {MAX_LANE_LENGTH}"));
                None
            }
            Some(n) => u32::try_from(n).ok(),
        };

        match (count, length) {
            (Some(count), Some(length)) if errors.is_empty() => Ok(CreateLanes { count, length }),
            _ => Err(Error::invalid_input(errors.join("; "))),
        }
    }
}

impl MoveCraneRequest {
    #[must_use]
    pub fn new(lane_id: impl Into<String>, lane_order: CraneRole, desired_position: i64) -> Self {
        Self {
            lane_id: Some(lane_id.into()),
            lane_order: Some(lane_order),
            desired_position: Some(desired_position),
        }
    }

    /// Validate presence of every field.
    ///
    /// Position bounds are not checked here; the lane decides those.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` listing every broken field.
    pub fn validate(&self) -> Result<MoveCrane> {
        let mut errors = Vec::new();

        let lane_id = self
            .lane_id
            .as_deref()
            .and_then(|id| LaneId::parse(id).ok());
        if lane_id.is_none() {
            errors.push("laneId: lane id can't be empty".to_string());
        }
        if self.lane_order.is_none() {
            errors.push(
                "laneOrder: lane order can't be null, it must be one of NEAR or FAR".to_string(),
            );
        }
        if self.desired_position.is_none() {
            errors.push("desiredPosition: desired position can't be null".to_string());
        }

        match (lane_id, self.lane_order, self.desired_position) {
            (Some(lane_id), Some(role), Some(desired_position)) => Ok(MoveCrane {
                lane_id,
                role,
                desired_position,
            }),
            _ => Err(Error::invalid_input(errors.join("; "))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: Error) -> String {
        match err {
            Error::InvalidInput(msg) => msg,
            other => format!("unexpected: {other}"),
        }
    }

    #[test]
    fn test_create_request_accepts_bounds() -> Result<()> {
        assert_eq!(
            CreateLanesRequest::new(1, 1).validate(100)?,
            CreateLanes { count: 1, length: 1 }
        );
        assert_eq!(
            CreateLanesRequest::new(100, 20).validate(100)?,
            CreateLanes {
                count: 100,
                length: 20
            }
        );
        Ok(())
    }

    #[test]
    fn test_create_request_rejects_too_many_lanes() {
        let err = CreateLanesRequest::new(101, 20).validate(100);
        assert_eq!(
            err.map_err(message),
            Err("lanes: you can't create more than 100 lanes".to_string())
        );
    }

    #[test]
    fn test_create_request_reports_every_field() {
        let err = CreateLanesRequest::new(0, 0).validate(100);
        assert_eq!(
            err.map_err(message),
            Err("lanes: minimum value is 1; positions: minimum value is 1".to_string())
        );
    }

    #[test]
    fn test_create_request_rejects_missing_fields() {
        let err = CreateLanesRequest::default().validate(100);
        assert_eq!(
            err.map_err(message),
            Err("lanes: must not be null; positions: must not be null".to_string())
        );
    }

    #[test]
    fn test_create_request_deserializes_camel_case() -> std::result::Result<(), serde_json::Error> {
        let request: CreateLanesRequest =
            serde_json::from_str(r#"{"lanes": 5, "positions": 10}"#)?;
        assert_eq!(request, CreateLanesRequest::new(5, 10));
        Ok(())
    }

    #[test]
    fn test_move_request_validates() -> Result<()> {
        let command = MoveCraneRequest::new("lane-1", CraneRole::Far, -3).validate()?;
        assert_eq!(command.lane_id.as_str(), "lane-1");
        assert_eq!(command.role, CraneRole::Far);
        assert_eq!(command.desired_position, -3);
        Ok(())
    }

    #[test]
    fn test_move_request_rejects_blank_lane_and_missing_fields() {
        let request = MoveCraneRequest {
            lane_id: Some("  ".to_string()),
            lane_order: None,
            desired_position: None,
        };
        let msg = request.validate().map_err(message).err().unwrap_or_default();
        assert!(msg.starts_with("laneId:"));
        assert!(msg.contains("laneOrder:"));
        assert!(msg.contains("desiredPosition:"));
    }

    #[test]
    fn test_move_request_accepts_legacy_lane_order() -> std::result::Result<(), serde_json::Error> {
        let request: MoveCraneRequest = serde_json::from_str(
            r#"{"laneId": "abc", "laneOrder": "SECOND", "desiredPosition": 7}"#,
        )?;
        assert_eq!(request, MoveCraneRequest::new("abc", CraneRole::Far, 7));
        Ok(())
    }
}
