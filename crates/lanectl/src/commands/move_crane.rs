//! Move command implementation

use std::io::Write;

use anyhow::Result;
use lane_core::{LaneEngine, LaneRepository, MoveCraneRequest};

use super::{write_lane, OutputFormat};

/// Validate the request, move the crane, and print the resulting lane.
///
/// # Errors
///
/// Returns an error if:
/// - The request is missing a field
/// - The lane does not exist
/// - The move is not allowed
/// - Saving the lane fails
pub async fn run<R>(
    engine: &LaneEngine<R>,
    request: &MoveCraneRequest,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()>
where
    R: LaneRepository + 'static,
{
    let command = request.validate()?;
    let lane = engine
        .move_crane(&command.lane_id, command.role, command.desired_position)
        .await?;
    write_lane(out, &lane, format)
}
