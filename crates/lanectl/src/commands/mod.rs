//! Command implementations for the lanectl CLI
//!
//! Each command writes to the given writer in either human or JSON form.

pub mod config;
pub mod create;
pub mod list;
pub mod move_crane;

use std::io::Write;

use anyhow::Result;
use lane_core::{CraneRole, Lane, LaneView};
use serde::Serialize;

/// Longest lane drawn as a track in human output
const MAX_TRACK_WIDTH: u32 = 60;

/// `OutputFormat` enum represents the available output formats for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON output format - structured, machine-readable
    Json,
    /// Human-readable output format - terminal-friendly
    Human,
}

impl OutputFormat {
    #[must_use]
    pub const fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Human
        }
    }
}

/// Write a value as pretty JSON followed by a newline
pub(crate) fn write_json<T: Serialize>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

/// Write lanes in the requested format
pub(crate) fn write_lanes(out: &mut impl Write, lanes: &[Lane], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let views: Vec<LaneView> = lanes.iter().map(LaneView::from).collect();
            write_json(out, &views)
        }
        OutputFormat::Human => {
            if lanes.is_empty() {
                writeln!(out, "No lanes")?;
            }
            for lane in lanes {
                write_lane_human(out, lane)?;
            }
            Ok(())
        }
    }
}

/// Write one lane in the requested format
pub(crate) fn write_lane(out: &mut impl Write, lane: &Lane, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, &LaneView::from(lane)),
        OutputFormat::Human => write_lane_human(out, lane),
    }
}

fn write_lane_human(out: &mut impl Write, lane: &Lane) -> Result<()> {
    writeln!(out, "{}", render_summary(lane))?;
    if let Some(track) = render_track(lane) {
        writeln!(out, "  {track}")?;
    }
    Ok(())
}

/// One-line lane summary: id, length and both crane positions
pub fn render_summary(lane: &Lane) -> String {
    let id = lane.id().map_or("<unsaved>", |id| id.as_str());
    let position = |role| {
        lane.crane(role)
            .map_or_else(|_| "-".to_string(), |c| c.position.to_string())
    };
    format!(
        "{id}  positions={}  NEAR={}  FAR={}",
        lane.length(),
        position(CraneRole::Near),
        position(CraneRole::Far)
    )
}

/// Draw the lane as `N....F`, one character per position, or `None` if too long
pub fn render_track(lane: &Lane) -> Option<String> {
    if lane.length() > MAX_TRACK_WIDTH {
        return None;
    }
    let track = (0..=lane.length() + 1)
        .map(|pos| {
            lane.cranes()
                .iter()
                .find(|c| c.position == pos)
                .map_or('.', |c| match c.role {
                    CraneRole::Near => 'N',
                    CraneRole::Far => 'F',
                })
        })
        .collect();
    Some(track)
}
