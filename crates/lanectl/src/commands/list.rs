//! List and show command implementations

use std::io::Write;

use anyhow::Result;
use lane_core::{LaneEngine, LaneId, LaneRepository};

use super::{write_lane, write_lanes, OutputFormat};

/// Print every stored lane
pub async fn run<R>(engine: &LaneEngine<R>, format: OutputFormat, out: &mut impl Write) -> Result<()>
where
    R: LaneRepository + 'static,
{
    let lanes = engine.find_all().await?;
    write_lanes(out, &lanes, format)
}

/// Print one lane
///
/// # Errors
///
/// Returns `Error::NotFound` if no lane has this id.
pub async fn show<R>(
    engine: &LaneEngine<R>,
    lane_id: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()>
where
    R: LaneRepository + 'static,
{
    let id = LaneId::parse(lane_id)?;
    let lane = engine.find_by_id(&id).await?;
    write_lane(out, &lane, format)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lane_core::{Error, InMemoryLaneRepository};

    use super::*;

    #[tokio::test]
    async fn test_list_human_shows_summaries() -> Result<()> {
        let engine = LaneEngine::new(Arc::new(InMemoryLaneRepository::new()));
        engine.create_lanes(2, 4).await?;
        let mut buf = Vec::new();

        run(&engine, OutputFormat::Human, &mut buf).await?;

        let text = String::from_utf8(buf)?;
        assert_eq!(text.matches("positions=4  NEAR=0  FAR=5").count(), 2);
        assert_eq!(text.matches("N....F").count(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_show_unknown_lane_is_not_found() {
        let engine = LaneEngine::new(Arc::new(InMemoryLaneRepository::new()));
        let mut buf = Vec::new();

        let result = show(&engine, "nope", OutputFormat::Json, &mut buf).await;

        let err = result.err().and_then(|e| e.downcast::<Error>().ok());
        assert!(matches!(err, Some(Error::NotFound(_))));
    }
}
