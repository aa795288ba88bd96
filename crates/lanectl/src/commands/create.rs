//! Create command implementation

use std::io::Write;

use anyhow::Result;
use lane_core::{CreateLanesRequest, LaneEngine, LaneRepository};

use super::{write_lanes, OutputFormat};

/// Validate the request, create the lanes, and print them.
///
/// # Errors
///
/// Returns an error if:
/// - The request breaks the input contract (count or length out of range)
/// - Any lane fails to persist
pub async fn run<R>(
    engine: &LaneEngine<R>,
    request: &CreateLanesRequest,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()>
where
    R: LaneRepository + 'static,
{
    let command = request.validate(engine.max_lanes_per_request())?;
    let lanes = engine.create_lanes(command.count, command.length).await?;
    write_lanes(out, &lanes, format)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use lane_core::{Error, InMemoryLaneRepository, LaneView};

    use super::*;

    #[tokio::test]
    async fn test_create_prints_every_lane() -> Result<()> {
        let engine = LaneEngine::new(Arc::new(InMemoryLaneRepository::new()));
        let mut buf = Vec::new();

        run(&engine, &CreateLanesRequest::new(3, 7), OutputFormat::Json, &mut buf).await?;

        let views: Vec<LaneView> = serde_json::from_slice(&buf)?;
        assert_eq!(views.len(), 3);
        assert!(views.iter().all(|v| v.positions == 7 && v.id.is_some()));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_request_before_writing() {
        let engine = LaneEngine::new(Arc::new(InMemoryLaneRepository::new()));
        let mut buf = Vec::new();

        let result = run(&engine, &CreateLanesRequest::new(0, 7), OutputFormat::Human, &mut buf).await;

        let err = result.err().and_then(|e| e.downcast::<Error>().ok());
        assert!(matches!(err, Some(Error::InvalidInput(_))));
        assert!(buf.is_empty());
        assert!(engine.store().is_empty().await);
    }
}
