use crate::core::{LoadOutcome, Pipeline};
use crate::utils::error::Result;

pub const SUCCESS_MESSAGE: &str = "Python asset executed successfully!";

pub struct AssetRunner<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AssetRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<LoadOutcome> {
        tracing::info!("Starting asset run");

        let rows = self.pipeline.extract().await?;
        tracing::info!("Extracted {} rows", rows.len());

        let batch = self.pipeline.transform(rows).await?;
        tracing::info!("Transformed {} rows", batch.len());

        let outcome = self.pipeline.load(batch).await?;
        match &outcome.export_path {
            Some(path) => tracing::info!("Loaded {} rows, CSV at {}", outcome.row_count, path),
            None => tracing::info!("Loaded {} rows", outcome.row_count),
        }

        Ok(outcome)
    }
}
