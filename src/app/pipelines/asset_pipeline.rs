use crate::core::generator::{process_batch, SampleDataGenerator};
use crate::core::preview::render_preview;
use crate::core::{Clock, ConfigProvider, LoadOutcome, Pipeline, ResultBatch, ResultRow, Storage};
use crate::utils::error::{AssetError, Result};
use crate::utils::validation::validate_asset_name;

pub const DEFAULT_ASSET_NAME: &str = "test_python";

pub struct AssetPipeline<S: Storage, C: ConfigProvider, K: Clock> {
    storage: S,
    config: C,
    generator: SampleDataGenerator<K>,
    asset_name: String,
}

impl<S: Storage, C: ConfigProvider, K: Clock> AssetPipeline<S, C, K> {
    pub fn new(storage: S, config: C, clock: K) -> Self {
        Self {
            storage,
            config,
            generator: SampleDataGenerator::new(clock),
            asset_name: DEFAULT_ASSET_NAME.to_string(),
        }
    }

    /// Names the CSV export after the asset. The name must be a single path
    /// component so the export stays under the output directory.
    pub fn with_asset_name(mut self, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_asset_name("name", &name)?;
        self.asset_name = name;
        Ok(self)
    }

    fn csv_file_name(&self) -> String {
        format!("{}.csv", self.asset_name)
    }
}

fn batch_to_csv(batch: &ResultBatch) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &batch.rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| AssetError::ProcessingError {
        message: format!("Failed to flush CSV writer: {}", e.error()),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Clock> Pipeline for AssetPipeline<S, C, K> {
    async fn extract(&self) -> Result<Vec<ResultRow>> {
        let batch = self.generator.raw_batch();
        tracing::debug!("Built {} raw rows", batch.len());
        Ok(batch.rows)
    }

    async fn transform(&self, rows: Vec<ResultRow>) -> Result<ResultBatch> {
        let batch = process_batch(ResultBatch::new(rows));
        tracing::debug!("Processed labels: {:?}", batch.processed_data());
        Ok(batch)
    }

    async fn load(&self, batch: ResultBatch) -> Result<LoadOutcome> {
        let preview = render_preview(batch.head(self.config.preview_rows()));

        let export_path = if self.config.export_csv() {
            let file_name = self.csv_file_name();
            let data = batch_to_csv(&batch)?;
            tracing::debug!("Writing {} bytes to {}", data.len(), file_name);
            self.storage.write_file(&file_name, &data).await?;
            Some(format!("{}/{}", self.config.output_path(), file_name))
        } else {
            None
        };

        Ok(LoadOutcome {
            preview,
            export_path,
            row_count: batch.len(),
        })
    }
}
