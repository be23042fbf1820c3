use crate::domain::model::{LoadOutcome, ResultBatch, ResultRow};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn output_path(&self) -> &str;
    fn preview_rows(&self) -> usize;
    fn export_csv(&self) -> bool;
}

/// Wall-clock source for row timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ResultRow>>;
    async fn transform(&self, rows: Vec<ResultRow>) -> Result<ResultBatch>;
    async fn load(&self, batch: ResultBatch) -> Result<LoadOutcome>;
}
