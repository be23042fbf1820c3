pub mod etl;
pub mod generator;
pub mod preview;

pub use crate::domain::model::{LoadOutcome, ResultBatch, ResultRow};
pub use crate::domain::ports::{Clock, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
