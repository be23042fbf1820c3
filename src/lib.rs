pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::asset_pipeline::AssetPipeline;
pub use config::{descriptor::AssetDescriptor, storage::LocalStorage};
pub use core::{
    etl::{AssetRunner, SUCCESS_MESSAGE},
    generator::{MonotonicClock, SampleDataGenerator, SystemClock},
};
pub use utils::error::{AssetError, Result};
