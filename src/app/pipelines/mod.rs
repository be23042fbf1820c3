pub mod asset_pipeline;
