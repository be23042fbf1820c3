pub mod descriptor;
pub mod storage;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "sample-asset")]
#[command(about = "Generates and previews the sample result batch")]
pub struct CliConfig {
    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, default_value = "5", help = "Number of rows shown in the preview")]
    pub preview_rows: usize,

    #[arg(long, help = "Write the processed batch as CSV under --output-path")]
    pub export_csv: bool,

    #[arg(long, help = "Sidecar descriptor to use instead of the builtin one")]
    pub descriptor: Option<String>,

    #[arg(long, help = "Print the asset descriptor as JSON and exit")]
    pub describe: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Default for CliConfig {
    fn default() -> Self {
        Self {
            output_path: "./output".to_string(),
            preview_rows: 5,
            export_csv: false,
            descriptor: None,
            describe: false,
            json_logs: false,
            verbose: false,
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("output_path", &self.output_path)?;
        validate_positive_number("preview_rows", self.preview_rows, 1)?;
        if let Some(descriptor) = &self.descriptor {
            validate_path("descriptor", descriptor)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn preview_rows(&self) -> usize {
        self.preview_rows
    }

    fn export_csv(&self) -> bool {
        self.export_csv
    }
}
