//! Sidecar descriptor declaring the asset's name, type and output columns.
//!
//! The descriptor is consumed by external orchestration tooling. Nothing in
//! the generator reads it; the CLI only uses the asset name for the export
//! file and prints the whole descriptor with `--describe`.

use crate::utils::error::{AssetError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

const BUILTIN_DESCRIPTOR: &str = include_str!("../../assets/test_python.asset.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub columns: Vec<ColumnSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default)]
    pub description: String,
}

impl AssetDescriptor {
    /// The descriptor shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_DESCRIPTOR)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AssetError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::preview::COLUMN_NAMES;

    #[test]
    fn test_builtin_descriptor_declares_generated_columns() {
        let descriptor = AssetDescriptor::builtin().unwrap();

        assert_eq!(descriptor.name, "test_python");
        assert_eq!(descriptor.asset_type, "python");
        assert_eq!(descriptor.column_names(), COLUMN_NAMES.to_vec());

        let types: Vec<&str> = descriptor
            .columns
            .iter()
            .map(|c| c.column_type.as_str())
            .collect();
        assert_eq!(types, vec!["integer", "string", "timestamp"]);
    }

    #[test]
    fn test_descriptor_without_columns() {
        let descriptor = AssetDescriptor::from_toml_str(
            r#"
name = "bare"
type = "python"
"#,
        )
        .unwrap();

        assert!(descriptor.columns.is_empty());
        assert!(descriptor.description.is_empty());
    }

    #[test]
    fn test_malformed_descriptor_is_a_configuration_error() {
        let err = AssetDescriptor::from_toml_str("name = ").unwrap_err();

        assert!(matches!(err, AssetError::DescriptorError(_)));
    }

    #[test]
    fn test_json_uses_type_keys() {
        let json = AssetDescriptor::builtin().unwrap().to_json_pretty().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "python");
        assert_eq!(value["columns"][2]["type"], "timestamp");
    }
}
