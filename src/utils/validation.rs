use crate::utils::error::{AssetError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// Asset names become file names under the output directory, so they must be a
/// single path component.
pub fn validate_asset_name(field_name: &str, name: &str) -> Result<()> {
    let reason = if name.trim().is_empty() {
        Some("Asset name cannot be empty")
    } else if name.contains(['/', '\\']) {
        Some("Asset name cannot contain path separators")
    } else if name.contains("..") {
        Some("Asset name cannot contain '..'")
    } else if name.contains('\0') {
        Some("Asset name contains null bytes")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
