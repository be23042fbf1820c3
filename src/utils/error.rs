use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Descriptor parsing error: {0}")]
    DescriptorError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Processing,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl AssetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AssetError::DescriptorError(_) | AssetError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AssetError::ProcessingError { .. } | AssetError::SerializationError(_) => {
                ErrorCategory::Processing
            }
            AssetError::CsvError(_) | AssetError::IoError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AssetError::IoError(_) => ErrorSeverity::Critical,
            AssetError::CsvError(_) => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    /// Exit code the CLI reports for this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AssetError::DescriptorError(_) => {
                "The asset descriptor file could not be read as TOML".to_string()
            }
            AssetError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
            AssetError::IoError(e) => format!("File system error: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the command line options and descriptor file",
            ErrorCategory::Processing => "Re-run with --verbose to see which phase failed",
            ErrorCategory::Output => "Make sure the output path exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, AssetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = AssetError::InvalidConfigValueError {
            field: "preview_rows".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.user_friendly_message().contains("preview_rows"));
    }

    #[test]
    fn test_io_error_maps_to_critical_exit_code() {
        let err = AssetError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.exit_code(), 3);
    }
}
