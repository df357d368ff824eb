use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Connection error: {message}")]
    ConnectionError { message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

// 任何 reqwest 層的失敗（無法連線、逾時、解碼）都歸為連線錯誤
impl From<reqwest::Error> for DemoError {
    fn from(err: reqwest::Error) -> Self {
        DemoError::ConnectionError {
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DemoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DemoError::ConnectionError { .. } => ErrorCategory::Network,
            DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. }
            | DemoError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DemoError::SerializationError(_) | DemoError::ValidationError { .. } => {
                ErrorCategory::Data
            }
            DemoError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 連線錯誤可重試，不視為致命
            DemoError::ConnectionError { .. } => ErrorSeverity::Medium,
            DemoError::ValidationError { .. } => ErrorSeverity::Low,
            DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. }
            | DemoError::MissingConfigError { .. }
            | DemoError::SerializationError(_) => ErrorSeverity::High,
            DemoError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::ConnectionError { .. } => {
                "Make sure the backend server is running and the API base URL is correct"
                    .to_string()
            }
            DemoError::ConfigValidationError { field, .. }
            | DemoError::InvalidConfigValueError { field, .. }
            | DemoError::MissingConfigError { field } => {
                format!("Check the '{}' setting in your configuration", field)
            }
            DemoError::SerializationError(_) => {
                "Verify the API response format matches the expected schema".to_string()
            }
            DemoError::ValidationError { .. } => "Check the provided input values".to_string(),
            DemoError::IoError(_) => "Check file permissions and available disk space".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::ConnectionError { .. } => "Unable to connect to Modelo API".to_string(),
            DemoError::ConfigValidationError { .. }
            | DemoError::InvalidConfigValueError { .. }
            | DemoError::MissingConfigError { .. } => "Configuration is invalid".to_string(),
            DemoError::SerializationError(_) => "Received an unreadable API response".to_string(),
            DemoError::ValidationError { message } => message.clone(),
            DemoError::IoError(_) => "A file operation failed".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_is_retryable_network_error() {
        let err = DemoError::ConnectionError {
            message: "error sending request".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.user_friendly_message(), "Unable to connect to Modelo API");
    }

    #[test]
    fn config_errors_are_high_severity() {
        let err = DemoError::InvalidConfigValueError {
            field: "api.base_url".to_string(),
            value: "not-a-url".to_string(),
            reason: "Invalid URL format".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.recovery_suggestion().contains("api.base_url"));
    }
}
