use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserApiError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl UserApiError {
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            UserApiError::ApiError(e) if e.is_connect() => {
                "Check that the user service is running and the base URL is reachable"
            }
            UserApiError::ApiError(e) if e.is_builder() => {
                "Check the request URL and header values for invalid characters"
            }
            UserApiError::ApiError(_) => "Retry the request or inspect the server logs",
            UserApiError::IoError(_) => "Check the file path and its permissions",
            UserApiError::SerializationError(_) => "Check the request body for non-JSON values",
            UserApiError::ConfigError { .. } => "Fix the syntax of the configuration file",
            UserApiError::InvalidConfigValueError { .. } => {
                "Correct the configuration value or override it on the command line"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, UserApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_value_message() {
        let err = UserApiError::InvalidConfigValueError {
            field: "client.base_url".to_string(),
            value: "ftp://x".to_string(),
            reason: "Unsupported URL scheme: ftp".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for 'client.base_url' (ftp://x): Unsupported URL scheme: ftp"
        );
        assert!(err.recovery_suggestion().contains("command line"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: UserApiError = io.into();
        assert!(matches!(err, UserApiError::IoError(_)));
    }
}
