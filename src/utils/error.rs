use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Destination not found.")]
    NotFound { id: i64 },

    #[error("Destination with this ID already exists.")]
    Conflict { id: i64 },

    #[error("{message}")]
    ValidationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ApiError {
    /// HTTP status the error surfaces as.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::NotFound { .. } => 404,
            ApiError::Conflict { .. } => 400,
            ApiError::ValidationError { .. } => 422,
            _ => 500,
        }
    }

    /// Errors caused by the request itself.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound { .. } | ApiError::Conflict { .. } | ApiError::ValidationError { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_messages() {
        assert_eq!(
            ApiError::NotFound { id: 7 }.to_string(),
            "Destination not found."
        );
        assert_eq!(
            ApiError::Conflict { id: 7 }.to_string(),
            "Destination with this ID already exists."
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound { id: 1 }.status_code(), 404);
        assert_eq!(ApiError::Conflict { id: 1 }.status_code(), 400);
        let config = ApiError::ConfigError {
            message: "broken".to_string(),
        };
        assert_eq!(config.status_code(), 500);
        assert!(!config.is_client_error());
        assert!(ApiError::NotFound { id: 1 }.is_client_error());

        let invalid = ApiError::ValidationError {
            message: "missing field `name`".to_string(),
        };
        assert_eq!(invalid.status_code(), 422);
        assert_eq!(invalid.to_string(), "missing field `name`");
    }

    #[test]
    fn test_io_error_converts_and_is_server_side() {
        let err: ApiError = std::io::Error::new(std::io::ErrorKind::AddrInUse, "taken").into();
        assert!(matches!(err, ApiError::IoError(_)));
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_client_error());
    }
}
