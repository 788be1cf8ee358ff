//! Unified error types for the community API.

use thiserror::Error;

/// Unified error type for the service.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Configuration loading error.
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Configuration loaded but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by an external database handle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatabaseError {
    /// The server could not be reached.
    #[error("server unreachable: {0}")]
    Unreachable(String),

    /// The server refused the credentials.
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    /// Any other failure reported by the driver.
    #[error("{0}")]
    Other(String),
}

/// Failure to resolve the database module itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// No database module is wired into this deployment.
    #[error("database module not found")]
    NotFound,

    /// The module exists but blew up while being resolved.
    #[error("{0}")]
    Failed(String),
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_other_is_verbatim() {
        let err = DatabaseError::Other("connection reset by peer".to_string());
        assert_eq!(err.to_string(), "connection reset by peer");
    }

    #[test]
    fn json_errors_convert() {
        let err: ApiError = serde_json::from_str::<u16>("\"x\"").unwrap_err().into();
        assert!(matches!(err, ApiError::Json(_)));
        assert!(err.to_string().starts_with("json error: "));
    }

    #[test]
    fn database_error_unreachable_has_prefix() {
        let err = DatabaseError::Unreachable("localhost:27017".to_string());
        assert_eq!(err.to_string(), "server unreachable: localhost:27017");
    }
}
