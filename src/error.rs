//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::auth::ApiError;
pub use crate::config::ConfigError;
pub use crate::form::FormError;
pub use crate::session::SessionError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Auth service errors
    #[error("Auth service error: {0}")]
    Api(#[from] ApiError),

    /// Session misuse
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// Form misconfiguration
    #[error("Form error: {0}")]
    Form(#[from] FormError),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    Logger(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_error = ConfigError::FilePathNotSet;
        let app_error: AppError = config_error.into();
        assert!(matches!(app_error, AppError::Config(_)));
        assert!(app_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_app_error_from_api_error() {
        let api_error = ApiError::Status {
            status: 500,
            message: "Test error".to_string(),
        };
        let app_error: AppError = api_error.into();
        assert!(matches!(app_error, AppError::Api(_)));
        assert!(app_error.to_string().contains("Auth service error"));
    }

    #[test]
    fn test_app_error_from_session_error() {
        let app_error: AppError = SessionError::ProviderUnmounted.into();
        assert!(matches!(app_error, AppError::Session(_)));
        assert!(app_error.to_string().contains("Session error"));
    }

    #[test]
    fn test_app_error_from_form_error() {
        let form_error = FormError::InvalidPattern {
            source_text: "(".to_string(),
            reason: "unclosed group".to_string(),
        };
        let app_error: AppError = form_error.into();
        assert!(matches!(app_error, AppError::Form(_)));
    }
}
