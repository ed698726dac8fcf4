//! Auth service error types.

use std::time::Duration;

/// Errors that can occur while talking to the auth service. All of them are
/// transport errors from the point of view of a page or the session.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to deserialize service response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Request exceeded the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Base URL could not be used to build a request
    #[error("Invalid API URL '{0}'")]
    InvalidUrl(String),
}

impl ApiError {
    /// Return the HTTP status if the service answered.
    ///
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::HttpRequest(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Return a short message suitable for a banner.
    ///
    pub fn summary(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::HttpRequest(e) if e.is_connect() => {
                "Could not reach the authentication service".to_string()
            }
            ApiError::Timeout(_) => "The authentication service did not respond in time".to_string(),
            other => other.to_string(),
        }
    }
}
