//! Error types for the essentials API client.

use thiserror::Error;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Client-side error taxonomy.
///
/// Transport and the resource clients never recover from these; they
/// propagate unchanged to the orchestration layer, which is the only
/// recovery boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The round trip could not complete (connection refused, DNS failure,
    /// abort). No response was received.
    #[error("Network error: {0}")]
    Network(String),

    /// A response was received but its body was not valid JSON, or did not
    /// match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The backend answered with a non-success status code. `message` is the
    /// backend's `detail` field when present, otherwise synthesized from the
    /// status code.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// Rejected client-side before any request was issued.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ApiError {
    /// Create a remote error from a status code and message
    pub fn remote(status: u16, message: impl Into<String>) -> Self {
        Self::Remote {
            status,
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Check if this is a 404 from the backend
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Remote { status: 404, .. })
    }

    /// Check if this is a network-related error
    pub fn is_network_error(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
