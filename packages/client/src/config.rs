//! Client configuration.
//!
//! The backend address is an explicit value handed to the client at
//! construction rather than an ambient constant. `from_env` covers the
//! common deployment where the address comes from the environment.

use std::env;

use crate::error::{ApiError, ApiResult};

/// Environment variable holding the backend base URL
pub const API_URL_ENV: &str = "ESSENTIALS_API_URL";

/// Default backend base URL, including the API version prefix
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Configuration for the essentials API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Full base URL of the backend, including the `/api/v1` prefix.
    /// Resource paths are appended verbatim.
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Read configuration from the environment, falling back to the default
    /// local backend address.
    pub fn from_env() -> ApiResult<Self> {
        let base_url = env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let config = Self { base_url };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base URL is required"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config(format!(
                "base URL must start with http:// or https://, got `{}`",
                self.base_url
            )));
        }
        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
