//! HTTP request execution.
//!
//! One network round trip per call: build the URL from the configured base
//! address, serialize the body as JSON, send, and decode the response. No
//! retries, no caching, no timeout beyond the transport defaults. Failures
//! are logged and propagated; nothing is handled here.

use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};

/// Executes HTTP requests against the configured backend
pub struct Transport {
    http: Client,
    base_url: String,
}

impl Transport {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL the transport was constructed with (trailing slash stripped)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Execute one request and decode the JSON response into `T`.
    ///
    /// Non-success statuses become [`ApiError::Remote`], carrying the
    /// backend's `detail` string when the error body has one.
    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        debug!(%method, %url, "issuing API request");

        let mut builder = self.http.request(method, &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|err| {
            warn!(%url, error = %err, "API request failed to complete");
            ApiError::from(err)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = extract_detail(&text)
                .unwrap_or_else(|| format!("HTTP error: status {}", status.as_u16()));
            warn!(status = status.as_u16(), %url, %message, "API request rejected");
            return Err(ApiError::remote(status.as_u16(), message));
        }

        serde_json::from_str(&text).map_err(|err| {
            warn!(%url, error = %err, "failed to decode API response");
            ApiError::from(err)
        })
    }
}

/// Pull the human-readable `detail` field out of a backend error body.
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(str::to_string)
}
