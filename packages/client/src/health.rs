//! Liveness probe (`/health/`).

use reqwest::Method;

use crate::api::HealthStatus;
use crate::error::ApiResult;
use crate::transport::Transport;

pub struct HealthClient<'a> {
    transport: &'a Transport,
}

impl<'a> HealthClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Report whatever the backend says about itself.
    pub async fn check(&self) -> ApiResult<HealthStatus> {
        self.transport
            .request(Method::GET, "/health/", None::<&()>)
            .await
    }
}
