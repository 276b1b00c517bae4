//! Main client for the essentials backend.

use crate::config::ClientConfig;
use crate::customers::CustomerClient;
use crate::error::ApiResult;
use crate::health::HealthClient;
use crate::orders::OrderClient;
use crate::procurement::ProcurementClient;
use crate::transport::Transport;

/// Entry point grouping the resource clients over one transport.
///
/// ```no_run
/// # use essentials_client::{ApiClient, ClientConfig};
/// # async fn run() -> essentials_client::ApiResult<()> {
/// let client = ApiClient::new(&ClientConfig::default())?;
/// let orders = client.orders().list(None).await?;
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    transport: Transport,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        Ok(Self {
            transport: Transport::new(config)?,
        })
    }

    /// Construct from the environment (see [`crate::config::API_URL_ENV`]).
    pub fn from_env() -> ApiResult<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn customers(&self) -> CustomerClient<'_> {
        CustomerClient::new(&self.transport)
    }

    pub fn procurement(&self) -> ProcurementClient<'_> {
        ProcurementClient::new(&self.transport)
    }

    pub fn orders(&self) -> OrderClient<'_> {
        OrderClient::new(&self.transport)
    }

    pub fn health(&self) -> HealthClient<'_> {
        HealthClient::new(&self.transport)
    }
}
