//! Procurement operations (`/procurement/`).

use reqwest::Method;

use crate::api::{ProcurementRequest, ProcurementResponse};
use crate::error::ApiResult;
use crate::transport::Transport;

/// Façade over the procurement endpoint.
pub struct ProcurementClient<'a> {
    transport: &'a Transport,
}

impl<'a> ProcurementClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Submit a procurement request. The backend opens an order immediately
    /// and fulfils it asynchronously; the response carries the order id and
    /// its initial status.
    pub async fn create(&self, request: &ProcurementRequest) -> ApiResult<ProcurementResponse> {
        self.transport
            .request(Method::POST, "/procurement/", Some(request))
            .await
    }
}
