//! Order operations (`/orders/`).

use reqwest::Method;

use crate::api::{Order, OrderStatusUpdate};
use crate::error::{ApiError, ApiResult};
use crate::transport::Transport;

/// Façade over the order endpoints.
pub struct OrderClient<'a> {
    transport: &'a Transport,
}

impl<'a> OrderClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// List orders, optionally filtered by customer.
    ///
    /// The filter clause is emitted only when a customer id is given; zero is
    /// a valid identifier and must be passed through, not dropped.
    pub async fn list(&self, customer_id: Option<i64>) -> ApiResult<Vec<Order>> {
        let path = match customer_id {
            Some(id) => format!("/orders/?customer_id={id}"),
            None => "/orders/".to_string(),
        };
        self.transport.request(Method::GET, &path, None::<&()>).await
    }

    /// Fetch one order.
    pub async fn get(&self, id: i64) -> ApiResult<Order> {
        self.transport
            .request(Method::GET, &format!("/orders/{id}"), None::<&()>)
            .await
    }

    /// Transition an order's status. The status string must be non-empty;
    /// whether it names a valid state is the backend's call, not ours.
    pub async fn update_status(&self, id: i64, update: &OrderStatusUpdate) -> ApiResult<Order> {
        if update.status.trim().is_empty() {
            return Err(ApiError::validation("order status must be a non-empty string"));
        }
        self.transport
            .request(Method::PATCH, &format!("/orders/{id}/status"), Some(update))
            .await
    }
}
