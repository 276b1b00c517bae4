//! Customer operations (`/customers/`).

use reqwest::Method;

use crate::api::{Customer, CustomerCreate, CustomerUpdate, DeleteAck};
use crate::error::ApiResult;
use crate::transport::Transport;

/// Façade over the customer endpoints. Pure path construction plus
/// delegation; errors propagate unchanged.
pub struct CustomerClient<'a> {
    transport: &'a Transport,
}

impl<'a> CustomerClient<'a> {
    pub(crate) fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    /// Create a new customer; the response carries the server-assigned id.
    pub async fn create(&self, customer: &CustomerCreate) -> ApiResult<Customer> {
        self.transport
            .request(Method::POST, "/customers/", Some(customer))
            .await
    }

    /// List all customers.
    pub async fn list(&self) -> ApiResult<Vec<Customer>> {
        self.transport
            .request(Method::GET, "/customers/", None::<&()>)
            .await
    }

    /// Fetch one customer. An unknown id surfaces as a remote 404
    /// ([`crate::ApiError::is_not_found`]).
    pub async fn get(&self, id: i64) -> ApiResult<Customer> {
        self.transport
            .request(Method::GET, &format!("/customers/{id}"), None::<&()>)
            .await
    }

    /// Update a customer.
    pub async fn update(&self, id: i64, update: &CustomerUpdate) -> ApiResult<Customer> {
        self.transport
            .request(Method::PUT, &format!("/customers/{id}"), Some(update))
            .await
    }

    /// Delete a customer.
    pub async fn delete(&self, id: i64) -> ApiResult<DeleteAck> {
        self.transport
            .request(Method::DELETE, &format!("/customers/{id}"), None::<&()>)
            .await
    }
}
