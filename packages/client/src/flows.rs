//! Orchestration flows.
//!
//! Wires form input to the resource clients and renders the outcome through
//! the injected [`ViewAdapter`]. This is the only recovery boundary in the
//! crate: every failure becomes a visible message in the triggering form's
//! result region, never a silent drop.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::sleep;
use tracing::info;

use crate::api::{CustomerCreate, ProcurementRequest};
use crate::client::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::view::{Severity, ViewAdapter};

/// Result region for the customer form
pub const CUSTOMER_RESULT: &str = "customer-result";
/// Result region for the procurement form
pub const PROCUREMENT_RESULT: &str = "procurement-result";
/// Region holding the rendered order list
pub const ORDERS_LIST: &str = "orders-list";

/// How long to wait after a procurement submission before refreshing the
/// order list. The backend materializes the order asynchronously; this is a
/// policy constant, not a consistency guarantee.
pub const ORDER_REFRESH_DELAY: Duration = Duration::from_secs(1);

/// Split free-text item input into trimmed lines, dropping blank ones and
/// preserving input order.
pub fn split_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse the optional customer-id filter field. Empty means "list all";
/// zero is a valid identifier and must not be treated as absent.
pub fn parse_customer_filter(text: &str) -> ApiResult<Option<i64>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<i64>().map(Some).map_err(|_| {
        ApiError::validation(format!("customer id must be an integer, got `{trimmed}`"))
    })
}

/// Customer form state, exactly as collected from the UI
#[derive(Debug, Clone, Default)]
pub struct CustomerForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
}

impl CustomerForm {
    fn into_create(self) -> CustomerCreate {
        CustomerCreate {
            name: self.name,
            email: self.email,
            company: non_empty(self.company),
            phone: non_empty(self.phone),
            address: None,
            notes: None,
        }
    }
}

/// Procurement form state, exactly as collected from the UI
#[derive(Debug, Clone, Default)]
pub struct ProcurementForm {
    pub customer_id: String,
    /// Free text, one item per line
    pub items_text: String,
    pub budget_limit: String,
}

impl ProcurementForm {
    fn into_request(self) -> ApiResult<ProcurementRequest> {
        let customer_id = self.customer_id.trim().parse::<i64>().map_err(|_| {
            ApiError::validation(format!(
                "customer id must be an integer, got `{}`",
                self.customer_id.trim()
            ))
        })?;
        let budget = self.budget_limit.trim();
        let budget_limit = if budget.is_empty() {
            None
        } else {
            Some(budget.parse::<f64>().map_err(|_| {
                ApiError::validation(format!("budget limit must be a number, got `{budget}`"))
            })?)
        };
        Ok(ProcurementRequest::new(
            customer_id,
            split_items(&self.items_text),
            budget_limit,
        ))
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Drives the user-triggered flows over one [`ApiClient`] and one view.
///
/// Overlapping order-list loads are sequenced by a generation counter: a
/// response arriving after a newer load has started renders nothing, so the
/// orders region always shows the most recently requested list.
pub struct Orchestrator<V: ViewAdapter> {
    client: ApiClient,
    view: V,
    refresh_delay: Duration,
    last_filter: Mutex<Option<i64>>,
    list_generation: AtomicU64,
}

impl<V: ViewAdapter> Orchestrator<V> {
    pub fn new(client: ApiClient, view: V) -> Self {
        Self::with_refresh_delay(client, view, ORDER_REFRESH_DELAY)
    }

    /// Like [`Orchestrator::new`] with an explicit post-creation refresh
    /// delay, so tests need not wait out the production constant.
    pub fn with_refresh_delay(client: ApiClient, view: V, refresh_delay: Duration) -> Self {
        Self {
            client,
            view,
            refresh_delay,
            last_filter: Mutex::new(None),
            list_generation: AtomicU64::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Submit the customer form: create the customer, report the assigned
    /// id, reset the form. On failure the message is shown verbatim and the
    /// form is left intact for correction.
    pub async fn submit_customer(&self, form: CustomerForm) {
        self.view.clear_result(CUSTOMER_RESULT);
        match self.client.customers().create(&form.into_create()).await {
            Ok(customer) => {
                info!(customer_id = customer.id, "customer created");
                self.view.render_result(
                    CUSTOMER_RESULT,
                    &format!("Customer created successfully! ID: {}", customer.id),
                    Severity::Success,
                );
                self.view.reset_form(CUSTOMER_RESULT);
            }
            Err(err) => {
                self.view
                    .render_result(CUSTOMER_RESULT, &format!("Error: {err}"), Severity::Error);
            }
        }
    }

    /// Submit the procurement form, then refresh the order list after the
    /// configured delay so the backend has a chance to materialize the order.
    pub async fn submit_procurement(&self, form: ProcurementForm) {
        self.view.clear_result(PROCUREMENT_RESULT);
        let request = match form.into_request() {
            Ok(request) => request,
            Err(err) => {
                self.view.render_result(
                    PROCUREMENT_RESULT,
                    &format!("Error: {err}"),
                    Severity::Error,
                );
                return;
            }
        };
        match self.client.procurement().create(&request).await {
            Ok(response) => {
                info!(
                    order_id = response.order_id,
                    status = %response.status,
                    "procurement request created"
                );
                self.view.render_result(
                    PROCUREMENT_RESULT,
                    &format!(
                        "Procurement request created! Order ID: {}, Status: {}",
                        response.order_id, response.status
                    ),
                    Severity::Success,
                );
                self.view.reset_form(PROCUREMENT_RESULT);
                sleep(self.refresh_delay).await;
                let filter = *self.last_filter.lock().await;
                self.load_orders(filter).await;
            }
            Err(err) => {
                self.view.render_result(
                    PROCUREMENT_RESULT,
                    &format!("Error: {err}"),
                    Severity::Error,
                );
            }
        }
    }

    /// Load and render the order list: loading indicator first, then either
    /// the rendered orders, an explicit empty-state message, or the failure.
    pub async fn load_orders(&self, filter: Option<i64>) {
        let generation = self.list_generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.last_filter.lock().await = filter;
        self.view.render_loading(ORDERS_LIST);

        let result = self.client.orders().list(filter).await;

        if self.list_generation.load(Ordering::SeqCst) != generation {
            info!(generation, "discarding stale order list response");
            return;
        }
        match result {
            Ok(orders) if orders.is_empty() => {
                self.view
                    .render_result(ORDERS_LIST, "No orders found.", Severity::Info);
            }
            Ok(orders) => {
                info!(count = orders.len(), "rendering order list");
                self.view.render_order_list(ORDERS_LIST, &orders);
            }
            Err(err) => {
                self.view.render_result(
                    ORDERS_LIST,
                    &format!("Error loading orders: {err}"),
                    Severity::Error,
                );
            }
        }
    }

    /// Load orders from the raw filter field, rejecting non-numeric input
    /// before any request is issued.
    pub async fn load_orders_from_filter(&self, filter_text: &str) {
        match parse_customer_filter(filter_text) {
            Ok(filter) => self.load_orders(filter).await,
            Err(err) => {
                self.view.render_result(
                    ORDERS_LIST,
                    &format!("Error loading orders: {err}"),
                    Severity::Error,
                );
            }
        }
    }
}
