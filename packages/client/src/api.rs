//! API request and response models for the essentials backend.
//!
//! Every endpoint has a typed schema; shape mismatches surface as decode
//! errors at the transport boundary. These are transient value objects owned
//! by the backend — the client constructs them per call and discards them
//! after rendering.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer as returned by the backend, with its server-assigned identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for customer creation.
///
/// Omitted optional fields serialize as JSON `null` so the wire body is
/// exactly the collected form state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

/// Body for customer update; all fields optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

/// Acknowledgement returned by delete endpoints
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DeleteAck {
    pub message: String,
}

/// Procurement request body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcurementRequest {
    pub customer_id: i64,
    /// Ordered, trimmed, non-blank item lines
    pub items: Vec<String>,
    pub budget_limit: Option<f64>,
    pub quantity_per_item: Option<HashMap<String, i64>>,
    pub preferred_vendors: Option<Vec<String>>,
    pub preferred_brands: Option<Vec<String>>,
    pub notes: Option<String>,
}

impl ProcurementRequest {
    pub fn new(customer_id: i64, items: Vec<String>, budget_limit: Option<f64>) -> Self {
        Self {
            customer_id,
            items,
            budget_limit,
            quantity_per_item: None,
            preferred_vendors: None,
            preferred_brands: None,
            notes: None,
        }
    }
}

/// Response to a procurement submission: the order the backend opened for it
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProcurementResponse {
    pub order_id: i64,
    pub status: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Order as returned by the backend.
///
/// `status` is rendered as-is; the client does not validate it against the
/// backend's enumeration. A missing `items` field decodes to an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub status: String,
    pub total_amount: f64,
    pub budget_limit: Option<f64>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Line item within an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: i64,
    pub item_name: String,
    pub requested_quantity: i64,
    pub product_name: Option<String>,
    pub vendor: Option<String>,
    pub price: Option<f64>,
    pub quantity_purchased: i64,
    pub status: String,
}

/// Body for the order status transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
    pub notes: Option<String>,
}

impl OrderStatusUpdate {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            notes: None,
        }
    }
}

/// Liveness payload from the health endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}
