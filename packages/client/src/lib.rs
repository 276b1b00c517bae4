//! Typed client for the office-essentials procurement backend.
//!
//! Wraps the backend's REST endpoints (customers, procurement requests,
//! orders, health) behind typed resource clients, normalizes HTTP/JSON
//! failures into one error taxonomy, and drives the form-to-render flows
//! through a pluggable view boundary.

pub mod api;
pub mod client;
pub mod config;
pub mod customers;
pub mod error;
pub mod flows;
pub mod health;
pub mod orders;
pub mod procurement;
pub mod transport;
pub mod view;

// Re-export commonly used types
pub use api::*;
pub use client::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use flows::{CustomerForm, Orchestrator, ProcurementForm};
pub use view::{Severity, ViewAdapter};
