//! Presentation boundary.
//!
//! The orchestration layer never touches a concrete UI; it renders through
//! this trait. Implementations own the actual regions (DOM nodes, terminal
//! panes, a test recorder) and the client treats them as opaque sinks.

use std::fmt;

use crate::api::Order;

/// How a rendered message should be styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    /// CSS-class style name for the severity, as view implementations
    /// typically key their styling off it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Presentation primitives the orchestration layer calls into.
///
/// Receivers are `&self`: regions are interior-mutable sinks, and flows may
/// run concurrently over a shared orchestrator.
pub trait ViewAdapter: Send + Sync {
    /// Show a message in a form's result region.
    fn render_result(&self, region: &str, message: &str, severity: Severity);

    /// Remove whatever the result region currently shows.
    fn clear_result(&self, region: &str);

    /// Show a loading indicator in a region.
    fn render_loading(&self, region: &str);

    /// Replace a region with one card per order, including nested item rows
    /// when items are present.
    fn render_order_list(&self, region: &str, orders: &[Order]);

    /// Reset the form associated with a region after a successful submit.
    fn reset_form(&self, region: &str);
}
