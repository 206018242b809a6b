//! # Order Snapshot
//!
//! The order-data collaborator boundary. Assembly consumes an immutable
//! snapshot of an order rather than querying a live store, so documents are
//! deterministic and tests can stub the whole surface with a literal.
//!
//! All types are serde-derived so the CLI can load orders from JSON files.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One purchased product as it appears on the order.
///
/// `price` is the line price (already multiplied by quantity), matching how
/// order backends store it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProduct {
    pub name: String,
    pub quantity: u32,
    pub price: f64,
}

/// One VAT bucket: percentage and the amount collected at that percentage.
///
/// Buckets are kept as a list, not a map: iteration order is whatever order
/// the source data supplied (typically ascending insertion order) and is
/// never sorted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VatLine {
    pub percentage: u32,
    pub amount: f64,
}

/// One payment applied to the order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub method: String,
    pub amount: f64,
}

/// Immutable order snapshot consumed by the document assemblers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Invoice identifier printed on the receipt.
    pub invoice_id: String,
    /// Products in the order they were added.
    pub products: Vec<OrderProduct>,
    pub subtotal: f64,
    /// VAT buckets in source order.
    #[serde(default)]
    pub vat_lines: Vec<VatLine>,
    /// Sum of all VAT amounts.
    pub tax_total: f64,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(default)]
    pub discount: f64,
    pub total: f64,
    /// Order creation time, printed in the receipt footer.
    pub created_at: NaiveDateTime,
}

impl Order {
    /// Creation timestamp rendered the way the footer prints it:
    /// `"5 August 2026 14:03:09"` (day without leading zero, full month
    /// name, 24-hour clock).
    pub fn created_at_line(&self) -> String {
        self.created_at.format("%-d %B %Y %H:%M:%S").to_string()
    }
}
