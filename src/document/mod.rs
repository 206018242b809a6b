//! # Document Assembly
//!
//! Turns a configured [`DocumentContext`] plus collaborator lookups into an
//! ordered printable-block [`Document`](crate::block::Document). Two
//! variants exist:
//!
//! - [`receipt::assemble`] — the full sales receipt
//! - [`request::assemble`] — the payment-request slip
//!
//! Both are pure: they read the context and collaborators, emit blocks in a
//! fixed stage order, and never touch a transport. The context itself is
//! built once with consuming builder calls and is immutable afterwards, so
//! there are no hidden ordering dependencies between configuration and
//! assembly.

pub mod receipt;
pub mod request;

use serde::{Deserialize, Serialize};

use crate::money::{LineItem, Totals};
use crate::order::Order;

/// Immutable display identity of the selling store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreProfile {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: String,
}

impl StoreProfile {
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        website: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            email: email.into(),
            website: website.into(),
        }
    }
}

/// Everything a document variant needs, gathered up front.
///
/// Built with consuming builder methods and consumed by an assembler:
///
/// ```
/// use bonnetje::document::{DocumentContext, StoreProfile};
///
/// let store = StoreProfile::new("Koffiebar", "Kade 12", "010 123", "k@b.nl", "bar.nl");
/// let ctx = DocumentContext::new(store)
///     .currency("€")
///     .item("Coffee", 2, 250.0)
///     .item("Muffin", 1, 300.0)
///     .tax_rate(10.0)
///     .transaction_id("TX-1");
/// assert_eq!(ctx.totals().subtotal(), 800.0);
/// ```
///
/// The `tax_rate` call derives tax from the items present at that moment
/// (recomputing the subtotal only when it is still zero) — items added
/// afterwards do not refresh it. See [`Totals`] for the full quirk.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    currency: String,
    store: StoreProfile,
    items: Vec<LineItem>,
    totals: Totals,
    logo: Option<String>,
    code_payload: Option<String>,
    transaction_id: String,
    request_amount: f64,
    order: Option<Order>,
}

impl DocumentContext {
    /// Create a context for a store, with the `€` default currency.
    pub fn new(store: StoreProfile) -> Self {
        Self {
            currency: "€".to_string(),
            store,
            items: Vec::new(),
            totals: Totals::new(),
            logo: None,
            code_payload: None,
            transaction_id: String::new(),
            request_amount: 0.0,
            order: None,
        }
    }

    /// Set the currency symbol used by every amount row.
    pub fn currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency = symbol.into();
        self
    }

    /// Add a line item (name, quantity, unit price).
    pub fn item(mut self, name: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        self.items.push(LineItem::new(name, quantity, unit_price));
        self
    }

    /// Set the tax rate (percent) and derive tax from the current items.
    pub fn tax_rate(mut self, rate: f64) -> Self {
        let Self { totals, items, .. } = &mut self;
        totals.set_tax_rate(rate, items);
        self
    }

    /// Set a logo reference (path or registry key — opaque to the core).
    pub fn logo(mut self, reference: impl Into<String>) -> Self {
        self.logo = Some(reference.into());
        self
    }

    /// Set the barcode/QR payload printed by the code blocks.
    pub fn code_payload(mut self, payload: impl Into<String>) -> Self {
        self.code_payload = Some(payload.into());
        self
    }

    pub fn transaction_id(mut self, id: impl Into<String>) -> Self {
        self.transaction_id = id.into();
        self
    }

    /// Set the amount a payment request asks for. Not derived from items.
    pub fn request_amount(mut self, amount: f64) -> Self {
        self.request_amount = amount;
        self
    }

    /// Attach the order snapshot. Required by the receipt variant, and by
    /// the payment request for its footer timestamp.
    pub fn order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }

    // Accessors used by the assemblers.

    pub fn currency_symbol(&self) -> &str {
        &self.currency
    }

    pub fn store(&self) -> &StoreProfile {
        &self.store
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    pub fn logo_ref(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn payload(&self) -> Option<&str> {
        self.code_payload.as_deref()
    }

    pub fn tid(&self) -> &str {
        &self.transaction_id
    }

    pub fn requested(&self) -> f64 {
        self.request_amount
    }

    pub fn attached_order(&self) -> Option<&Order> {
        self.order.as_ref()
    }
}
