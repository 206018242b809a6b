//! # Demo Data
//!
//! A built-in sample order, store and settings so the CLI (and the tests)
//! can produce a complete document without external files.

use chrono::NaiveDate;

use crate::document::{DocumentContext, StoreProfile};
use crate::lookup::StaticSettings;
use crate::order::{Order, OrderProduct, Payment, VatLine};

/// Sample store identity.
pub fn demo_store() -> StoreProfile {
    StoreProfile::new(
        "Koffiebar De Kade",
        "Westkade 12b, Rotterdam",
        "010 1234567",
        "kassa@dekade.nl",
        "https://dekade.nl",
    )
}

/// Sample settings matching the demo store.
pub fn demo_settings() -> StaticSettings {
    StaticSettings::new()
        .with("company_street", "Westkade")
        .with("company_street_number", "12b")
        .with("company_postal_code", "3024 EK")
        .with("company_city", "Rotterdam")
        .with("site_to_email", "kassa@dekade.nl")
        .with("webshop_url", "https://dekade.nl")
        .with("company_phone_number", "010 1234567")
}

/// Sample order: two products, two VAT buckets, one card payment.
pub fn demo_order() -> Order {
    Order {
        invoice_id: "20260805-0042".into(),
        products: vec![
            OrderProduct {
                name: "Coffee".into(),
                quantity: 2,
                price: 5.0,
            },
            OrderProduct {
                name: "Muffin".into(),
                quantity: 1,
                price: 3.0,
            },
        ],
        subtotal: 8.0,
        vat_lines: vec![
            VatLine {
                percentage: 9,
                amount: 0.33,
            },
            VatLine {
                percentage: 21,
                amount: 0.87,
            },
        ],
        tax_total: 1.2,
        payments: vec![Payment {
            method: "PIN".into(),
            amount: 9.2,
        }],
        discount: 0.0,
        total: 9.2,
        created_at: NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(14, 3, 9)
            .unwrap(),
    }
}

/// A context for the demo store, without an order attached.
pub fn demo_context() -> DocumentContext {
    DocumentContext::new(demo_store()).transaction_id("TX-0042")
}
