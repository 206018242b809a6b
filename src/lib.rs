//! # Bonnetje - Receipt Layout Library
//!
//! Bonnetje formats point-of-sale order data into fixed-width text and
//! sequences it into printable documents for thermal receipt printers.
//! It provides:
//!
//! - **Column layout**: fixed-width padding for headers, summary rows and
//!   line items, with locale-fixed currency rendering
//! - **Monetary calculation**: subtotal/tax/grand-total with the truncating
//!   semantics legacy POS totals require
//! - **Document assembly**: two deterministic variants (sales receipt,
//!   payment request) emitting an ordered printable-block sequence
//! - **Session boundary**: a thin replayer that writes rendered documents
//!   to a scoped transport
//!
//! ## Quick Start
//!
//! ```
//! use bonnetje::document::receipt;
//! use bonnetje::lookup::{EmptySettings, NoTranslations};
//! use bonnetje::{demo, render};
//!
//! let ctx = demo::demo_context().order(demo::demo_order());
//! let doc = receipt::assemble(&ctx, &NoTranslations, &EmptySettings, false)?;
//! println!("{}", render::render_text(&doc));
//! # Ok::<(), bonnetje::PrintError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`block`] | Printable-block sequence (the assembler's output contract) |
//! | [`layout`] | Column layout engine |
//! | [`money`] | Monetary calculator |
//! | [`order`] | Order snapshot consumed by assembly |
//! | [`lookup`] | Translation/settings collaborator traits |
//! | [`document`] | Document context and the two assemblers |
//! | [`render`] | Plain-text preview renderer |
//! | [`session`] | Printer session and connectors |
//! | [`error`] | Error types |
//!
//! Physical transports, raster encoding and barcode/QR symbol generation
//! live behind the session boundary and are supplied by device drivers,
//! not by this crate.

pub mod block;
pub mod demo;
pub mod document;
pub mod error;
pub mod layout;
pub mod lookup;
pub mod money;
pub mod order;
pub mod render;
pub mod session;

// Re-exports for convenience
pub use block::{Block, Document, ImageMode, Justification};
pub use document::{DocumentContext, StoreProfile};
pub use error::{PrintError, PrintResult};
pub use session::{Connector, PrinterSession};
