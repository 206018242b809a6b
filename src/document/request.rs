//! # Payment-Request Assembly
//!
//! The short slip asking a customer to scan and pay. Uses the configured
//! request amount, never the order items. The footer timestamp still comes
//! from the attached order's creation time, so this variant requires an
//! order too even though it is otherwise order-independent.

use crate::block::{Block, Document, ImageMode, Justification};
use crate::document::DocumentContext;
use crate::error::{PrintError, PrintResult};
use crate::layout;

/// Assemble a payment-request document.
///
/// Fails with [`PrintError::MissingOrderContext`] before emitting any block
/// when the context has no order attached (the footer timestamp needs it).
pub fn assemble(ctx: &DocumentContext) -> PrintResult<Document> {
    let order = ctx.attached_order().ok_or(PrintError::MissingOrderContext)?;
    let currency = ctx.currency_symbol();

    let total_row = layout::summary_amount("TOTAL", ctx.requested(), currency, true);
    // Header call supplies only the left field; the right column stays blank.
    let header = layout::pad_header(&format!("TID: {}", ctx.tid()), "", false);

    let mut doc = Document::new();
    doc.push(Block::Feed(1));
    doc.push(Block::Justify(Justification::Center));
    if let Some(logo) = ctx.logo_ref() {
        doc.push(Block::Feed(1));
        doc.push(Block::Image {
            source: logo.to_string(),
            mode: ImageMode::Auto,
        });
        doc.push(Block::Feed(1));
    }
    doc.push(Block::Text(ctx.store().name.clone()));
    doc.push(Block::Text(ctx.store().address.clone()));
    doc.push(Block::Text(header));
    doc.push(Block::Feed(1));

    doc.push(layout::rule());
    doc.push(Block::Emphasis(true));
    doc.push(Block::Text("PAYMENT REQUEST".to_string()));
    doc.push(Block::Emphasis(false));
    doc.push(layout::rule());
    doc.push(Block::Feed(1));

    doc.push(Block::Text("Please scan the code below".to_string()));
    doc.push(Block::Text("to make payment".to_string()));
    doc.push(Block::Feed(1));

    if let Some(payload) = ctx.payload() {
        doc.push(Block::QrCode(payload.to_string()));
    }
    doc.push(Block::Feed(1));

    doc.push(Block::DoubleWidth(true));
    doc.push(Block::Text(total_row));
    doc.push(Block::Feed(1));
    doc.push(Block::DoubleWidth(false));

    doc.push(Block::Feed(1));
    doc.push(Block::Justify(Justification::Center));
    doc.push(Block::Text("This is not a proof of payment.".to_string()));
    doc.push(Block::Feed(1));
    doc.push(Block::Text(order.created_at_line()));
    doc.push(Block::Feed(2));
    doc.push(Block::Cut);

    Ok(doc)
}
