//! # Receipt Assembly
//!
//! The sales-receipt variant: a strictly ordered sequence of layout stages
//! with no branching back. Header and identity first, then items, then the
//! summary ladder (subtotal → VAT buckets → payments → discount → grand
//! total), then the footer with timestamp, contact lines and barcode.
//!
//! Every amount on the receipt comes from the attached order snapshot; the
//! context's own items/totals serve callers that compute documents from
//! scratch (see [`crate::money`]).

use crate::block::{Block, Document, ImageMode, Justification};
use crate::document::DocumentContext;
use crate::error::{PrintError, PrintResult};
use crate::layout;
use crate::lookup::{SettingsStore, TextLookup};

/// Assemble a receipt document.
///
/// `copy` switches the title to the copy label. Fails with
/// [`PrintError::MissingOrderContext`] before emitting any block when the
/// context has no order attached.
pub fn assemble(
    ctx: &DocumentContext,
    lookup: &dyn TextLookup,
    settings: &dyn SettingsStore,
    copy: bool,
) -> PrintResult<Document> {
    let order = ctx.attached_order().ok_or(PrintError::MissingOrderContext)?;
    let currency = ctx.currency_symbol();
    let mut doc = Document::new();

    // Store header, centered. Name in double-width, address from settings.
    doc.push(Block::Justify(Justification::Center));
    if let Some(logo) = ctx.logo_ref() {
        doc.push(Block::Feed(1));
        doc.push(Block::Image {
            source: logo.to_string(),
            mode: ImageMode::Auto,
        });
        doc.push(Block::Feed(1));
    }
    doc.push(Block::DoubleWidth(true));
    doc.push(Block::Feed(2));
    doc.push(Block::Text(ctx.store().name.clone()));
    doc.push(Block::DoubleWidth(false));
    doc.push(Block::Text(format!(
        "{} {}",
        settings.get("company_street"),
        settings.get("company_street_number")
    )));
    doc.push(Block::Text(format!(
        "{} {}",
        settings.get("company_postal_code"),
        settings.get("company_city")
    )));
    doc.push(Block::Feed(2));

    // Title: copy label when reprinting for the customer's records.
    let title = if copy {
        lookup.lookup("receipt-copy", "receipt", "KOPIE BON")
    } else {
        lookup.lookup("receipt", "receipt", "BON")
    };
    doc.push(Block::Emphasis(true));
    doc.push(Block::Text(title));
    doc.push(Block::Emphasis(false));
    doc.push(Block::Feed(1));

    // Transaction id line, centered, then back to left for the items.
    let tid_label = lookup.lookup("transaction_id", "receipt", "Transactie ID:");
    doc.push(Block::Text(format!("{} #{}", tid_label, order.invoice_id)));
    doc.push(Block::Justify(Justification::Left));
    doc.push(Block::Feed(2));

    // Items, with a rule between consecutive items but not after the last.
    let count = order.products.len();
    for (index, product) in order.products.iter().enumerate() {
        let unit_price = if product.quantity > 0 {
            product.price / product.quantity as f64
        } else {
            product.price
        };
        doc.push(Block::Text(layout::line_item(
            &product.name,
            product.quantity,
            unit_price,
            currency,
        )));
        if index + 1 < count {
            doc.push(layout::rule());
        }
    }
    doc.push(Block::Feed(2));

    // Subtotal, emphasized.
    doc.push(Block::Emphasis(true));
    doc.push(Block::Text(layout::summary_amount(
        &lookup.lookup("subtotal", "receipt", "Subtotaal"),
        order.subtotal,
        currency,
        false,
    )));
    doc.push(Block::Emphasis(false));
    doc.push(Block::Feed(1));

    // VAT buckets in source order, then the tax total.
    doc.push(layout::rule());
    let vat_label = lookup.lookup("tax-percentage", "receipt", "BTW");
    for vat in &order.vat_lines {
        doc.push(Block::Text(layout::summary_amount(
            &format!("{} {}%", vat_label, vat.percentage),
            vat.amount,
            currency,
            false,
        )));
    }
    doc.push(Block::Text(layout::summary_amount(
        &lookup.lookup("tax-total", "receipt", "BTW totaal"),
        order.tax_total,
        currency,
        false,
    )));
    doc.push(layout::rule());
    doc.push(Block::Feed(1));

    // Payments.
    for payment in &order.payments {
        doc.push(Block::Text(layout::summary_amount(
            &payment.method,
            payment.amount,
            currency,
            false,
        )));
    }
    doc.push(layout::rule());
    doc.push(Block::Feed(2));

    // Discount only when one was applied. No placeholder line otherwise.
    if order.discount > 0.0 {
        doc.push(Block::Emphasis(true));
        doc.push(Block::Text(layout::summary_amount(
            &lookup.lookup("discount", "receipt", "Korting"),
            order.discount,
            currency,
            false,
        )));
        doc.push(Block::Emphasis(false));
        doc.push(Block::Feed(2));
    }

    // Grand total: double-width row, then an emphasized closing rule.
    doc.push(Block::DoubleWidth(true));
    doc.push(Block::Emphasis(true));
    doc.push(Block::Text(layout::summary_amount(
        &lookup.lookup("total", "receipt", "Totaal"),
        order.total,
        currency,
        true,
    )));
    doc.push(Block::DoubleWidth(false));
    doc.push(layout::rule());
    doc.push(Block::Emphasis(false));
    doc.push(Block::Feed(1));

    // Footer.
    doc.push(Block::Feed(1));
    doc.push(Block::Justify(Justification::Center));
    doc.push(Block::Text(lookup.lookup(
        "thanks-for-shopping",
        "receipt",
        "Bedankt voor je bezoek!",
    )));
    doc.push(Block::Feed(1));
    doc.push(Block::Text(order.created_at_line()));
    doc.push(Block::Feed(2));
    doc.push(Block::Text(format!("Email: {}", settings.get("site_to_email"))));
    doc.push(Block::Text(format!("Webshop: {}", settings.get("webshop_url"))));
    doc.push(Block::Text(format!(
        "Telefoon: {}",
        settings.get("company_phone_number")
    )));
    doc.push(Block::Feed(2));

    // Barcode only when a payload was configured.
    if let Some(payload) = ctx.payload() {
        doc.push(Block::Barcode(payload.to_string()));
    }
    doc.push(Block::Feed(2));
    doc.push(Block::Cut);

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use crate::lookup::{EmptySettings, NoTranslations, StaticSettings};

    fn assemble_demo(discount: f64) -> Document {
        let mut order = demo::demo_order();
        order.discount = discount;
        let ctx = demo::demo_context().order(order);
        assemble(&ctx, &NoTranslations, &demo::demo_settings(), false).unwrap()
    }

    #[test]
    fn test_missing_order_is_fatal() {
        let ctx = demo::demo_context();
        let err = assemble(&ctx, &NoTranslations, &EmptySettings, false).unwrap_err();
        assert!(matches!(err, PrintError::MissingOrderContext));
    }

    #[test]
    fn test_ends_with_cut() {
        let doc = assemble_demo(0.0);
        assert_eq!(*doc.blocks.last().unwrap(), Block::Cut);
    }

    #[test]
    fn test_title_label() {
        let doc = assemble_demo(0.0);
        assert!(doc.contains(|b| *b == Block::Text("BON".into())));

        let ctx = demo::demo_context().order(demo::demo_order());
        let copy = assemble(&ctx, &NoTranslations, &EmptySettings, true).unwrap();
        assert!(copy.contains(|b| *b == Block::Text("KOPIE BON".into())));
        assert!(!copy.contains(|b| *b == Block::Text("BON".into())));
    }

    #[test]
    fn test_transaction_id_line() {
        let doc = assemble_demo(0.0);
        let invoice = demo::demo_order().invoice_id;
        assert!(doc.contains(|b| matches!(
            b,
            Block::Text(t) if t == &format!("Transactie ID: #{invoice}")
        )));
    }

    #[test]
    fn test_rule_between_items_not_after_last() {
        let doc = assemble_demo(0.0);
        // Two products → exactly one rule between them: find the item texts
        // and check what separates/follows them.
        let item_positions: Vec<usize> = doc
            .blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| matches!(b, Block::Text(t) if t.contains(" x")))
            .map(|(i, _)| i)
            .collect();
        assert_eq!(item_positions.len(), 2);
        let (first, second) = (item_positions[0], item_positions[1]);
        assert_eq!(doc.blocks[first + 1], Block::Rule(layout::RULE_WIDTH));
        assert_ne!(doc.blocks[second + 1], Block::Rule(layout::RULE_WIDTH));
    }

    #[test]
    fn test_zero_discount_has_no_discount_row() {
        let doc = assemble_demo(0.0);
        assert!(!doc.contains(|b| matches!(b, Block::Text(t) if t.starts_with("Korting"))));
    }

    #[test]
    fn test_discount_row_emphasized_before_grand_total() {
        let doc = assemble_demo(50.0);
        let discount_pos = doc
            .blocks
            .iter()
            .position(|b| matches!(b, Block::Text(t) if t.starts_with("Korting")))
            .expect("discount row present");
        let total_pos = doc
            .blocks
            .iter()
            .position(|b| matches!(b, Block::Text(t) if t.starts_with("Totaal")))
            .expect("grand total row present");
        assert!(discount_pos < total_pos);
        assert_eq!(doc.blocks[discount_pos - 1], Block::Emphasis(true));
        assert_eq!(doc.blocks[discount_pos + 1], Block::Emphasis(false));
        // Exactly one discount row.
        let discount_rows = doc
            .blocks
            .iter()
            .filter(|b| matches!(b, Block::Text(t) if t.starts_with("Korting")))
            .count();
        assert_eq!(discount_rows, 1);
    }

    #[test]
    fn test_vat_lines_in_source_order() {
        let doc = assemble_demo(0.0);
        let vat_rows: Vec<&String> = doc
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Text(t) if t.starts_with("BTW ") => Some(t),
                _ => None,
            })
            .collect();
        assert_eq!(vat_rows.len(), 2);
        assert!(vat_rows[0].starts_with("BTW 9%"));
        assert!(vat_rows[1].starts_with("BTW 21%"));
    }

    #[test]
    fn test_grand_total_double_width_budget() {
        let doc = assemble_demo(0.0);
        let total_row = doc
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Text(t) if t.starts_with("Totaal") => Some(t),
                _ => None,
            })
            .unwrap();
        // Double-width summary budget: 6 + 19 columns.
        assert_eq!(total_row.chars().count(), 25);
    }

    #[test]
    fn test_barcode_only_with_payload() {
        let doc = assemble_demo(0.0);
        assert!(!doc.contains(|b| matches!(b, Block::Barcode(_))));

        let ctx = demo::demo_context()
            .code_payload("20260805-0042")
            .order(demo::demo_order());
        let doc = assemble(&ctx, &NoTranslations, &EmptySettings, false).unwrap();
        assert!(doc.contains(|b| *b == Block::Barcode("20260805-0042".into())));
    }

    #[test]
    fn test_logo_skipped_silently() {
        let doc = assemble_demo(0.0);
        assert!(!doc.contains(|b| matches!(b, Block::Image { .. })));

        let ctx = demo::demo_context().logo("logo.png").order(demo::demo_order());
        let doc = assemble(&ctx, &NoTranslations, &EmptySettings, false).unwrap();
        assert!(doc.contains(|b| matches!(b, Block::Image { source, .. } if source == "logo.png")));
    }

    #[test]
    fn test_settings_feed_address_and_contact_lines() {
        let settings = StaticSettings::new()
            .with("company_street", "Westkade")
            .with("company_street_number", "12b")
            .with("company_postal_code", "3024 EK")
            .with("company_city", "Rotterdam")
            .with("site_to_email", "kassa@voorbeeld.nl")
            .with("webshop_url", "https://voorbeeld.nl")
            .with("company_phone_number", "010 1234567");
        let ctx = demo::demo_context().order(demo::demo_order());
        let doc = assemble(&ctx, &NoTranslations, &settings, false).unwrap();
        assert!(doc.contains(|b| *b == Block::Text("Westkade 12b".into())));
        assert!(doc.contains(|b| *b == Block::Text("3024 EK Rotterdam".into())));
        assert!(doc.contains(|b| *b == Block::Text("Email: kassa@voorbeeld.nl".into())));
        assert!(doc.contains(|b| *b == Block::Text("Webshop: https://voorbeeld.nl".into())));
        assert!(doc.contains(|b| *b == Block::Text("Telefoon: 010 1234567".into())));
    }

    #[test]
    fn test_footer_timestamp() {
        let doc = assemble_demo(0.0);
        assert!(doc.contains(|b| *b == Block::Text("5 August 2026 14:03:09".into())));
    }
}
