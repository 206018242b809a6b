//! # Column Layout Engine
//!
//! Fixed-width padding and alignment rules shared by headers, summary rows
//! and line items. All widths are in characters, matching what a monospaced
//! thermal font actually prints.
//!
//! ## Column budgets
//!
//! | Row kind | Left | Right | Double-width |
//! |----------|------|-------|--------------|
//! | Header   | 16   | 16    | 8 / 8        |
//! | Summary  | 12   | 36    | 6 / 19       |
//!
//! Content that exceeds its column is never truncated: the padding
//! primitives are no-ops past the target width, so an oversized field simply
//! overflows its row.
//!
//! ## Example
//!
//! ```
//! use bonnetje::layout;
//!
//! let row = layout::summary_amount("Totaal", 1234.5, "€", false);
//! assert_eq!(row.chars().count(), 48);
//! assert!(row.ends_with("€1.234,50"));
//! ```

use crate::block::Block;

/// Header column budget per side.
const HEADER_COLS: usize = 16;
/// Summary label column budget (normal / double-width).
const SUMMARY_LABEL_COLS: usize = 12;
const SUMMARY_LABEL_COLS_DOUBLE: usize = 6;
/// Summary value column budget (normal / double-width).
const SUMMARY_VALUE_COLS: usize = 36;
const SUMMARY_VALUE_COLS_DOUBLE: usize = 19;
/// Dashed rule width (one character short of the 48-column paper).
pub const RULE_WIDTH: usize = 47;
/// Full paper width in characters for the standard font.
pub const PAPER_WIDTH: usize = 48;

/// Right-pad `text` with spaces to `width` characters.
///
/// No-op when the content is already wider.
fn pad_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(width);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', width - len));
    out
}

/// Left-pad `text` with spaces to `width` characters.
///
/// No-op when the content is already wider.
fn pad_left(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat_n(' ', width - len));
    out.push_str(text);
    out
}

/// Format a two-column header row.
///
/// Both columns are 16 characters wide, 8 in double-width mode. The left
/// field is right-padded, the right field left-padded. Empty fields are
/// valid and still padded to their budget.
pub fn pad_header(left: &str, right: &str, double_width: bool) -> String {
    let cols = if double_width { HEADER_COLS / 2 } else { HEADER_COLS };
    format!("{}{}", pad_right(left, cols), pad_left(right, cols))
}

/// Format a label/value summary row.
///
/// Label column is 12 characters (6 in double-width mode), value column 36
/// (19 in double-width mode). The value arrives pre-rendered; use
/// [`summary_amount`] for currency values.
pub fn pad_summary(label: &str, value: &str, double_width: bool) -> String {
    let (label_cols, value_cols) = if double_width {
        (SUMMARY_LABEL_COLS_DOUBLE, SUMMARY_VALUE_COLS_DOUBLE)
    } else {
        (SUMMARY_LABEL_COLS, SUMMARY_VALUE_COLS)
    };
    format!("{}{}", pad_right(label, label_cols), pad_left(value, value_cols))
}

/// Format a summary row with a currency-rendered value.
///
/// The value becomes `<currency><amount>` with exactly two decimals,
/// `,` as the decimal separator and `.` as the thousands separator. The
/// separators are locale-fixed, not configurable per call.
pub fn summary_amount(label: &str, amount: f64, currency: &str, double_width: bool) -> String {
    pad_summary(
        label,
        &format!("{}{}", currency, format_amount(amount)),
        double_width,
    )
}

/// Render an amount with two decimals, `,` decimal separator and `.`
/// thousands separator: `1234.5` → `"1.234,50"`.
///
/// Rounds half away from zero, the way POS backends traditionally present
/// totals that were already computed upstream.
pub fn format_amount(value: f64) -> String {
    let negative = value.is_sign_negative() && value != 0.0;
    let cents = (value.abs() * 100.0).round() as i64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    format!(
        "{}{},{:02}",
        if negative { "-" } else { "" },
        grouped,
        fraction
    )
}

/// Format a product line as a two-part block: name and quantity on the
/// first sub-line, the currency-rendered line total right-aligned on the
/// second, in the non-double-width summary budget.
///
/// Quantity is rendered as supplied; validating non-negativity is the
/// caller's job.
pub fn line_item(name: &str, quantity: u32, unit_price: f64, currency: &str) -> String {
    let total = quantity as f64 * unit_price;
    format!(
        "{} x{}\n{}",
        name,
        quantity,
        summary_amount("", total, currency, false)
    )
}

/// A dashed rule block at the standard width.
pub fn rule() -> Block {
    Block::Rule(RULE_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pad_header_exact_width() {
        // Left field padded to 16, right field 16 spaces.
        let row = pad_header("TID: 123", "", false);
        assert_eq!(row, format!("TID: 123{}{}", " ".repeat(8), " ".repeat(16)));
        assert_eq!(row.chars().count(), 32);
    }

    #[test]
    fn test_pad_header_double_width() {
        let row = pad_header("AB", "CD", true);
        assert_eq!(row, "AB            CD");
        assert_eq!(row.chars().count(), 16);
    }

    #[test]
    fn test_pad_header_overflow_not_truncated() {
        let long = "a".repeat(20);
        let row = pad_header(&long, "x", false);
        assert!(row.starts_with(&long));
        assert_eq!(row.chars().count(), 20 + 16);
    }

    #[test]
    fn test_pad_summary_width() {
        let row = pad_summary("Subtotaal", "€800,00", false);
        assert_eq!(row.chars().count(), 48);
        assert!(row.starts_with("Subtotaal   "));
        assert!(row.ends_with("€800,00"));
    }

    #[test]
    fn test_pad_summary_double_width() {
        let row = pad_summary("Totaal", "€880,00", true);
        // 6-char label overflows by nothing: "Totaal" is exactly 6.
        assert_eq!(row.chars().count(), 6 + 19);
    }

    #[test]
    fn test_pad_summary_empty_fields() {
        let row = pad_summary("", "", false);
        assert_eq!(row, " ".repeat(48));
    }

    #[test]
    fn test_pad_summary_overflow() {
        let long_value = "9".repeat(40);
        let row = pad_summary("label", &long_value, false);
        assert!(row.chars().count() > 48);
        assert!(row.ends_with(&long_value));
    }

    #[test]
    fn test_format_amount_plain() {
        assert_eq!(format_amount(800.0), "800,00");
        assert_eq!(format_amount(0.0), "0,00");
    }

    #[test]
    fn test_format_amount_thousands() {
        assert_eq!(format_amount(1234.5), "1.234,50");
        assert_eq!(format_amount(1_234_567.89), "1.234.567,89");
    }

    #[test]
    fn test_format_amount_rounds_half_away_from_zero() {
        // 0.125 is exactly representable, so the half-cent case is real.
        assert_eq!(format_amount(0.125), "0,13");
        assert_eq!(format_amount(-0.125), "-0,13");
    }

    #[test]
    fn test_format_amount_negative() {
        assert_eq!(format_amount(-1234.5), "-1.234,50");
    }

    #[test]
    fn test_currency_round_trip() {
        for value in [0.0, 0.01, 12.34, 800.0, 1234.56, 98765.4] {
            let rendered = format_amount(value);
            let parsed: f64 = rendered.replace('.', "").replace(',', ".").parse().unwrap();
            assert!((parsed - value).abs() < 0.005, "{value} -> {rendered}");
        }
    }

    #[test]
    fn test_summary_amount() {
        let row = summary_amount("Totaal", 1234.5, "€", false);
        assert_eq!(row.chars().count(), 48);
        assert!(row.ends_with("€1.234,50"));
    }

    #[test]
    fn test_line_item_shape() {
        let block = line_item("Coffee", 2, 2.50, "€");
        let mut lines = block.lines();
        assert_eq!(lines.next().unwrap(), "Coffee x2");
        let total_line = lines.next().unwrap();
        assert_eq!(total_line.chars().count(), 48);
        assert!(total_line.ends_with("€5,00"));
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_line_item_zero_quantity() {
        // No special-casing: rendered as supplied.
        let block = line_item("Ghost", 0, 9.99, "€");
        assert!(block.starts_with("Ghost x0"));
        assert!(block.ends_with("€0,00"));
    }

    #[test]
    fn test_rule_width() {
        assert_eq!(rule(), Block::Rule(47));
    }
}
