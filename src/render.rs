//! # Text Preview Renderer
//!
//! Replays a block sequence into plain text, tracking the style state the
//! way a printer would:
//!
//! ```text
//! Document → RenderState per block → 48-column text
//! ```
//!
//! Justification is honored (24 columns while double-width is active, since
//! doubled characters halve the paper); rules become dashes; image, barcode
//! and QR blocks become bracketed placeholders (symbol encoding belongs to
//! a real driver). This is what text transports receive and what the CLI
//! shows.

use crate::block::{Block, Document, Justification};
use crate::layout::PAPER_WIDTH;

/// Center `line` in `width` columns. No-op when the line is wider.
fn center(line: &str, width: usize) -> String {
    let len = line.chars().count();
    if len >= width {
        return line.to_string();
    }
    format!("{}{}", " ".repeat((width - len) / 2), line)
}

/// Render a document to plain text.
pub fn render_text(doc: &Document) -> String {
    let mut out = String::new();
    let mut justify = Justification::Left;
    let mut double_width = false;

    let emit_line = |out: &mut String, line: &str, justify: Justification, dw: bool| {
        let width = if dw { PAPER_WIDTH / 2 } else { PAPER_WIDTH };
        match justify {
            Justification::Left => out.push_str(line),
            Justification::Center => out.push_str(&center(line, width)),
        }
        out.push('\n');
    };

    for block in doc {
        match block {
            Block::Text(text) => {
                for line in text.split('\n') {
                    emit_line(&mut out, line, justify, double_width);
                }
            }
            Block::Rule(width) => {
                out.push_str(&"-".repeat(*width));
                out.push('\n');
            }
            Block::Emphasis(_) => {}
            Block::Justify(j) => justify = *j,
            Block::DoubleWidth(on) => double_width = *on,
            Block::Image { source, .. } => {
                emit_line(&mut out, &format!("[IMAGE {source}]"), justify, double_width);
            }
            Block::Barcode(payload) => {
                emit_line(&mut out, &format!("[CODE128 {payload}]"), justify, double_width);
            }
            Block::QrCode(payload) => {
                emit_line(&mut out, &format!("[QR {payload}]"), justify, double_width);
            }
            Block::Feed(lines) => {
                for _ in 0..*lines {
                    out.push('\n');
                }
            }
            Block::Cut => {
                out.push_str(&format!(
                    "{}\u{2702}{}\n",
                    "-".repeat(PAPER_WIDTH / 2 - 1),
                    "-".repeat(PAPER_WIDTH / 2)
                ));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_left_text() {
        let doc: Document = [Block::Text("hello".into())].into_iter().collect();
        assert_eq!(render_text(&doc), "hello\n");
    }

    #[test]
    fn test_centered_text() {
        let doc: Document = [
            Block::Justify(Justification::Center),
            Block::Text("hi".into()),
        ]
        .into_iter()
        .collect();
        // (48 - 2) / 2 = 23 leading spaces.
        assert_eq!(render_text(&doc), format!("{}hi\n", " ".repeat(23)));
    }

    #[test]
    fn test_centering_respects_double_width() {
        let doc: Document = [
            Block::Justify(Justification::Center),
            Block::DoubleWidth(true),
            Block::Text("hi".into()),
            Block::DoubleWidth(false),
            Block::Text("hi".into()),
        ]
        .into_iter()
        .collect();
        let text = render_text(&doc);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("{}hi", " ".repeat(11)));
        assert_eq!(lines[1], format!("{}hi", " ".repeat(23)));
    }

    #[test]
    fn test_rule_and_feed() {
        let doc: Document = [Block::Rule(5), Block::Feed(2)].into_iter().collect();
        assert_eq!(render_text(&doc), "-----\n\n\n");
    }

    #[test]
    fn test_placeholders() {
        let doc: Document = [
            Block::Barcode("123".into()),
            Block::QrCode("pay".into()),
            Block::Image {
                source: "logo.png".into(),
                mode: crate::block::ImageMode::Auto,
            },
        ]
        .into_iter()
        .collect();
        let text = render_text(&doc);
        assert!(text.contains("[CODE128 123]"));
        assert!(text.contains("[QR pay]"));
        assert!(text.contains("[IMAGE logo.png]"));
    }

    #[test]
    fn test_multiline_text_block() {
        let doc: Document = [Block::Text("a\nb".into())].into_iter().collect();
        assert_eq!(render_text(&doc), "a\nb\n");
    }

    #[test]
    fn test_cut_line_width() {
        let doc: Document = [Block::Cut].into_iter().collect();
        let line = render_text(&doc);
        assert_eq!(line.trim_end().chars().count(), PAPER_WIDTH);
    }

    #[test]
    fn test_emphasis_has_no_text_rendering() {
        let doc: Document = [
            Block::Emphasis(true),
            Block::Text("x".into()),
            Block::Emphasis(false),
        ]
        .into_iter()
        .collect();
        assert_eq!(render_text(&doc), "x\n");
    }
}
