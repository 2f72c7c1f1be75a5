//! # Receipt PDF Renderer
//!
//! Renders a [`Receipt`] into a printable PDF with a fixed template:
//! one row per line item (name, quantity, line total), the grand total,
//! and the creation time.
//!
//! ## Template
//! ```text
//! ┌──────────────────────────────┐
//! │         CASH RECEIPT         │
//! │ ──────────────────────────── │
//! │ Coffee            x 2   5.00 │
//! │ Tea               x 1   1.75 │
//! │ ──────────────────────────── │
//! │ TOTAL                   6.75 │
//! │ 26.08.2026 14:35             │
//! └──────────────────────────────┘
//! ```
//!
//! The renderer is a pure function of the receipt's displayed fields: it
//! never mutates the receipt, and a rendering failure surfaces as a
//! [`RenderError`] rather than a partial document.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use thiserror::Error;

use kassa_core::Receipt;

// =============================================================================
// Layout Constants
// =============================================================================

/// Receipt page width: standard 80mm thermal roll.
const PAGE_WIDTH_MM: f32 = 80.0;
/// Page height per sheet; long receipts paginate.
const PAGE_HEIGHT_MM: f32 = 200.0;
/// Left margin for item names.
const MARGIN_LEFT_MM: f32 = 6.0;
/// Column position for quantities.
const COL_QTY_MM: f32 = 46.0;
/// Column position for line totals.
const COL_TOTAL_MM: f32 = 62.0;
/// Vertical start position on each page.
const TOP_MM: f32 = 186.0;
/// Row height.
const ROW_STEP_MM: f32 = 5.0;
/// Rows below this are pushed to a fresh page.
const BOTTOM_MM: f32 = 14.0;

const HEADER_SIZE: f32 = 12.0;
const ROW_SIZE: f32 = 9.0;

// =============================================================================
// Errors
// =============================================================================

/// Receipt rendering failures. Always fatal to the request.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF engine failure: {0}")]
    Engine(#[from] printpdf::Error),
}

// =============================================================================
// Renderer
// =============================================================================

/// Renders a receipt into PDF bytes.
///
/// Deterministic over the receipt's displayed fields; the PDF container
/// itself may embed its own generation metadata, so byte-identity across
/// runs is not part of the contract.
pub fn render_pdf(receipt: &Receipt) -> Result<Vec<u8>, RenderError> {
    let (doc, page, layer) = PdfDocument::new(
        "Receipt",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "receipt",
    );
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let font_bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = TOP_MM;

    current.use_text("CASH RECEIPT", HEADER_SIZE, Mm(MARGIN_LEFT_MM), Mm(y), &font_bold);
    y -= 2.0 * ROW_STEP_MM;

    for line in &receipt.lines {
        if y < BOTTOM_MM {
            let (next_page, next_layer) =
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "receipt");
            current = doc.get_page(next_page).get_layer(next_layer);
            y = TOP_MM;
        }
        write_row(
            &current,
            &font,
            y,
            &line.name,
            &format!("x {}", line.quantity),
            &line.line_total.to_string(),
        );
        y -= ROW_STEP_MM;
    }

    if y < BOTTOM_MM + 2.0 * ROW_STEP_MM {
        let (next_page, next_layer) =
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "receipt");
        current = doc.get_page(next_page).get_layer(next_layer);
        y = TOP_MM;
    }

    y -= ROW_STEP_MM;
    current.use_text("TOTAL", ROW_SIZE, Mm(MARGIN_LEFT_MM), Mm(y), &font_bold);
    current.use_text(
        receipt.grand_total.to_string(),
        ROW_SIZE,
        Mm(COL_TOTAL_MM),
        Mm(y),
        &font_bold,
    );
    y -= ROW_STEP_MM;
    current.use_text(
        receipt.created_at.as_str(),
        ROW_SIZE,
        Mm(MARGIN_LEFT_MM),
        Mm(y),
        &font,
    );

    Ok(doc.save_to_bytes()?)
}

fn write_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    y: f32,
    name: &str,
    qty: &str,
    total: &str,
) {
    layer.use_text(name, ROW_SIZE, Mm(MARGIN_LEFT_MM), Mm(y), font);
    layer.use_text(qty, ROW_SIZE, Mm(COL_QTY_MM), Mm(y), font);
    layer.use_text(total, ROW_SIZE, Mm(COL_TOTAL_MM), Mm(y), font);
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kassa_core::{LineItem, Money};

    fn sample_receipt() -> Receipt {
        Receipt {
            lines: vec![
                LineItem {
                    item_id: 1,
                    name: "Coffee".to_string(),
                    quantity: 2,
                    line_total: Money::from_cents(500),
                },
                LineItem {
                    item_id: 2,
                    name: "Tea".to_string(),
                    quantity: 1,
                    line_total: Money::from_cents(175),
                },
            ],
            grand_total: Money::from_cents(675),
            created_at: "26.08.2026 14:35".to_string(),
        }
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_pdf(&sample_receipt()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_empty_receipt() {
        let receipt = Receipt {
            lines: vec![],
            grand_total: Money::zero(),
            created_at: "26.08.2026 14:35".to_string(),
        };
        let bytes = render_pdf(&receipt).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_paginates_long_receipts() {
        let lines: Vec<LineItem> = (0..120)
            .map(|i| LineItem {
                item_id: i,
                name: format!("Item {i}"),
                quantity: 1,
                line_total: Money::from_cents(100),
            })
            .collect();
        let receipt = Receipt {
            grand_total: Money::from_cents(100 * lines.len() as i64),
            lines,
            created_at: "26.08.2026 14:35".to_string(),
        };

        // 120 rows exceed one 200mm page; must still render cleanly.
        let bytes = render_pdf(&receipt).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_does_not_mutate_receipt() {
        let receipt = sample_receipt();
        let before = receipt.clone();
        let _ = render_pdf(&receipt).unwrap();
        assert_eq!(receipt, before);
    }
}
