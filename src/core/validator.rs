//! Row validator and preview builder
//!
//! Maps the tokenizer's cell grid to typed recipient rows against the
//! required-column contract, validates each row, and aggregates the
//! summary shown to the user before they confirm a bulk upload.
//!
//! # Failure Semantics
//!
//! [`build_preview`] never fails: every malformed-input condition becomes
//! data in the returned [`UploadPreview`], either as a single structural
//! error (empty file, missing required columns) that short-circuits all
//! row processing, or as one formatted entry per invalid row. Processing
//! is never aborted on the first bad row; full-file validation always
//! completes.

use crate::core::tokenizer::tokenize;
use crate::types::{BulkRow, FileKind, ParsedRow, RowStatus, UploadPreview};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::str::FromStr;

/// Columns that must be present in the header row, in reporting order
///
/// Matching is case-insensitive and order-independent in the source file;
/// `phone` and `message` are accepted but optional.
pub const REQUIRED_COLUMNS: [&str; 5] = ["card_id", "quantity", "amount", "name", "email"];

/// Build an upload preview from raw CSV text
///
/// Tokenizes the text, checks the header against the required-column
/// contract, validates every data row, and aggregates the counts and the
/// total monetary value of the valid rows. Pure function of its input:
/// identical text yields structurally equal previews.
///
/// # Arguments
///
/// * `text` - The raw CSV text of the selected file
///
/// # Returns
///
/// The aggregate preview. Structural failures (empty file, missing
/// required columns) return a preview with a single global error and
/// zero counts; row-level failures are folded into the error list while
/// the offending rows are retained for display.
pub fn build_preview(text: &str) -> UploadPreview {
    let grid = tokenize(text);
    if grid.is_empty() {
        return UploadPreview::failure("CSV is empty.");
    }

    // Grid row 0 is the header; build a case-insensitive column index.
    // The first occurrence of a duplicated column name wins.
    let mut header: HashMap<String, usize> = HashMap::new();
    for (position, cell) in grid[0].iter().enumerate() {
        header
            .entry(cell.trim().to_lowercase())
            .or_insert(position);
    }

    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|column| !header.contains_key(*column))
        .collect();
    if !missing.is_empty() {
        return UploadPreview::failure(format!(
            "Missing required columns: {}",
            missing.join(", ")
        ));
    }

    let mut preview = UploadPreview::empty();
    for (index, cells) in grid.iter().enumerate().skip(1) {
        // 1-based source row number, counting the header as row 1, so
        // the numbers match what a spreadsheet viewer would show
        let number = index + 1;

        let row = extract_row(&header, cells);
        if row.is_blank() {
            // A row of bare delimiters still reaches here; skip it
            // without counting or reporting it
            continue;
        }

        let quantity = parse_positive(&row.quantity);
        let amount = parse_positive(&row.amount);

        let mut reasons: Vec<String> = Vec::new();
        if row.card_id.is_empty() {
            reasons.push("card_id is required".to_string());
        }
        if row.name.is_empty() {
            reasons.push("name is required".to_string());
        }
        if row.email.is_empty() {
            reasons.push("email is required".to_string());
        }
        if quantity.is_none() {
            reasons.push("quantity must be > 0".to_string());
        }
        if amount.is_none() {
            reasons.push("amount must be > 0".to_string());
        }
        if !row.email.is_empty() && !row.email.contains('@') {
            reasons.push("email looks invalid".to_string());
        }

        if reasons.is_empty() {
            if let (Some(quantity), Some(amount)) = (quantity, amount) {
                preview.total_value += quantity * amount;
            }
            preview.valid_rows += 1;
            preview.rows.push(ParsedRow {
                number,
                row,
                status: RowStatus::Valid,
            });
        } else {
            preview.invalid_rows += 1;
            preview
                .errors
                .push(format!("Row {}: {}", number, reasons.join(", ")));
            preview.rows.push(ParsedRow {
                number,
                row,
                status: RowStatus::Invalid { reasons },
            });
        }
    }

    preview.total_rows = preview.rows.len();
    preview
}

/// Decide whether a preview leaves the submission gate open
///
/// Submission is blocked whenever any row is invalid, and whenever a
/// previewable file carries a structural error. The Excel notice is
/// informational: those uploads proceed without client-side validation.
pub fn submission_allowed(kind: &FileKind, preview: &UploadPreview) -> bool {
    if preview.invalid_rows > 0 {
        return false;
    }
    match kind {
        FileKind::Excel => true,
        _ => preview.is_clean(),
    }
}

/// Extract the seven contract fields from one grid row
///
/// Fields are looked up by the header's column positions and trimmed.
/// Cells beyond the row's length read as empty; blank or absent optional
/// columns yield `None`.
fn extract_row(header: &HashMap<String, usize>, cells: &[String]) -> BulkRow {
    let field = |column: &str| -> String {
        header
            .get(column)
            .and_then(|&position| cells.get(position))
            .map(|cell| cell.trim().to_string())
            .unwrap_or_default()
    };
    let optional = |column: &str| -> Option<String> {
        let value = field(column);
        (!value.is_empty()).then_some(value)
    };

    BulkRow {
        card_id: field("card_id"),
        quantity: field("quantity"),
        amount: field("amount"),
        name: field("name"),
        email: field("email"),
        phone: optional("phone"),
        message: optional("message"),
    }
}

/// Parse a field as a strictly positive decimal
///
/// Returns `None` for anything that does not parse, including the empty
/// string, and for zero or negative values.
fn parse_positive(value: &str) -> Option<Decimal> {
    Decimal::from_str(value)
        .ok()
        .filter(|parsed| *parsed > Decimal::ZERO)
}
