//! Preview report output
//!
//! This module centralizes report formatting for a built preview:
//! - a plain-text summary with the aggregate counts and the error list
//! - a per-row CSV detail listing every retained row with its status
//!
//! All functions are pure writers (no reads) for easy testing.

use crate::types::UploadPreview;
use std::io::Write;

/// Default number of errors listed beneath the first one
pub const DEFAULT_MAX_EXTRA_ERRORS: usize = 5;

/// Write the aggregate summary for a preview
///
/// Prints the counts and total value, then the first global error
/// prominently with up to `max_extra_errors` further errors beneath it
/// and a truncation note for the rest.
///
/// # Arguments
///
/// * `preview` - The preview to summarize
/// * `max_extra_errors` - How many errors to list after the first
/// * `output` - Mutable reference to a writer for the report
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_summary(
    preview: &UploadPreview,
    max_extra_errors: usize,
    output: &mut dyn Write,
) -> Result<(), String> {
    writeln!(output, "rows: {}", preview.total_rows)
        .and_then(|_| writeln!(output, "valid: {}", preview.valid_rows))
        .and_then(|_| writeln!(output, "invalid: {}", preview.invalid_rows))
        .and_then(|_| writeln!(output, "total value: {:.2}", preview.total_value))
        .map_err(|e| format!("Failed to write summary: {}", e))?;

    if let Some((first, rest)) = preview.errors.split_first() {
        writeln!(output, "error: {}", first).map_err(|e| format!("Failed to write summary: {}", e))?;
        for error in rest.iter().take(max_extra_errors) {
            writeln!(output, "  - {}", error)
                .map_err(|e| format!("Failed to write summary: {}", e))?;
        }
        if rest.len() > max_extra_errors {
            writeln!(output, "  (+{} more)", rest.len() - max_extra_errors)
                .map_err(|e| format!("Failed to write summary: {}", e))?;
        }
    }

    Ok(())
}

/// Write the per-row detail of a preview as CSV
///
/// Emits one record per retained row with its source row number, the
/// seven contract fields, the validity status, and the joined failure
/// reasons. Rows appear in source order.
///
/// # Arguments
///
/// * `preview` - The preview whose rows to write
/// * `output` - Mutable reference to a writer for the CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(String)` if a write error occurred
pub fn write_rows_csv(preview: &UploadPreview, output: &mut dyn Write) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record([
            "row", "card_id", "quantity", "amount", "name", "email", "phone", "message", "status",
            "reasons",
        ])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for parsed in &preview.rows {
        let status = if parsed.is_valid() { "valid" } else { "invalid" };
        writer
            .write_record(&[
                parsed.number.to_string(),
                parsed.row.card_id.clone(),
                parsed.row.quantity.clone(),
                parsed.row.amount.clone(),
                parsed.row.name.clone(),
                parsed.row.email.clone(),
                parsed.row.phone.clone().unwrap_or_default(),
                parsed.row.message.clone().unwrap_or_default(),
                status.to_string(),
                parsed.status.reasons().join("; "),
            ])
            .map_err(|e| format!("Failed to write row record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::build_preview;

    const VALID_CSV: &str = "card_id,quantity,amount,name,email,phone,message\n\
                             1,2,100.00,Jane,jane@example.com,+233551234567,Enjoy!\n\
                             2,1,50.00,John,john@example.com,,\n";

    #[test]
    fn test_summary_for_clean_preview() {
        let preview = build_preview(VALID_CSV);
        let mut output = Vec::new();

        write_summary(&preview, DEFAULT_MAX_EXTRA_ERRORS, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "rows: 2\nvalid: 2\ninvalid: 0\ntotal value: 250.00\n"
        );
    }

    #[test]
    fn test_summary_highlights_first_error() {
        let preview = build_preview("card_id,quantity,name,email\n1,2,Jane,jane@example.com\n");
        let mut output = Vec::new();

        write_summary(&preview, DEFAULT_MAX_EXTRA_ERRORS, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("error: Missing required columns: amount\n"));
    }

    #[test]
    fn test_summary_truncates_error_list() {
        // Eight invalid rows, first shown prominently, two listed, five elided
        let mut csv = String::from("card_id,quantity,amount,name,email\n");
        for _ in 0..8 {
            csv.push_str(",1,10.00,Jane,jane@example.com\n");
        }
        let preview = build_preview(&csv);
        let mut output = Vec::new();

        write_summary(&preview, 2, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("error: Row 2: card_id is required\n"));
        assert!(text.contains("  - Row 3: card_id is required\n"));
        assert!(text.contains("  - Row 4: card_id is required\n"));
        assert!(text.contains("  (+5 more)\n"));
        assert!(!text.contains("Row 5:"));
    }

    #[test]
    fn test_rows_csv_lists_every_retained_row() {
        let csv_with_invalid = "card_id,quantity,amount,name,email\n\
                                1,2,100.00,Jane,jane@example.com\n\
                                ,1,50.00,John,john@example.com\n";
        let preview = build_preview(csv_with_invalid);
        let mut output = Vec::new();

        write_rows_csv(&preview, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "row,card_id,quantity,amount,name,email,phone,message,status,reasons"
        );
        assert_eq!(
            lines[1],
            "2,1,2,100.00,Jane,jane@example.com,,,valid,"
        );
        assert_eq!(
            lines[2],
            "3,,1,50.00,John,john@example.com,,,invalid,card_id is required"
        );
    }

    #[test]
    fn test_rows_csv_quotes_fields_with_delimiters() {
        let csv = "card_id,quantity,amount,name,email\n1,1,10.00,\"Doe, Jane\",jane@example.com\n";
        let preview = build_preview(csv);
        let mut output = Vec::new();

        write_rows_csv(&preview, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"Doe, Jane\""));
    }
}
