//! Preview aggregate for a single upload attempt
//!
//! The [`UploadPreview`] is the read-only result shown to the user before
//! they confirm a bulk upload. It is created fresh each time a file is
//! selected and superseded, never mutated, when the selection changes.

use super::row::ParsedRow;
use rust_decimal::Decimal;
use serde::Serialize;

/// Aggregate validation result for one upload attempt
///
/// Holds every non-blank row in source order (valid and invalid alike),
/// the global error list, and the summary counts displayed to the user.
/// All malformed-input conditions are represented here as data; building
/// a preview never fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadPreview {
    /// Non-blank rows in source order, valid and invalid alike
    pub rows: Vec<ParsedRow>,

    /// Global errors, in discovery order
    ///
    /// Either a single structural error (empty file, missing required
    /// columns, unreadable or unsupported file) or one formatted entry
    /// per invalid row, prefixed with the row's 1-based source number.
    pub errors: Vec<String>,

    /// Count of non-blank rows (equals `rows.len()`)
    pub total_rows: usize,

    /// Count of rows that passed every check
    pub valid_rows: usize,

    /// Count of rows retained with at least one failure reason
    pub invalid_rows: usize,

    /// Sum of `quantity × amount` over valid rows only
    pub total_value: Decimal,
}

impl UploadPreview {
    /// Create an empty preview with zero counts
    pub fn empty() -> Self {
        UploadPreview {
            rows: Vec::new(),
            errors: Vec::new(),
            total_rows: 0,
            valid_rows: 0,
            invalid_rows: 0,
            total_value: Decimal::ZERO,
        }
    }

    /// Create a preview carrying a single global error and zero counts
    ///
    /// Used for every structural failure: empty file, missing required
    /// columns, non-CSV file kinds, and file-read failures. The rendering
    /// layer consumes the same shape regardless of how the attempt failed.
    pub fn failure(message: impl Into<String>) -> Self {
        UploadPreview {
            errors: vec![message.into()],
            ..UploadPreview::empty()
        }
    }

    /// Returns true when the preview carries no global errors
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Default for UploadPreview {
    fn default() -> Self {
        UploadPreview::empty()
    }
}
