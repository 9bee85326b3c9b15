//! Row-related types for the bulk upload engine
//!
//! This module defines the recipient line-item types produced by the
//! validator: the raw field set extracted from a CSV row, the validity
//! outcome for that row, and the pairing of the two with the row's
//! source position.

use serde::Serialize;

/// One intended gift-card-recipient line item
///
/// Field values are kept exactly as extracted from the source file
/// (trimmed), valid and invalid rows alike, so the preview can display
/// every row the user uploaded without losing any input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkRow {
    /// Identifier of the card or experience being purchased
    pub card_id: String,

    /// Number of cards for this recipient, as written in the source file
    ///
    /// Validated to parse to a strictly positive number; kept as a string
    /// so invalid values can still be shown back to the user.
    pub quantity: String,

    /// Monetary value per card, as written in the source file
    pub amount: String,

    /// Recipient display name
    pub name: String,

    /// Recipient email address
    pub email: String,

    /// Optional recipient phone number
    ///
    /// `None` when the column is absent or the cell is blank after trimming.
    pub phone: Option<String>,

    /// Optional gift message
    ///
    /// `None` when the column is absent or the cell is blank after trimming.
    pub message: Option<String>,
}

impl BulkRow {
    /// Check whether every field of this row is blank
    ///
    /// Rows whose every field is blank are skipped by the validator:
    /// they contribute to neither the row list, the counts, nor the
    /// error list. This catches rows that consist only of delimiters,
    /// which survive the tokenizer's own blank-line suppression.
    pub fn is_blank(&self) -> bool {
        self.card_id.is_empty()
            && self.quantity.is_empty()
            && self.amount.is_empty()
            && self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_none()
            && self.message.is_none()
    }
}

/// Validity outcome for a single row
///
/// Invalid rows carry the human-readable reasons they failed, in the
/// order the checks ran, so the preview can show row-by-row diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "status")]
pub enum RowStatus {
    /// All required-field and numeric-positivity checks passed
    Valid,

    /// One or more checks failed; the row is retained for display
    Invalid {
        /// Human-readable failure reasons, one per failed check
        reasons: Vec<String>,
    },
}

impl RowStatus {
    /// Returns true for [`RowStatus::Valid`]
    pub fn is_valid(&self) -> bool {
        matches!(self, RowStatus::Valid)
    }

    /// Failure reasons for this row (empty for valid rows)
    pub fn reasons(&self) -> &[String] {
        match self {
            RowStatus::Valid => &[],
            RowStatus::Invalid { reasons } => reasons,
        }
    }
}

/// A parsed row together with its source position and validity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedRow {
    /// 1-based source row number, counting the header as row 1
    ///
    /// This matches what a user sees when opening the same file in a
    /// spreadsheet tool, so the first data row is number 2.
    pub number: usize,

    /// The extracted field values
    pub row: BulkRow,

    /// Whether the row passed validation
    pub status: RowStatus,
}

impl ParsedRow {
    /// Returns true if this row passed validation
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn blank_row() -> BulkRow {
        BulkRow {
            card_id: String::new(),
            quantity: String::new(),
            amount: String::new(),
            name: String::new(),
            email: String::new(),
            phone: None,
            message: None,
        }
    }

    #[test]
    fn test_blank_row_is_blank() {
        assert!(blank_row().is_blank());
    }

    #[rstest]
    #[case::card_id(BulkRow { card_id: "1".to_string(), ..blank_row() })]
    #[case::quantity(BulkRow { quantity: "2".to_string(), ..blank_row() })]
    #[case::amount(BulkRow { amount: "50".to_string(), ..blank_row() })]
    #[case::name(BulkRow { name: "Jane".to_string(), ..blank_row() })]
    #[case::email(BulkRow { email: "jane@example.com".to_string(), ..blank_row() })]
    #[case::phone(BulkRow { phone: Some("+233551234567".to_string()), ..blank_row() })]
    #[case::message(BulkRow { message: Some("hi".to_string()), ..blank_row() })]
    fn test_row_with_any_field_is_not_blank(#[case] row: BulkRow) {
        assert!(!row.is_blank());
    }

    #[test]
    fn test_row_status_accessors() {
        let valid = RowStatus::Valid;
        assert!(valid.is_valid());
        assert!(valid.reasons().is_empty());

        let invalid = RowStatus::Invalid {
            reasons: vec!["email looks invalid".to_string()],
        };
        assert!(!invalid.is_valid());
        assert_eq!(invalid.reasons(), ["email looks invalid".to_string()]);
    }
}
