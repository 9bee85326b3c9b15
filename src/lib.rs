//! Bulk Gift-Card Upload Engine Library
//! # Overview
//!
//! This library implements the client-side validation gate for bulk
//! gift-card recipient uploads: CSV text is tokenized, validated against
//! the recipient column contract, and aggregated into a preview the user
//! confirms before the file is handed to the upload service.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (BulkRow, UploadPreview, FileKind, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Validation logic components:
//!   - [`core::tokenizer`] - Character-scan CSV tokenizer
//!   - [`core::validator`] - Row validation and preview aggregation
//!   - [`core::session`] - Upload session state machine with stale-result
//!     cancellation
//! - [`io`] - File loading and report output
//!
//! # Upload Flow
//!
//! Raw text flows through the tokenizer into a grid of cells, the
//! validator maps the grid to typed rows against the required-column
//! contract, and the resulting preview carries every retained row, the
//! error list, and the aggregate counts. Submission stays blocked while
//! any row is invalid or a structural error is present; Excel files skip
//! client-side parsing entirely and upload as-is.
//!
//! # Failure Semantics
//!
//! Building a preview never fails: empty files, missing columns, bad
//! rows, unsupported file kinds, and read failures all become data in
//! the preview's error list, so the rendering layer consumes one shape.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use self::core::{
    build_preview, submission_allowed, tokenize, ParseTicket, SelectedFile, SessionState,
    UploadSession, REQUIRED_COLUMNS,
};
pub use io::{load_outcome, load_preview, parse_selection, read_text};
pub use types::{
    BulkRow, FileKind, ParsedRow, RowStatus, UploadError, UploadPreview, EXCEL_PREVIEW_NOTICE,
};
