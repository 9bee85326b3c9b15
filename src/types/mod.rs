//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `row`: Recipient row types and validity outcomes
//! - `preview`: The aggregate preview shown before upload confirmation
//! - `file_kind`: Upload file-kind classification
//! - `error`: Error types for the bulk upload engine

pub mod error;
pub mod file_kind;
pub mod preview;
pub mod row;

pub use error::UploadError;
pub use file_kind::{FileKind, EXCEL_PREVIEW_NOTICE};
pub use preview::UploadPreview;
pub use row::{BulkRow, ParsedRow, RowStatus};
