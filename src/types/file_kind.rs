//! Upload file-kind classification
//!
//! The engine accepts `.csv`, `.xlsx`, and `.xls` uploads, but only CSV
//! files are parsed client-side. Excel files are passed through to the
//! upload service untouched, with an informational notice in place of a
//! preview.

use std::path::Path;

/// Informational notice shown in place of a preview for Excel uploads
///
/// Excel files are accepted but never parsed client-side; the upload
/// itself proceeds without client-side validation.
pub const EXCEL_PREVIEW_NOTICE: &str =
    "Preview/validation is available for CSV only. Upload will still work for Excel files.";

/// Kind of file selected for a bulk upload, derived from its extension
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileKind {
    /// A `.csv` file, parsed and previewed client-side
    Csv,

    /// An `.xlsx` or `.xls` file, uploaded without client-side parsing
    Excel,

    /// Any other extension (lower-cased; empty when the path has none)
    Unsupported(String),
}

impl FileKind {
    /// Classify a path by its extension, case-insensitively
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match extension.as_str() {
            "csv" => FileKind::Csv,
            "xlsx" | "xls" => FileKind::Excel,
            _ => FileKind::Unsupported(extension),
        }
    }

    /// Returns true when this kind is parsed and previewed client-side
    pub fn is_previewable(&self) -> bool {
        matches!(self, FileKind::Csv)
    }

    /// Global error message for kinds that are never parsed
    ///
    /// Returns `None` for CSV, the informational Excel notice for Excel
    /// files, and an unsupported-file-type error for everything else.
    pub fn preview_notice(&self) -> Option<String> {
        match self {
            FileKind::Csv => None,
            FileKind::Excel => Some(EXCEL_PREVIEW_NOTICE.to_string()),
            FileKind::Unsupported(extension) if extension.is_empty() => {
                Some("Unsupported file type: missing file extension".to_string())
            }
            FileKind::Unsupported(extension) => {
                Some(format!("Unsupported file type: .{}", extension))
            }
        }
    }
}
