//! Asynchronous file loading for upload previews
//!
//! Reading the selected file's text is the only asynchronous boundary in
//! the engine: the calling flow suspends until the read completes or
//! fails, and the session state machine decides whether the result is
//! still wanted when it lands.
//!
//! # Design
//!
//! Dispatch on the file's kind happens before any I/O: Excel and
//! unsupported files are never read (their bytes are not text), they go
//! straight to their notice preview. Only CSV files are read, via
//! `tokio::fs`, and handed to the validator.

use crate::core::session::{SelectedFile, UploadSession};
use crate::core::validator::build_preview;
use crate::types::{UploadError, UploadPreview};
use std::path::Path;

/// Read the selected file's raw text
///
/// # Arguments
///
/// * `path` - Path to the file to read
///
/// # Returns
///
/// * `Ok(String)` with the file's text
/// * `Err(UploadError)` when the file is missing, unreadable, or not
///   valid UTF-8
pub async fn read_text(path: &Path) -> Result<String, UploadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|error| UploadError::from_read(path, error))
}

/// Produce the parse outcome for a selected file
///
/// Non-CSV kinds resolve immediately to their notice preview without
/// touching the filesystem. CSV files are read and validated; only the
/// read itself can fail.
pub async fn load_outcome(file: &SelectedFile) -> Result<UploadPreview, UploadError> {
    match file.kind.preview_notice() {
        Some(notice) => Ok(UploadPreview::failure(notice)),
        None => {
            let text = read_text(&file.path).await?;
            Ok(build_preview(&text))
        }
    }
}

/// Load a preview for a path, converting every failure into data
///
/// The read failure's message lands in the preview's `errors` with zero
/// counts, preserving the uniform consumption contract: callers render
/// one shape regardless of how the attempt went.
pub async fn load_preview(path: &Path) -> UploadPreview {
    let file = SelectedFile::new(path);
    match load_outcome(&file).await {
        Ok(preview) => preview,
        Err(error) => UploadPreview::failure(error.to_string()),
    }
}

/// Drive one read-then-parse pass for the session's current selection
///
/// Starts the pass, awaits the outcome, and applies it through the
/// session's staleness check. Returns `true` when the result was
/// applied; `false` when there was nothing to parse or the selection
/// changed while the pass was in flight.
pub async fn parse_selection(session: &mut UploadSession) -> bool {
    let Some(ticket) = session.begin_parse() else {
        return false;
    };
    let Some(file) = session.file().cloned() else {
        return false;
    };
    let outcome = load_outcome(&file).await.map_err(|error| error.to_string());
    session.complete(ticket, outcome)
}
