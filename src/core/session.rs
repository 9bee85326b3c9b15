//! Upload session state machine
//!
//! Models the lifecycle of one file-selection-and-preview flow as an
//! explicit state machine instead of ad hoc mutable flags. Each file
//! selection triggers exactly one read-then-parse pass; while that pass
//! is in flight the session exposes no preview, so a rendering layer can
//! show a loading indicator.
//!
//! # Cancellation
//!
//! Re-selecting a file while a previous read/parse is in flight must not
//! let the stale result win. Every selection (and every clear) bumps a
//! generation counter, and parse completions carry the generation they
//! were started under in a [`ParseTicket`]. A completion whose ticket no
//! longer matches the session's generation is discarded rather than
//! applied. There is no retry, no timeout, and no backpressure.

use crate::core::validator::submission_allowed;
use crate::types::{FileKind, UploadPreview};
use std::path::{Path, PathBuf};

/// A file the user selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// Path of the selected file
    pub path: PathBuf,

    /// Kind derived from the file's extension
    pub kind: FileKind,
}

impl SelectedFile {
    /// Classify a path and wrap it as a selection
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = FileKind::from_path(&path);
        SelectedFile { path, kind }
    }
}

/// Proof that a parse pass was started under a specific generation
///
/// Returned by [`UploadSession::begin_parse`] and required by
/// [`UploadSession::complete`]; a ticket from a superseded selection
/// can no longer apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTicket {
    generation: u64,
}

/// States of the upload flow
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// No file selected
    Idle,

    /// A file is selected; its parse pass has not started
    Selected {
        /// The selected file
        file: SelectedFile,
    },

    /// The read-then-parse pass for the selection is in flight
    Parsing {
        /// The selected file
        file: SelectedFile,
    },

    /// The pass completed and produced a preview
    Previewed {
        /// The selected file
        file: SelectedFile,
        /// The preview for that file
        preview: UploadPreview,
    },

    /// The pass failed before a preview could be built
    Failed {
        /// The selected file
        file: SelectedFile,
        /// The underlying failure's message
        message: String,
    },
}

/// State machine for one upload UI session
///
/// The current preview has exactly one writer (the completion of the
/// most recent read-then-parse pass) and one reader (the rendering
/// layer); the generation counter enforces the single-writer rule when
/// selections overlap in time.
#[derive(Debug)]
pub struct UploadSession {
    state: SessionState,
    generation: u64,
}

impl UploadSession {
    /// Create a session with no file selected
    pub fn new() -> Self {
        UploadSession {
            state: SessionState::Idle,
            generation: 0,
        }
    }

    /// Current state of the session
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The currently selected file, in any state but [`SessionState::Idle`]
    pub fn file(&self) -> Option<&SelectedFile> {
        match &self.state {
            SessionState::Idle => None,
            SessionState::Selected { file }
            | SessionState::Parsing { file }
            | SessionState::Previewed { file, .. }
            | SessionState::Failed { file, .. } => Some(file),
        }
    }

    /// Select a file, superseding any previous selection
    ///
    /// Bumps the generation so that an in-flight parse for the previous
    /// selection becomes stale and its result is discarded on arrival.
    pub fn select(&mut self, path: &Path) {
        self.generation += 1;
        self.state = SessionState::Selected {
            file: SelectedFile::new(path),
        };
    }

    /// Clear the selection, returning to [`SessionState::Idle`]
    ///
    /// Also bumps the generation, so in-flight results are discarded.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.state = SessionState::Idle;
    }

    /// Start the read-then-parse pass for the current selection
    ///
    /// Returns a ticket tagged with the current generation, or `None`
    /// when no selection is waiting to be parsed. Each selection gets
    /// exactly one pass.
    pub fn begin_parse(&mut self) -> Option<ParseTicket> {
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Selected { file } => {
                self.state = SessionState::Parsing { file };
                Some(ParseTicket {
                    generation: self.generation,
                })
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Apply a parse completion, unless it is stale
    ///
    /// An `Ok` outcome moves the session to [`SessionState::Previewed`],
    /// an `Err` to [`SessionState::Failed`]. Returns `false` when the
    /// ticket's generation is no longer current (the selection changed
    /// or was cleared while the pass was in flight) and the outcome was
    /// discarded.
    pub fn complete(&mut self, ticket: ParseTicket, outcome: Result<UploadPreview, String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        match std::mem::replace(&mut self.state, SessionState::Idle) {
            SessionState::Parsing { file } => {
                self.state = match outcome {
                    Ok(preview) => SessionState::Previewed { file, preview },
                    Err(message) => SessionState::Failed { file, message },
                };
                true
            }
            other => {
                self.state = other;
                false
            }
        }
    }

    /// Returns true while a parse pass is in flight
    pub fn is_parsing(&self) -> bool {
        matches!(self.state, SessionState::Parsing { .. })
    }

    /// The current preview, available only in [`SessionState::Previewed`]
    pub fn preview(&self) -> Option<&UploadPreview> {
        match &self.state {
            SessionState::Previewed { preview, .. } => Some(preview),
            _ => None,
        }
    }

    /// The failure message, available only in [`SessionState::Failed`]
    pub fn failure_message(&self) -> Option<&str> {
        match &self.state {
            SessionState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Whether the submission gate is open
    ///
    /// True only in [`SessionState::Previewed`] with no invalid rows and,
    /// for previewable files, no global errors. The Excel notice leaves
    /// the gate open: those uploads proceed without client-side
    /// validation.
    pub fn can_submit(&self) -> bool {
        match &self.state {
            SessionState::Previewed { file, preview } => submission_allowed(&file.kind, preview),
            _ => false,
        }
    }
}

impl Default for UploadSession {
    fn default() -> Self {
        UploadSession::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::build_preview;
    use crate::types::EXCEL_PREVIEW_NOTICE;
    use std::path::Path;

    const VALID_CSV: &str =
        "card_id,quantity,amount,name,email\n1,2,100.00,Jane,jane@example.com\n";
    const INVALID_CSV: &str =
        "card_id,quantity,amount,name,email\n,2,100.00,Jane,jane@example.com\n";

    #[test]
    fn test_new_session_is_idle() {
        let session = UploadSession::new();
        assert_eq!(*session.state(), SessionState::Idle);
        assert!(session.file().is_none());
        assert!(session.preview().is_none());
        assert!(!session.can_submit());
    }

    #[test]
    fn test_select_then_parse_then_preview() {
        let mut session = UploadSession::new();
        session.select(Path::new("recipients.csv"));
        assert!(matches!(session.state(), SessionState::Selected { .. }));

        let ticket = session.begin_parse().unwrap();
        assert!(session.is_parsing());
        assert!(session.preview().is_none());

        assert!(session.complete(ticket, Ok(build_preview(VALID_CSV))));
        assert!(matches!(session.state(), SessionState::Previewed { .. }));
        assert_eq!(session.preview().unwrap().valid_rows, 1);
        assert!(session.can_submit());
    }

    #[test]
    fn test_begin_parse_requires_a_waiting_selection() {
        let mut session = UploadSession::new();
        assert!(session.begin_parse().is_none());

        session.select(Path::new("recipients.csv"));
        let ticket = session.begin_parse().unwrap();
        // The pass for this selection already started
        assert!(session.begin_parse().is_none());

        session.complete(ticket, Ok(build_preview(VALID_CSV)));
        // Previewed selections do not get a second pass
        assert!(session.begin_parse().is_none());
    }

    #[test]
    fn test_reselect_makes_inflight_result_stale() {
        let mut session = UploadSession::new();
        session.select(Path::new("first.csv"));
        let stale_ticket = session.begin_parse().unwrap();

        // The user picks a different file before the first parse lands
        session.select(Path::new("second.csv"));
        let fresh_ticket = session.begin_parse().unwrap();

        // The first file's result arrives late and must be discarded
        assert!(!session.complete(stale_ticket, Ok(build_preview(INVALID_CSV))));
        assert!(session.is_parsing());

        assert!(session.complete(fresh_ticket, Ok(build_preview(VALID_CSV))));
        assert_eq!(session.preview().unwrap().valid_rows, 1);
        assert_eq!(
            session.file().unwrap().path,
            Path::new("second.csv").to_path_buf()
        );
    }

    #[test]
    fn test_clear_discards_inflight_result() {
        let mut session = UploadSession::new();
        session.select(Path::new("recipients.csv"));
        let ticket = session.begin_parse().unwrap();

        session.clear();
        assert!(!session.complete(ticket, Ok(build_preview(VALID_CSV))));
        assert_eq!(*session.state(), SessionState::Idle);
    }

    #[test]
    fn test_failed_completion_exposes_message() {
        let mut session = UploadSession::new();
        session.select(Path::new("recipients.csv"));
        let ticket = session.begin_parse().unwrap();

        assert!(session.complete(ticket, Err("I/O error: device gone".to_string())));
        assert!(matches!(session.state(), SessionState::Failed { .. }));
        assert_eq!(session.failure_message(), Some("I/O error: device gone"));
        assert!(!session.can_submit());
    }

    #[test]
    fn test_invalid_rows_close_the_gate() {
        let mut session = UploadSession::new();
        session.select(Path::new("recipients.csv"));
        let ticket = session.begin_parse().unwrap();
        session.complete(ticket, Ok(build_preview(INVALID_CSV)));

        assert!(session.preview().is_some());
        assert!(!session.can_submit());
    }

    #[test]
    fn test_excel_notice_leaves_the_gate_open() {
        let mut session = UploadSession::new();
        session.select(Path::new("recipients.xlsx"));
        let ticket = session.begin_parse().unwrap();
        session.complete(ticket, Ok(UploadPreview::failure(EXCEL_PREVIEW_NOTICE)));

        assert_eq!(session.preview().unwrap().errors.len(), 1);
        assert!(session.can_submit());
    }
}
