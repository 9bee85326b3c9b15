//! I/O module
//!
//! Handles file loading and report output.
//!
//! # Components
//!
//! - `reader` - Asynchronous file loading with kind dispatch and the
//!   session parse driver
//! - `report` - Summary and per-row CSV report writers

pub mod reader;
pub mod report;

pub use reader::{load_outcome, load_preview, parse_selection, read_text};
pub use report::{write_rows_csv, write_summary, DEFAULT_MAX_EXTRA_ERRORS};
