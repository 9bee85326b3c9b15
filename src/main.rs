//! Bulk Gift-Card Upload Engine CLI
//!
//! Command-line interface for validating bulk recipient files before upload.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- recipients.csv
//! cargo run -- --report rows recipients.csv
//! cargo run -- --report summary --max-errors 10 recipients.csv
//! ```
//!
//! The program classifies the input file by extension, parses and
//! validates CSV files, and prints the requested report to stdout.
//! Excel files (`.xlsx`, `.xls`) are accepted but not parsed; their
//! report carries the informational preview notice.
//!
//! # Exit Codes
//!
//! - 0: Submission gate open (no invalid rows, no blocking errors)
//! - 1: Gate closed (invalid rows, structural errors, unreadable file)
//!   or the report could not be written

use giftcard_bulk_engine::cli::{self, ReportFormat};
use giftcard_bulk_engine::core::validator::submission_allowed;
use giftcard_bulk_engine::io::{load_preview, report};
use giftcard_bulk_engine::types::FileKind;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // The file read is the engine's one async boundary; the CLI drives
    // it on a current-thread runtime to match the single-threaded,
    // cooperative model of the upload flow
    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create runtime: {}", e);
            process::exit(1);
        }
    };

    let preview = runtime.block_on(load_preview(&args.input_file));

    // Print the requested report to stdout
    let mut output = std::io::stdout();
    let written = match args.report {
        ReportFormat::Summary => {
            report::write_summary(&preview, args.max_extra_errors(), &mut output)
        }
        ReportFormat::Rows => report::write_rows_csv(&preview, &mut output),
    };
    if let Err(e) = written {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Exit code mirrors the submission gate
    let kind = FileKind::from_path(&args.input_file);
    if !submission_allowed(&kind, &preview) {
        process::exit(1);
    }
}
