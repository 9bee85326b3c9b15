use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Validate bulk gift-card recipient files before upload
#[derive(Parser, Debug)]
#[command(name = "bulk-engine")]
#[command(about = "Validate bulk gift-card recipient files before upload", long_about = None)]
pub struct CliArgs {
    /// Input recipient file path
    #[arg(value_name = "INPUT", help = "Path to the recipient file (.csv, .xlsx, or .xls)")]
    pub input_file: PathBuf,

    /// Report format to print on stdout
    #[arg(
        long = "report",
        value_name = "REPORT",
        default_value = "summary",
        help = "Report format: 'summary' for aggregate counts or 'rows' for per-row CSV detail"
    )]
    pub report: ReportFormat,

    /// Number of errors listed beneath the first one in the summary
    #[arg(
        long = "max-errors",
        value_name = "COUNT",
        help = "Errors listed beneath the first in the summary report (default: 5)"
    )]
    pub max_errors: Option<usize>,
}

/// Available report formats for preview output
#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Summary,
    Rows,
}

impl CliArgs {
    /// Resolve the summary error budget from CLI arguments
    ///
    /// Falls back to the default when the flag is absent.
    pub fn max_extra_errors(&self) -> usize {
        self.max_errors
            .unwrap_or(crate::io::report::DEFAULT_MAX_EXTRA_ERRORS)
    }
}
