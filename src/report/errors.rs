/// Errors from the report layer.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing the report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The output file could not be created, written, or flushed.
    #[error("Failed to write report to '{}'", path.display())]
    Write {
        /// Destination that was being written.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Status text could not be written to stdout (e.g. closed pipe).
    #[error("Failed to write to standard output")]
    Stdout(#[source] std::io::Error),
}

/// Exit code mapping for `ReportError` variants.
impl ReportError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Write { .. } | Self::Stdout(_) => 1,
        }
    }
}
