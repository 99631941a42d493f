/// Command runner: verbose banner, then report write or missing-output warning.
use std::io::Write;

use crate::cli::Cli;
use crate::cli::output::{write_confirmation, write_missing_output_warning, write_verbose_banner};
use crate::report::{Invocation, ReportError, write_report};

/// Execute parsed options against the captured invocation, printing status to `out`.
///
/// No file is touched when `cli.output_path()` is `None`.
///
/// # Errors
///
/// Returns `ReportError::Write` if the report file cannot be written, or
/// `ReportError::Stdout` if status text cannot be printed.
pub fn run<W: Write>(cli: &Cli, invocation: &Invocation, out: &mut W) -> Result<(), ReportError> {
    if cli.verbose {
        write_verbose_banner(out, cli.output_path(), invocation).map_err(ReportError::Stdout)?;
    }

    match cli.output_path() {
        Some(path) => {
            write_report(path, invocation)?;
            write_confirmation(out, path).map_err(ReportError::Stdout)?;
        }
        None => {
            tracing::info!("no --output given, skipping report");
            write_missing_output_warning(out).map_err(ReportError::Stdout)?;
        }
    }

    out.flush().map_err(ReportError::Stdout)
}
