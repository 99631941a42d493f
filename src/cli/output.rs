/// Human-readable status lines on stdout and error reporting on stderr.
use std::error::Error as _;
use std::io::{self, Write};
use std::path::Path;

use crate::report::{Invocation, ReportError};

/// Sentinel printed in place of an absent output path.
pub const NO_OUTPUT_SENTINEL: &str = "None";

/// Write the `--verbose` banner: mode notice, configured destination, raw argv.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_verbose_banner<W: Write>(
    out: &mut W,
    output: Option<&Path>,
    invocation: &Invocation,
) -> io::Result<()> {
    writeln!(out, "Verbose mode enabled")?;
    match output {
        Some(path) => writeln!(out, "Output file: {}", path.display())?,
        None => writeln!(out, "Output file: {NO_OUTPUT_SENTINEL}")?,
    }
    writeln!(out, "Received argv: {}", render_argv(invocation))?;
    writeln!(out)
}

/// Confirm a successful report write.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_confirmation<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Successfully wrote result to {}", path.display())
}

/// Warn that no `--output` was given. Not an error.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_missing_output_warning<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "No output file specified.")
}

/// Write a runner error and its cause chain to stderr.
pub fn write_error(err: &ReportError) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    let _ = write_error_to(&mut out, err);
}

fn write_error_to<W: Write>(out: &mut W, err: &ReportError) -> io::Result<()> {
    writeln!(out, "Error: {err}")?;
    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(out, "  Caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}

// JSON string literals joined as a list, e.g. ["argreport", "--verbose"].
// Double-quoted so embedded quotes and control characters stay unambiguous;
// see "Verbose argv line" in DESIGN.md.
fn render_argv(invocation: &Invocation) -> String {
    let items: Vec<String> = invocation
        .args()
        .iter()
        .map(|arg| serde_json::to_string(arg).unwrap_or_else(|_| format!("{arg:?}")))
        .collect();
    format!("[{}]", items.join(", "))
}
