/// Scoped report file output.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::{Invocation, ReportContent, ReportError};

/// Create or truncate `path` and write the report for `invocation` into it.
///
/// The file handle lives only inside this call and is closed on every return
/// path. The buffer is flushed explicitly so late write failures are reported
/// rather than lost on drop.
///
/// # Errors
///
/// Returns `ReportError::Write` if the file cannot be created, written, or
/// flushed.
pub fn write_report(path: &Path, invocation: &Invocation) -> Result<(), ReportError> {
    let wrap = |source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut out = BufWriter::new(file);
    write!(out, "{}", ReportContent::new(invocation)).map_err(wrap)?;
    out.flush().map_err(wrap)?;

    tracing::debug!(path = %path.display(), args = invocation.args().len(), "report written");
    Ok(())
}
