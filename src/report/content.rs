/// Report body rendering.
///
/// Layout, one `\n`-terminated line each:
///
/// ```text
/// This is the result produced by the script!
/// Arguments:
///   <arg0>
///   <arg1>
/// ```
use std::fmt;

use super::Invocation;

/// First line of every report.
pub const HEADER: &str = "This is the result produced by the script!";

/// Line introducing the argument listing.
pub const ARGUMENTS_LABEL: &str = "Arguments:";

/// Indentation in front of each argument line.
const ARG_INDENT: &str = "  ";

/// The fixed-format report text for one invocation.
#[derive(Debug, Clone, Copy)]
pub struct ReportContent<'a> {
    invocation: &'a Invocation,
}

impl<'a> ReportContent<'a> {
    #[must_use]
    pub fn new(invocation: &'a Invocation) -> Self {
        Self { invocation }
    }
}

impl fmt::Display for ReportContent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HEADER}")?;
        writeln!(f, "{ARGUMENTS_LABEL}")?;
        for arg in self.invocation.args() {
            writeln!(f, "{ARG_INDENT}{arg}")?;
        }
        Ok(())
    }
}
