/// The command line exactly as the process received it.

/// Ordered invocation arguments, program name first. Immutable once captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    /// Capture the current process arguments.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily so the report
    /// stays valid UTF-8.
    #[must_use]
    pub fn capture() -> Self {
        Self::from_args(
            std::env::args_os().map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Build from an explicit argument list.
    #[must_use]
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            args: args.into_iter().collect(),
        }
    }

    /// All arguments, program name included.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}
