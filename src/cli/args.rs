/// CLI argument definitions via clap derive.
use std::path::{Path, PathBuf};

use clap::Parser;
use clap::builder::{OsStringValueParser, TypedValueParser};

/// argreport — echo the invocation arguments into a small text report.
#[derive(Debug, Parser)]
#[command(
    name = "argreport",
    about = "Write the invocation arguments into a small text report",
    version,
    args_override_self = true,
    infer_long_args = true
)]
pub struct Cli {
    /// Print diagnostic information before running.
    #[arg(long)]
    pub verbose: bool,

    /// File to write the report to. Overwritten if it exists.
    /// An empty value is treated as if no path was given.
    #[arg(
        long,
        value_name = "PATH",
        value_parser = OsStringValueParser::new().map(PathBuf::from)
    )]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// The report destination, or `None` when absent or empty.
    #[must_use]
    pub fn output_path(&self) -> Option<&Path> {
        self.output
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("argreport").chain(args.iter().copied()))
    }

    #[test]
    fn test_no_flags() {
        let cli = parse(&[]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_verbose_and_output() {
        let cli = parse(&["--verbose", "--output", "out.txt"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_output_equals_form() {
        let cli = parse(&["--output=report.txt"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("report.txt")));
    }

    #[test]
    fn test_output_missing_value() {
        let err = parse(&["--output"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_unknown_flag() {
        let err = parse(&["--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_stray_positional() {
        assert!(parse(&["extra"]).is_err());
    }

    #[test]
    fn test_output_given_twice_last_wins() {
        let cli = parse(&["--output", "a.txt", "--output", "b.txt"]).unwrap();
        assert_eq!(cli.output_path(), Some(Path::new("b.txt")));
    }

    #[test]
    fn test_verbose_given_twice() {
        let cli = parse(&["--verbose", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_empty_output_is_absent() {
        let cli = parse(&["--output", ""]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::new()));
        assert!(cli.output_path().is_none());

        let cli = parse(&["--output="]).unwrap();
        assert!(cli.output_path().is_none());
    }

    #[test]
    fn test_abbreviated_long_flags() {
        let cli = parse(&["--verb", "--out", "x.txt"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.output_path(), Some(Path::new("x.txt")));
    }

    #[test]
    fn test_usage_error_exit_code() {
        let err = parse(&["--bogus"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
