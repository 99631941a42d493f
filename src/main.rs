#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! argreport — echo the invocation arguments into a small text report.

mod cli;
mod report;
mod runner;

use clap::Parser;

use cli::{Cli, init_logging, write_error};
use report::Invocation;

fn main() {
    let cli = Cli::parse();
    let invocation = Invocation::capture();

    init_logging(cli.verbose);
    tracing::debug!(verbose = cli.verbose, output = ?cli.output, "options parsed");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = runner::run(&cli, &invocation, &mut out) {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}
