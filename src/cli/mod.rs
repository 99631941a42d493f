/// CLI layer: argument parsing, status output, logging setup.
pub mod args;
pub mod logging;
pub mod output;

pub use args::Cli;
pub use logging::init_logging;
pub use output::write_error;
