/// Report domain layer: captured arguments, content rendering, file output.
pub mod content;
pub mod errors;
pub mod invocation;
pub mod writer;

pub use content::ReportContent;
pub use errors::ReportError;
pub use invocation::Invocation;
pub use writer::write_report;
