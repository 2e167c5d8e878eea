//! Output rendering for analysis results

pub mod formatter;

pub use formatter::{ConsoleFormatter, JsonFormatter, OutputFormatter};
