//! Output formatting for assessment results

pub mod console;
pub mod formatter;
pub mod json;
pub mod listing;

use maturity_domain::OutputFormat;

/// Formatter for the requested output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn formatter::OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(console::ConsoleFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}
