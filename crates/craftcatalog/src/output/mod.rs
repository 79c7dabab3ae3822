//! Output formatting functions.

pub mod pretty;

use serde::Serialize;

use crate::cli::OutputFormat;

/// Renders a command result in the requested format.
///
/// JSON output is pretty-printed so it stays readable when piped to a file;
/// `pretty` builds the human-readable form.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    pretty: impl FnOnce(&T) -> String,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(value),
        OutputFormat::Pretty => Ok(pretty(value)),
    }
}
