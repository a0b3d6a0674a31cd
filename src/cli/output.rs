//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats for the name listing.

use clap::ValueEnum;
use std::fmt::Write;

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One name per line.
    #[default]
    Text,
    /// A JSON array of names.
    Json,
}

/// Formats the stored config names.
///
/// Text output is empty for an empty store; JSON output is `[]`.
#[must_use]
pub fn format_names(names: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_names_text(names),
        OutputFormat::Json => format_json(&names),
    }
}

fn format_names_text(names: &[String]) -> String {
    let mut output = String::new();
    for name in names {
        let _ = writeln!(output, "{name}");
    }
    output
}

fn format_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).map_or_else(
        |e| format!("{{\"error\": \"JSON serialization failed: {e}\"}}\n"),
        |json| json + "\n",
    )
}
