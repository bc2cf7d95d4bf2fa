//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for a single source
    fn format_record(&mut self, record: &OutputRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Result of processing one input source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRecord {
    /// Where the input came from
    pub source: String,
    /// Text as read from the source
    pub input: String,
    /// Processed text
    pub output: String,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Processed text only, one source after another
    Text,
    /// JSON array of records with source and input
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// All formats with their descriptions
    pub fn all() -> [(OutputFormat, &'static str); 3] {
        [
            (OutputFormat::Text, "Processed text only, one source after another"),
            (OutputFormat::Json, "JSON array of records with source and input"),
            (OutputFormat::Markdown, "Markdown numbered list"),
        ]
    }

    /// Format name as used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Create a formatter for the given format
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    pretty_json: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_names() {
        for (format, _) in OutputFormat::all() {
            assert_eq!(format.to_string(), format.as_str());
        }
        assert_eq!(OutputFormat::Markdown.as_str(), "markdown");
    }

    #[test]
    fn test_format_value_enum() {
        use clap::ValueEnum;

        let parsed = OutputFormat::from_str("JSON", true).unwrap();
        assert_eq!(parsed, OutputFormat::Json);
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }
}
