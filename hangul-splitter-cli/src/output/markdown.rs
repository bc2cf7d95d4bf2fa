//! Markdown output formatter

use super::{OutputFormatter, OutputRecord};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs records as a numbered markdown list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    record_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &OutputRecord) -> Result<()> {
        self.record_count += 1;
        let marker = format!("{}. ", self.record_count);
        let mut lines = record.output.trim_end().lines();

        writeln!(
            self.writer,
            "{marker}**{}**: {}",
            record.source,
            lines.next().unwrap_or_default()
        )?;

        // Continuation lines stay inside the list item
        let indent = " ".repeat(marker.len());
        for line in lines {
            if line.trim().is_empty() {
                writeln!(self.writer)?;
            } else {
                writeln!(self.writer, "{indent}{line}")?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sources: {}*", self.record_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
