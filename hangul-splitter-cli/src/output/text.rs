//! Plain text output formatter

use super::{OutputFormatter, OutputRecord};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs the processed text of each source
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &OutputRecord) -> Result<()> {
        write!(self.writer, "{}", record.output)?;
        if !record.output.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
