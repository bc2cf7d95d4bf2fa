//! Input sources for the text commands

use anyhow::Result;
use clap::Args;
use std::fmt;
use std::io;
use std::path::PathBuf;

use super::{resolve_patterns, FileReader};

/// Where a piece of input text came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// File resolved from a path or glob pattern
    File(PathBuf),
    /// Text given on the command line (1-based position)
    Inline(usize),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Get the display name for the input source
    pub fn display_name(&self) -> String {
        match self {
            InputSource::File(path) => path.display().to_string(),
            InputSource::Inline(index) => format!("<text {index}>"),
            InputSource::Stdin => "<stdin>".to_string(),
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Input text together with its source
#[derive(Debug, Clone)]
pub struct SourceText {
    pub source: InputSource,
    pub text: String,
}

/// Input selection shared by the text commands
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Text to process directly (may be repeated)
    #[arg(short, long, value_name = "TEXT")]
    pub text: Vec<String>,
}

impl InputArgs {
    /// Check whether standard input will be read
    pub fn reads_stdin(&self) -> bool {
        self.input.is_empty() && self.text.is_empty()
    }

    /// Read every selected source
    ///
    /// Files come first (sorted, deduplicated), followed by inline texts in
    /// the order given. Standard input is read only when nothing else was
    /// selected.
    pub fn collect(&self) -> Result<Vec<SourceText>> {
        if self.reads_stdin() {
            log::info!("Reading from standard input");
            let text = FileReader::read_from(io::stdin().lock())?;
            return Ok(vec![SourceText {
                source: InputSource::Stdin,
                text,
            }]);
        }

        let mut sources = Vec::new();

        if !self.input.is_empty() {
            for path in resolve_patterns(&self.input)? {
                log::debug!(
                    "Reading {} ({} bytes)",
                    path.display(),
                    FileReader::file_size(&path)?
                );
                let text = FileReader::read_text(&path)?;
                sources.push(SourceText {
                    source: InputSource::File(path),
                    text,
                });
            }
        }

        for (index, text) in self.text.iter().enumerate() {
            sources.push(SourceText {
                source: InputSource::Inline(index + 1),
                text: text.clone(),
            });
        }

        log::info!("Collected {} input source(s)", sources.len());
        Ok(sources)
    }
}
