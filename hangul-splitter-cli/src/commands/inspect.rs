//! Inspect command implementation

use anyhow::Result;
use clap::Args;
use hangul_splitter_core::{decompose_syllable, expand_compound, HangulBlock};
use serde::Serialize;
use std::io::{self, Write};

/// Arguments for the inspect command
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Text to inspect
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Per-character breakdown of a piece of text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharReport {
    pub character: char,
    pub codepoint: String,
    /// Hangul block the character belongs to
    pub block: Option<&'static str>,
    /// Letters of a syllable, compounds kept
    pub letters: Option<String>,
    /// Letters of a syllable with compounds expanded
    pub atomic_letters: Option<String>,
}

impl CharReport {
    pub fn new(ch: char) -> Self {
        let syllable = decompose_syllable(ch);
        let letters = syllable.map(|s| s.letters().iter().collect::<String>());
        let atomic_letters = syllable.map(|s| {
            s.letters()
                .iter()
                .flat_map(|&letter| match expand_compound(letter) {
                    Some(parts) => parts.to_vec(),
                    None => vec![letter],
                })
                .collect::<String>()
        });

        Self {
            character: ch,
            codepoint: format!("U+{:04X}", ch as u32),
            block: HangulBlock::of(ch).map(|block| block.name()),
            letters,
            atomic_letters,
        }
    }
}

/// Build the report for every character of the text
pub fn inspect_text(text: &str) -> Vec<CharReport> {
    text.chars().map(CharReport::new).collect()
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let reports = inspect_text(&self.text);
        let mut out = io::stdout().lock();

        if self.json {
            serde_json::to_writer_pretty(&mut out, &reports)?;
            writeln!(out)?;
            return Ok(());
        }

        for report in &reports {
            write!(
                out,
                "{}\t{}\t{}",
                report.character.escape_debug(),
                report.codepoint,
                report.block.unwrap_or("-")
            )?;
            match (&report.letters, &report.atomic_letters) {
                (Some(letters), Some(atomic)) if letters != atomic => {
                    writeln!(out, "\t{letters} ({atomic})")?
                }
                (Some(letters), _) => writeln!(out, "\t{letters}")?,
                _ => writeln!(out)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllable_report() {
        let report = CharReport::new('값');
        assert_eq!(report.codepoint, "U+AC12");
        assert_eq!(report.block, Some(HangulBlock::Syllables.name()));
        assert_eq!(report.letters.as_deref(), Some("ㄱㅏㅄ"));
        assert_eq!(report.atomic_letters.as_deref(), Some("ㄱㅏㅂㅅ"));
    }

    #[test]
    fn test_non_hangul_report() {
        let report = CharReport::new('A');
        assert_eq!(report.codepoint, "U+0041");
        assert_eq!(report.block, None);
        assert_eq!(report.letters, None);
        assert_eq!(report.atomic_letters, None);
    }

    #[test]
    fn test_compatibility_jamo_has_block_but_no_letters() {
        let report = CharReport::new('ㄲ');
        assert_eq!(report.block, Some(HangulBlock::CompatibilityJamo.name()));
        assert_eq!(report.letters, None);
    }

    #[test]
    fn test_inspect_text_covers_every_char() {
        let reports = inspect_text("가 b");
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].letters.as_deref(), Some("ㄱㅏ"));
        assert_eq!(reports[1].codepoint, "U+0020");
    }
}
