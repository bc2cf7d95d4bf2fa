//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use hangul_splitter_core::HangulBlock;

use crate::output::OutputFormat;

pub mod common;
pub mod filter;
pub mod generate_config;
pub mod inspect;
pub mod split;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split Hangul syllable blocks into letters
    Split(split::SplitArgs),

    /// Keep only Hangul characters (and whitespace)
    Filter(filter::FilterArgs),

    /// Show the code point, block and letters of each character
    Inspect(inspect::InspectArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List the Unicode blocks treated as Hangul
    Blocks,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Filter(args) => args.execute(),
            Commands::Inspect(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by the list command
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => {
                let mut lines = vec!["Available output formats:".to_string()];
                lines.extend(OutputFormat::all().iter().map(|(format, description)| {
                    format!("  {:<10} - {}", format.as_str(), description)
                }));
                lines
            }
            ListCommands::Blocks => {
                let mut lines = vec!["Hangul Unicode blocks:".to_string()];
                lines.extend(HangulBlock::all().map(|block| {
                    let range = block.range();
                    format!(
                        "  U+{:04X}..U+{:04X}  {}",
                        range.start(),
                        range.end(),
                        block.name()
                    )
                }));
                lines
            }
        }
    }
}
