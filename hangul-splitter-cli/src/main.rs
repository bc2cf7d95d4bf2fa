//! Command-line entry point for the Hangul block splitter

use anyhow::Result;
use clap::Parser;
use hangul_splitter_cli::commands::Commands;

/// Split Hangul syllable blocks into their Jamo letters
#[derive(Debug, Parser)]
#[command(name = "hangul-split", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
