//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        match CliConfig::load(&self.config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!(
                    "  split.split_complex_letters: {}",
                    config.split.split_complex_letters
                );
                println!(
                    "  split.insert_spaces_between_letters: {}",
                    config.split.insert_spaces_between_letters
                );
                println!("  filter.enabled: {}", config.filter.enabled);
                println!(
                    "  filter.include_whitespace: {}",
                    config.filter.include_whitespace
                );
                println!("  output.default_format: {}", config.output.default_format);
                println!("  output.pretty_json: {}", config.output.pretty_json);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {:#}", e))
            }
        }
    }
}
