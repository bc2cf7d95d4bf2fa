//! Split command implementation

use anyhow::Result;
use clap::Args;
use hangul_splitter_core::has_hangul_content;
use std::path::PathBuf;

use super::common::{ExecutionArgs, OutputArgs};
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::InputArgs;

/// Arguments for the split command
#[derive(Debug, Clone, Default, Args)]
pub struct SplitArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Expand compound letters (ㄲ → ㄱㄱ, ㅘ → ㅗㅏ, ㄳ → ㄱㅅ)
    #[arg(long, overrides_with = "no_split_complex")]
    pub split_complex: bool,

    /// Keep compound letters as single letters
    #[arg(long, overrides_with = "split_complex")]
    pub no_split_complex: bool,

    /// Insert a space between adjacent letters
    #[arg(short, long, overrides_with = "no_spaces")]
    pub spaces: bool,

    /// Do not insert spaces between letters
    #[arg(long, overrides_with = "spaces")]
    pub no_spaces: bool,

    /// Drop every character outside the Hangul blocks before splitting
    #[arg(long)]
    pub keep_only_hangul: bool,

    /// Also drop whitespace when keeping only Hangul (from the flag or the config file)
    #[arg(long)]
    pub drop_whitespace: bool,

    /// Fail when a source holds no Hangul at all
    #[arg(long)]
    pub require_hangul: bool,

    #[command(flatten)]
    pub execution: ExecutionArgs,
}

fn toggle(on: bool, off: bool) -> Option<bool> {
    if on {
        Some(true)
    } else if off {
        Some(false)
    } else {
        None
    }
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        crate::init_logging(self.execution.verbose, self.execution.quiet);

        let config = self.resolve_config()?;
        log::info!(
            "Splitting with split_complex_letters={}, insert_spaces_between_letters={}",
            config.split.split_complex_letters,
            config.split.insert_spaces_between_letters
        );

        let sources = self.input.collect()?;
        let splitter = config.splitter();

        let records = self.execution.process_sources(&sources, |source| {
            if self.require_hangul && !has_hangul_content(&source.text) {
                return Err(CliError::NoHangulContent(source.source.display_name()).into());
            }
            Ok(splitter.apply(&source.text))
        })?;

        self.output.write_records(&records, &config.output)
    }

    /// Merge the configuration file with command-line flags
    ///
    /// Flags win over the file, which wins over the built-in defaults.
    pub fn resolve_config(&self) -> Result<CliConfig> {
        let mut config = CliConfig::load_or_default(self.config.as_deref())?;

        if let Some(enabled) = toggle(self.split_complex, self.no_split_complex) {
            config.split.split_complex_letters = enabled;
        }
        if let Some(enabled) = toggle(self.spaces, self.no_spaces) {
            config.split.insert_spaces_between_letters = enabled;
        }
        if self.keep_only_hangul {
            config.filter.enabled = true;
        }
        if self.drop_whitespace {
            if !config.filter.enabled {
                return Err(CliError::ConfigError(
                    "--drop-whitespace needs --keep-only-hangul or [filter] enabled = true"
                        .to_string(),
                )
                .into());
            }
            config.filter.include_whitespace = false;
        }

        log::debug!("Effective configuration: {config:?}");
        Ok(config)
    }
}
