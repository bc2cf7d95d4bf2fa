//! Filter command implementation

use anyhow::Result;
use clap::Args;
use hangul_splitter_core::keep_only_hangul;

use super::common::{ExecutionArgs, OutputArgs};
use crate::config::OutputConfig;
use crate::input::InputArgs;

/// Arguments for the filter command
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Drop whitespace as well as non-Hangul characters
    #[arg(long)]
    pub drop_whitespace: bool,

    #[command(flatten)]
    pub execution: ExecutionArgs,
}

impl FilterArgs {
    /// Execute the filter command
    pub fn execute(&self) -> Result<()> {
        crate::init_logging(self.execution.verbose, self.execution.quiet);

        let include_whitespace = !self.drop_whitespace;
        let sources = self.input.collect()?;
        let records = self.execution.process_sources(&sources, |source| {
            Ok(keep_only_hangul(&source.text, include_whitespace))
        })?;

        self.output.write_records(&records, &OutputConfig::default())
    }
}
