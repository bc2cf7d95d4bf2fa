//! Arguments and helpers shared by the text commands

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::OutputConfig;
use crate::error::CliError;
use crate::input::SourceText;
use crate::output::{create_formatter, OutputFormat, OutputRecord};
use crate::progress::ProgressReporter;

/// Output selection shared by the text commands
#[derive(Debug, Clone, Default, Args)]
pub struct OutputArgs {
    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: from config, otherwise text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl OutputArgs {
    /// Write all records with the selected formatter
    pub fn write_records(&self, records: &[OutputRecord], config: &OutputConfig) -> Result<()> {
        let format = self.format.unwrap_or(config.default_format);
        log::debug!("Writing {} record(s) as {}", records.len(), format);

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter = create_formatter(format, writer, config.pretty_json);
        for record in records {
            formatter.format_record(record)?;
        }
        formatter.finish()
    }
}

/// Execution settings shared by the text commands
#[derive(Debug, Clone, Default, Args)]
pub struct ExecutionArgs {
    /// Process multiple sources in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing [default: number of CPUs]
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ExecutionArgs {
    /// Run `process` over every source and collect the records in input order
    pub fn process_sources<F>(&self, sources: &[SourceText], process: F) -> Result<Vec<OutputRecord>>
    where
        F: Fn(&SourceText) -> Result<String> + Sync,
    {
        if self.threads == Some(0) {
            return Err(
                CliError::ConfigError("Thread count must be greater than 0".to_string()).into(),
            );
        }

        let mut reporter = ProgressReporter::new(self.quiet);
        reporter.init_sources(sources.len() as u64);

        let run = |source: &SourceText| -> Result<OutputRecord> {
            let output = process(source)?;
            let name = source.source.display_name();
            reporter.source_completed(&name);
            Ok(OutputRecord {
                source: name,
                input: source.text.clone(),
                output,
            })
        };

        let records = if self.parallel && sources.len() > 1 {
            let threads = self.threads.unwrap_or_else(num_cpus::get);
            log::info!("Processing {} sources on {} threads", sources.len(), threads);

            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            pool.install(|| sources.par_iter().map(run).collect::<Result<Vec<_>>>())?
        } else {
            sources.iter().map(run).collect::<Result<Vec<_>>>()?
        };

        reporter.finish();
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSource;

    fn sources(texts: &[&str]) -> Vec<SourceText> {
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| SourceText {
                source: InputSource::Inline(index + 1),
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_sequential_processing_keeps_order() {
        let execution = ExecutionArgs {
            quiet: true,
            ..Default::default()
        };
        let records = execution
            .process_sources(&sources(&["가", "나"]), |source| Ok(source.text.repeat(2)))
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].source, "<text 1>");
        assert_eq!(records[0].output, "가가");
        assert_eq!(records[1].output, "나나");
    }

    #[test]
    fn test_parallel_processing_keeps_order() {
        let execution = ExecutionArgs {
            parallel: true,
            threads: Some(2),
            quiet: true,
            ..Default::default()
        };
        let texts: Vec<String> = (0..20).map(|i| i.to_string()).collect();
        let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();

        let records = execution
            .process_sources(&sources(&text_refs), |source| Ok(source.text.clone()))
            .unwrap();

        let outputs: Vec<&str> = records.iter().map(|r| r.output.as_str()).collect();
        assert_eq!(outputs, text_refs);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let execution = ExecutionArgs {
            threads: Some(0),
            quiet: true,
            ..Default::default()
        };
        let error = execution
            .process_sources(&sources(&["가"]), |source| Ok(source.text.clone()))
            .unwrap_err();
        assert!(error.to_string().contains("Thread count must be greater than 0"));
    }

    #[test]
    fn test_processing_error_is_returned() {
        let execution = ExecutionArgs {
            quiet: true,
            ..Default::default()
        };
        let result = execution.process_sources(&sources(&["가"]), |_| anyhow::bail!("boom"));
        assert!(result.is_err());
    }

    #[test]
    fn test_write_records_to_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        let output = OutputArgs {
            output: Some(path.clone()),
            format: Some(OutputFormat::Json),
        };
        let records = vec![OutputRecord {
            source: "<text 1>".to_string(),
            input: "한".to_string(),
            output: "ㅎㅏㄴ".to_string(),
        }];

        output.write_records(&records, &OutputConfig::default()).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<OutputRecord> = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, records);
    }
}
