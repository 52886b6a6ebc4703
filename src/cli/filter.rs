//! Filter command implementation
//!
//! This module implements the `hardrules filter` command, which:
//! - Resolves settings from hardrules.toml and the command line
//! - Builds the engine with the available scorer adapters
//! - Streams tab-separated records through the batch driver
//! - Returns an exit code reflecting malformed records or errors

use crate::cli::args::{FilterArgs, RecordFormat};
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_RECORD_ERRORS, EXIT_SUCCESS};
use crate::engine::batch::{self, BatchOptions, BatchSummary};
use crate::engine::Engine;
use crate::error::{ConfigError, HardrulesError};
use crate::output::{JsonlFormatter, RecordFormatter, TsvFormatter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

/// Error type specific to filter command
#[derive(Debug, thiserror::Error)]
pub(crate) enum FilterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Hardrules(#[from] HardrulesError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Run the filter command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 1: Some records lacked the requested columns
/// - 2: Error (configuration/I/O error)
/// - 3: Parse error (invalid TOML configuration)
pub fn run_filter(args: &FilterArgs) -> i32 {
    match run_filter_inner(args) {
        Ok(summary) if summary.malformed > 0 => EXIT_RECORD_ERRORS,
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                FilterError::Config(ConfigError::Parse(_))
                | FilterError::Hardrules(HardrulesError::Config(ConfigError::Parse(_))) => {
                    EXIT_PARSE_ERROR
                }
                _ => EXIT_ERROR,
            }
        }
    }
}

fn run_filter_inner(args: &FilterArgs) -> Result<BatchSummary, FilterError> {
    let config = super::common::load_config(args.config.as_deref())?;
    let settings = super::common::build_settings(args, &config)?;
    let adapters = super::common::build_adapters(&settings);
    let engine = Engine::new(settings, adapters)?;

    tracing::info!(
        "Filtering {}-{} with {} active rules",
        engine.source_lang(),
        engine.target_lang(),
        engine.active_rules()
    );

    let input: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };
    let mut output: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let formatter: Box<dyn RecordFormatter> = match args.format {
        RecordFormat::Tsv => Box::new(TsvFormatter::new(args.score_only, args.annotated_output)),
        RecordFormat::Jsonl => Box::new(JsonlFormatter::new()),
    };
    let options = BatchOptions {
        scol: args.scol,
        tcol: args.tcol,
        block_size: args.block_size,
        processes: args.processes.unwrap_or(0),
    };

    let summary = batch::run(&engine, input, &mut output, formatter.as_ref(), &options)?;
    if summary.malformed > 0 {
        tracing::warn!(
            "{} of {} records had fewer than {} columns",
            summary.malformed,
            summary.total,
            options.scol.max(options.tcol)
        );
    }
    Ok(summary)
}
