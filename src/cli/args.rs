//! CLI argument parsing using clap

use crate::engine::batch::DEFAULT_BLOCK_SIZE;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for scored records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordFormat {
    /// Input columns followed by the 1/0 verdict (and annotation)
    Tsv,
    /// JSON Lines format (one JSON object per record)
    Jsonl,
}

/// Output format for rule listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// Hardrules CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "hardrules")]
#[command(about = "Rule-based filter for noisy parallel sentence pairs")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "debug")]
    pub quiet: bool,

    /// Log debug information
    #[arg(long, global = true)]
    pub debug: bool,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    pub logfile: Option<PathBuf>,
}

/// Available hardrules subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score tab-separated sentence pairs
    Filter(FilterArgs),

    /// Initialize a hardrules.toml in this directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// List the rule pipeline in evaluation order
    List {
        /// Configuration file to resolve the pipeline from
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Options of the `filter` command
#[derive(Args, Debug, Clone, PartialEq)]
pub struct FilterArgs {
    /// Tab-separated input (defaults to stdin)
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    pub output: Option<PathBuf>,

    /// Source language (left column)
    #[arg(short, long)]
    pub source_lang: Option<String>,

    /// Target language (right column)
    #[arg(short, long)]
    pub target_lang: Option<String>,

    /// Configuration file (defaults to ./hardrules.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Source sentence column (1-based)
    #[arg(long, default_value_t = 1)]
    pub scol: usize,

    /// Target sentence column (1-based)
    #[arg(long, default_value_t = 2)]
    pub tcol: usize,

    /// Append the discard reason (or "keep") to each record
    #[arg(long)]
    pub annotated_output: bool,

    /// Write only the verdict, not the input columns
    #[arg(long)]
    pub score_only: bool,

    /// Report every failing rule instead of the first one
    #[arg(long)]
    pub run_all_rules: bool,

    /// Skip language identification
    #[arg(long)]
    pub disable_lang_ident: bool,

    /// Skip the minimal length check
    #[arg(long)]
    pub disable_minimal_length: bool,

    /// Skip porn removal
    #[arg(long)]
    pub disable_porn_removal: bool,

    /// Skip the fluency filter
    #[arg(long)]
    pub disable_lm_filter: bool,

    /// Minimum fluency score, in (0, 1]
    #[arg(long)]
    pub lm_threshold: Option<f64>,

    /// Records evaluated per parallel block
    #[arg(short, long, default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,

    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    pub processes: Option<usize>,

    /// Output format
    #[arg(short, long, default_value = "tsv")]
    pub format: RecordFormat,
}
