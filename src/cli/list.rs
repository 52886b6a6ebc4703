//! List command implementation
//!
//! This module implements the `hardrules list` command, which shows the rule
//! pipeline in evaluation order with the enabled state and parameter each
//! rule resolves to under the active configuration.

use crate::cli::args::OutputFormat;
use crate::cli::common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_SUCCESS};
use crate::error::ConfigError;
use crate::output::{RuleStatus, RuleStatusHumanFormatter, RuleStatusJsonlFormatter};
use crate::rules::{PipelineConfig, RuleRegistry};
use std::path::Path;

/// Error type specific to list command
#[derive(Debug, thiserror::Error)]
enum ListError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Run the list command
///
/// # Returns
///
/// Exit code:
/// - 0: Success
/// - 2: Error
/// - 3: Parse error (invalid TOML configuration)
pub fn run_list(config: Option<&Path>, format: OutputFormat) -> i32 {
    match run_list_inner(config, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            match e {
                ListError::Config(ConfigError::Parse(_)) => EXIT_PARSE_ERROR,
                _ => EXIT_ERROR,
            }
        }
    }
}

fn run_list_inner(config: Option<&Path>, format: OutputFormat) -> Result<(), ListError> {
    let config = super::common::load_config(config)?;
    let statuses = rule_statuses(&config.rules)?;

    match format {
        OutputFormat::Human => RuleStatusHumanFormatter::new().write_to_stdout(&statuses),
        OutputFormat::Jsonl => RuleStatusJsonlFormatter::new().write_to_stdout(&statuses),
    }
    Ok(())
}

/// Resolve the built-in pipeline under the given rule overrides
fn rule_statuses(rules: &crate::config::RulesConfig) -> Result<Vec<RuleStatus>, ConfigError> {
    let registry = RuleRegistry::builtin();
    let mut pipeline = PipelineConfig::defaults(&registry);
    pipeline.apply(rules)?;
    Ok(RuleStatus::collect(&registry, &pipeline))
}
