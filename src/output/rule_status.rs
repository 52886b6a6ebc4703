#![forbid(unsafe_code)]

//! RuleStatus output formatters
//!
//! Formatters for the resolved pipeline shown by `hardrules list`, in
//! human-readable and JSONL form.

use crate::rules::{Arity, PipelineConfig, RuleParam, RuleRegistry};
use serde::Serialize;

/// Configured state of a single rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleStatus {
    /// 1-based evaluation position
    pub order: usize,
    pub rule: String,
    pub description: String,
    pub arity: Arity,
    pub enabled: bool,
    pub parameter: RuleParam,
}

impl RuleStatus {
    /// Statuses of every pipeline entry that the registry can resolve
    pub fn collect(registry: &RuleRegistry, pipeline: &PipelineConfig) -> Vec<RuleStatus> {
        pipeline
            .entries()
            .iter()
            .filter_map(|entry| registry.get(&entry.name).map(|spec| (entry, spec)))
            .enumerate()
            .map(|(idx, (entry, spec))| RuleStatus {
                order: idx + 1,
                rule: entry.name.clone(),
                description: spec.description.to_string(),
                arity: spec.arity(),
                enabled: entry.enabled,
                parameter: entry.param.clone(),
            })
            .collect()
    }
}

/// Human-readable formatter for rule status
pub struct RuleStatusHumanFormatter;

impl RuleStatusHumanFormatter {
    /// Create a new human formatter
    pub fn new() -> Self {
        RuleStatusHumanFormatter
    }

    /// Format a list of rule statuses for human consumption
    pub fn format(&self, statuses: &[RuleStatus]) -> String {
        let enabled = statuses.iter().filter(|s| s.enabled).count();
        let mut output = format!("Rules ({} of {} enabled):\n\n", enabled, statuses.len());

        for status in statuses {
            let icon = if status.enabled { "✓" } else { "✗" };
            output.push_str(&format!(
                "{:>2}. {} {} ({})\n",
                status.order, icon, status.rule, status.arity
            ));
            output.push_str(&format!("    {}\n", status.description));
            if status.parameter != RuleParam::Flag {
                output.push_str(&format!("    Parameter: {}\n", status.parameter));
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, statuses: &[RuleStatus]) {
        print!("{}", self.format(statuses));
    }
}

impl Default for RuleStatusHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// JSONL formatter for rule status
pub struct RuleStatusJsonlFormatter;

impl RuleStatusJsonlFormatter {
    /// Create a new JSONL formatter
    pub fn new() -> Self {
        RuleStatusJsonlFormatter
    }

    /// Format a list of rule statuses as JSONL
    ///
    /// Returns a string with one JSON object per line for each rule.
    pub fn format(&self, statuses: &[RuleStatus]) -> String {
        let mut output = String::new();

        for status in statuses {
            if let Ok(json) = serde_json::to_string(status) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted output to stdout
    pub fn write_to_stdout(&self, statuses: &[RuleStatus]) {
        print!("{}", self.format(statuses));
    }
}

impl Default for RuleStatusJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}
