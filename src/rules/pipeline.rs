#![forbid(unsafe_code)]

//! Resolved pipeline configuration: which rules run, with which parameter

use crate::config::hardrules_toml::{RuleValue, RulesConfig};
use crate::error::ConfigError;
use crate::rules::{RuleParam, RuleRegistry};
use serde::Serialize;

/// Configured state of one rule
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineEntry {
    pub name: String,
    pub enabled: bool,
    pub param: RuleParam,
}

/// Rule names in evaluation order with their enabled flag and parameter
///
/// Each engine owns its own copy, built from the registry defaults and then
/// overridden by configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineConfig {
    entries: Vec<PipelineEntry>,
}

impl PipelineConfig {
    /// Default configuration of every rule in the registry
    pub fn defaults(registry: &RuleRegistry) -> Self {
        let entries = registry
            .iter()
            .map(|spec| PipelineEntry {
                name: spec.name.to_string(),
                enabled: spec.enabled_by_default,
                param: spec.default.clone(),
            })
            .collect();
        Self { entries }
    }

    /// Explicit configuration; names are resolved when the engine is built
    pub fn from_entries(entries: Vec<PipelineEntry>) -> Self {
        Self { entries }
    }

    /// Apply user overrides on top of the current values
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownRule` for a key that names no entry, and
    /// `ConfigError::InvalidValue` for a value of the wrong kind. Nothing is
    /// modified when an error is returned.
    pub fn apply(&mut self, overrides: &RulesConfig) -> Result<(), ConfigError> {
        let mut resolved = Vec::with_capacity(overrides.len());
        for (name, value) in overrides {
            let idx = self
                .entries
                .iter()
                .position(|entry| &entry.name == name)
                .ok_or_else(|| ConfigError::UnknownRule(name.clone()))?;
            let (enabled, param) = resolve_value(name, &self.entries[idx].param, value)?;
            resolved.push((idx, enabled, param));
        }

        for (idx, enabled, param) in resolved {
            self.entries[idx].enabled = enabled;
            self.entries[idx].param = param;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&PipelineEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn entries(&self) -> &[PipelineEntry] {
        &self.entries
    }

    /// Names of the rules that will run, in order
    pub fn enabled_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.enabled)
            .map(|entry| entry.name.as_str())
            .collect()
    }
}

/// Turn a configuration value into `(enabled, parameter)` for a rule whose
/// current parameter is `current`
fn resolve_value(
    name: &str,
    current: &RuleParam,
    value: &RuleValue,
) -> Result<(bool, RuleParam), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        field: format!("rules.{}", name),
        message,
    };

    match (current, value) {
        (_, RuleValue::Bool(enabled)) => Ok((*enabled, current.clone())),
        (RuleParam::Count(_), RuleValue::Integer(n)) => {
            let n = usize::try_from(*n)
                .map_err(|_| invalid(format!("expected a non-negative integer, got {}", n)))?;
            let param = RuleParam::Count(n);
            Ok((param.is_truthy(), param))
        }
        (RuleParam::Ratio(_), RuleValue::Integer(n)) => ratio_value(*n as f64).map_err(invalid),
        (RuleParam::Ratio(_), RuleValue::Float(x)) => ratio_value(*x).map_err(invalid),
        (RuleParam::Literals(_), RuleValue::List(items)) => {
            let param = RuleParam::Literals(items.clone());
            Ok((param.is_truthy(), param))
        }
        (RuleParam::Flag, _) => Err(invalid("expected a boolean".to_string())),
        _ => Err(invalid(format!(
            "expected {} or a boolean",
            current.kind()
        ))),
    }
}

fn ratio_value(ratio: f64) -> Result<(bool, RuleParam), String> {
    if ratio.is_nan() || ratio < 0.0 {
        return Err(format!("expected a positive ratio, got {}", ratio));
    }
    if ratio > 0.0 && ratio < 1.0 {
        return Err(format!("ratio must be at least 1, got {}", ratio));
    }
    let param = RuleParam::Ratio(ratio);
    Ok((param.is_truthy(), param))
}
