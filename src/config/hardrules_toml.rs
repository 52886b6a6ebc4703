//! Parsing and validation for hardrules.toml configuration files

use crate::engine::{DEFAULT_LM_THRESHOLD, EngineSettings};
use crate::error::ConfigError;
use crate::rules::{PipelineConfig, RuleRegistry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "hardrules.toml";

/// Main configuration struct for hardrules.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Language pair and evaluation settings
    #[serde(default)]
    pub hardrules: HardrulesMeta,

    /// Rule overrides
    #[serde(default)]
    pub rules: RulesConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// Rule overrides are checked against the built-in table here, so a typo
    /// in a rule name is reported before any record is read.
    fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.hardrules.lm_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "hardrules.lm_threshold".to_string(),
                message: format!("must be in (0, 1], got {}", threshold),
            });
        }

        PipelineConfig::defaults(&RuleRegistry::builtin()).apply(&self.rules)?;
        Ok(())
    }

    /// Engine settings described by this file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if a language is not set.
    pub fn engine_settings(&self) -> Result<EngineSettings, ConfigError> {
        let meta = &self.hardrules;
        let source_lang = meta
            .source_lang
            .clone()
            .ok_or_else(|| ConfigError::MissingField("hardrules.source_lang".to_string()))?;
        let target_lang = meta
            .target_lang
            .clone()
            .ok_or_else(|| ConfigError::MissingField("hardrules.target_lang".to_string()))?;

        Ok(EngineSettings {
            rules: self.rules.clone(),
            run_all_rules: meta.run_all_rules,
            lm_threshold: meta.lm_threshold,
            disable_lang_ident: meta.disable_lang_ident,
            disable_minimal_length: meta.disable_minimal_length,
            disable_porn_removal: meta.disable_porn_removal,
            disable_lm_filter: meta.disable_lm_filter,
            ..EngineSettings::new(source_lang, target_lang)
        })
    }
}

/// `[hardrules]` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HardrulesMeta {
    /// Source language (left column), ISO 639-1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_lang: Option<String>,

    /// Target language (right column), ISO 639-1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<String>,

    /// Report every failing rule instead of the first one
    #[serde(default)]
    pub run_all_rules: bool,

    /// Minimum fluency score for `lm_filter`
    #[serde(default = "default_lm_threshold")]
    pub lm_threshold: f64,

    #[serde(default)]
    pub disable_lang_ident: bool,

    #[serde(default)]
    pub disable_minimal_length: bool,

    #[serde(default)]
    pub disable_porn_removal: bool,

    #[serde(default)]
    pub disable_lm_filter: bool,
}

impl Default for HardrulesMeta {
    fn default() -> Self {
        Self {
            source_lang: None,
            target_lang: None,
            run_all_rules: false,
            lm_threshold: DEFAULT_LM_THRESHOLD,
            disable_lang_ident: false,
            disable_minimal_length: false,
            disable_porn_removal: false,
            disable_lm_filter: false,
        }
    }
}

fn default_lm_threshold() -> f64 {
    DEFAULT_LM_THRESHOLD
}

/// `[rules]` section: rule name to override value
pub type RulesConfig = BTreeMap<String, RuleValue>;

/// A rule can be toggled with a boolean or parameterized with a typed value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleValue {
    /// Enable with the default parameter, or disable
    Bool(bool),
    /// Count parameter (lengths, word counts)
    Integer(i64),
    /// Ratio parameter
    Float(f64),
    /// Literal list parameter
    List(Vec<String>),
}
