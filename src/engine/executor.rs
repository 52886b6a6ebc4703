#![forbid(unsafe_code)]

//! Rule pipeline engine
//!
//! The `Engine` resolves the configured pipeline once, at construction, and
//! then evaluates sentence pairs against it. Construction is where every
//! configuration problem surfaces; evaluation itself cannot fail.

use crate::adapters::Adapters;
use crate::config::hardrules_toml::RulesConfig;
use crate::error::{ConfigError, HardrulesError};
use crate::rules::{
    PipelineConfig, RuleCheck, RuleContext, RuleParam, RuleRegistry, RuleSpec, SideCheck,
};
use crate::types::{Reason, Side, Target, Verdict};

/// Default fluency threshold for `lm_filter`
pub const DEFAULT_LM_THRESHOLD: f64 = 0.5;

/// Everything needed to build an engine apart from the scorer adapters
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Language of the left column
    pub source_lang: String,

    /// Language of the right column
    pub target_lang: String,

    /// Overrides of the default rule parameters
    pub rules: RulesConfig,

    /// Collect every failing rule instead of stopping at the first one
    pub run_all_rules: bool,

    /// Minimum fluency score, in (0, 1]
    pub lm_threshold: f64,

    pub disable_lang_ident: bool,
    pub disable_minimal_length: bool,
    pub disable_porn_removal: bool,
    pub disable_lm_filter: bool,
}

impl EngineSettings {
    /// Default settings for a language pair
    pub fn new(source_lang: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            source_lang: source_lang.into(),
            target_lang: target_lang.into(),
            rules: RulesConfig::new(),
            run_all_rules: false,
            lm_threshold: DEFAULT_LM_THRESHOLD,
            disable_lang_ident: false,
            disable_minimal_length: false,
            disable_porn_removal: false,
            disable_lm_filter: false,
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.source_lang.is_empty() {
            return Err(ConfigError::MissingField("source_lang".to_string()));
        }
        if self.target_lang.is_empty() {
            return Err(ConfigError::MissingField("target_lang".to_string()));
        }
        if !(self.lm_threshold > 0.0 && self.lm_threshold <= 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "lm_threshold".to_string(),
                message: format!("must be in (0, 1], got {}", self.lm_threshold),
            });
        }
        Ok(())
    }
}

/// An enabled rule with its resolved parameter
#[derive(Debug, Clone)]
struct ActiveRule {
    spec: RuleSpec,
    param: RuleParam,
}

/// Evaluates translation units against the resolved rule pipeline
///
/// An engine is immutable once built and holds no per-call state, so a
/// single instance can be shared by reference across worker threads.
#[derive(Debug)]
pub struct Engine {
    source_lang: String,
    target_lang: String,
    pipeline: PipelineConfig,
    active: Vec<ActiveRule>,
    exhaustive: bool,
    disable_minimal_length: bool,
    lm_threshold: f64,
    adapters: Adapters,
}

impl Engine {
    /// Builds an engine over the built-in rule table
    ///
    /// # Errors
    ///
    /// Returns an error if a configured rule is unknown, a value has the
    /// wrong type, or a setting is out of range.
    pub fn new(settings: EngineSettings, adapters: Adapters) -> Result<Self, HardrulesError> {
        Self::with_registry(&RuleRegistry::builtin(), settings, adapters)
    }

    /// Builds an engine over a custom rule table
    pub fn with_registry(
        registry: &RuleRegistry,
        settings: EngineSettings,
        adapters: Adapters,
    ) -> Result<Self, HardrulesError> {
        let mut pipeline = PipelineConfig::defaults(registry);
        pipeline.apply(&settings.rules)?;
        Self::with_pipeline(registry, pipeline, settings, adapters)
    }

    /// Builds an engine from an explicit pipeline
    ///
    /// `settings.rules` is ignored; the pipeline is used as given.
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotImplemented` if a pipeline entry names a rule
    /// the registry does not hold.
    pub fn with_pipeline(
        registry: &RuleRegistry,
        pipeline: PipelineConfig,
        settings: EngineSettings,
        adapters: Adapters,
    ) -> Result<Self, HardrulesError> {
        settings.validate()?;

        let mut active = Vec::new();
        for entry in pipeline.entries() {
            let spec = registry.resolve(&entry.name)?;
            if entry.enabled {
                active.push(ActiveRule {
                    spec: spec.clone(),
                    param: entry.param.clone(),
                });
            }
        }

        let adapters = gate_adapters(adapters, &settings);

        tracing::debug!(
            rules = ?pipeline.enabled_names(),
            exhaustive = settings.run_all_rules,
            "Resolved rule pipeline for {}-{}",
            settings.source_lang,
            settings.target_lang
        );

        Ok(Self {
            source_lang: settings.source_lang,
            target_lang: settings.target_lang,
            pipeline,
            active,
            exhaustive: settings.run_all_rules,
            disable_minimal_length: settings.disable_minimal_length,
            lm_threshold: settings.lm_threshold,
            adapters,
        })
    }

    /// Evaluates one translation unit
    ///
    /// Rules run in registration order. In short-circuit mode the first
    /// failure is returned; in exhaustive mode every failure is collected,
    /// except that a gating rule (`no_empty`) ends evaluation at once with
    /// just its own failures, in either mode.
    pub fn evaluate(&self, left: &str, right: &str) -> Verdict {
        let ctx = self.context();
        let mut discards = Vec::new();

        for rule in &self.active {
            let spec = &rule.spec;
            match spec.check {
                RuleCheck::PerSide(check) => {
                    for (side, sentence) in [(Side::Left, left), (Side::Right, right)] {
                        let keep = check(&ctx, &rule.param, sentence, side);
                        tracing::trace!(rule = spec.name, %side, keep, "rule evaluated");
                        if keep {
                            continue;
                        }

                        if spec.gates_pipeline {
                            return self.gate_verdict(rule, check, left, right);
                        }
                        let reason = Reason::new(spec.name, Target::Side(side));
                        if !self.exhaustive {
                            return Verdict::Discard(reason);
                        }
                        discards.push(reason);
                    }
                }
                RuleCheck::Paired(check) => {
                    let keep = check(&ctx, &rule.param, left, right);
                    tracing::trace!(rule = spec.name, side = "left,right", keep, "rule evaluated");
                    if keep {
                        continue;
                    }

                    let reason = Reason::new(spec.name, Target::Pair);
                    if spec.gates_pipeline {
                        // Earlier failures are dropped, as for per-side gates
                        return if self.exhaustive {
                            Verdict::DiscardAll(vec![reason])
                        } else {
                            Verdict::Discard(reason)
                        };
                    }
                    if !self.exhaustive {
                        return Verdict::Discard(reason);
                    }
                    discards.push(reason);
                }
            }
        }

        if discards.is_empty() {
            Verdict::Keep
        } else {
            Verdict::DiscardAll(discards)
        }
    }

    /// Both sides re-checked against a failed gating rule, failures only
    ///
    /// A single failing side keeps the mode's usual shape; two failing sides
    /// are both reported even in short-circuit mode.
    fn gate_verdict(
        &self,
        rule: &ActiveRule,
        check: SideCheck,
        left: &str,
        right: &str,
    ) -> Verdict {
        let ctx = self.context();
        let mut failures: Vec<Reason> = [(Side::Left, left), (Side::Right, right)]
            .into_iter()
            .filter(|&(side, sentence)| !check(&ctx, &rule.param, sentence, side))
            .map(|(side, _)| Reason::new(rule.spec.name, Target::Side(side)))
            .collect();

        if !self.exhaustive && failures.len() == 1 {
            return Verdict::Discard(failures.remove(0));
        }
        Verdict::DiscardAll(failures)
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext {
            source_lang: &self.source_lang,
            target_lang: &self.target_lang,
            disable_minimal_length: self.disable_minimal_length,
            lm_threshold: self.lm_threshold,
            adapters: &self.adapters,
        }
    }

    /// The resolved configuration, disabled rules included
    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    /// Number of rules that run on every pair
    pub fn active_rules(&self) -> usize {
        self.active.len()
    }

    pub fn is_exhaustive(&self) -> bool {
        self.exhaustive
    }

    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }
}

/// Drops the adapters whose feature is disabled and reports what remains
fn gate_adapters(mut adapters: Adapters, settings: &EngineSettings) -> Adapters {
    if settings.disable_lm_filter {
        adapters.fluency = None;
        tracing::info!("LM filter disabled");
    } else if adapters.fluency.is_none() {
        tracing::info!("No fluency scorer available, lm_filter passes every pair");
    } else {
        tracing::info!("LM filter enabled, threshold {}", settings.lm_threshold);
    }

    if settings.disable_lang_ident {
        adapters.lang_ident = None;
        tracing::info!("Language identification disabled");
    } else if adapters.lang_ident.is_none() {
        tracing::info!("No language identifier available, no_wrong_language passes every pair");
    } else {
        tracing::info!(
            "Language identification enabled for {}-{}",
            settings.source_lang,
            settings.target_lang
        );
    }

    if settings.disable_porn_removal {
        adapters.porn = None;
        tracing::info!("Porn removal disabled");
    } else if let Some(porn) = &adapters.porn {
        tracing::info!("Porn removal enabled on side {}", porn.side);
    } else {
        tracing::info!("No porn classifier available, no_porn passes every pair");
    }

    adapters
}
