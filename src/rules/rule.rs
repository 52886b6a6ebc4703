#![forbid(unsafe_code)]

//! Core rule types: parameters, arity-tagged predicates and the evaluation context

use crate::adapters::Adapters;
use crate::types::Side;
use serde::Serialize;
use std::fmt;

/// How a rule is invoked on a translation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Arity {
    /// Once per side, left first
    PerSide,
    /// Once with both sides together
    Paired,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::PerSide => f.write_str("per_side"),
            Arity::Paired => f.write_str("paired"),
        }
    }
}

/// Typed parameter of a rule
///
/// `Flag` rules are plain on/off switches; the other kinds carry the value the
/// predicate is tuned with.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RuleParam {
    Flag,
    Count(usize),
    Ratio(f64),
    Literals(Vec<String>),
}

impl RuleParam {
    /// Name of the parameter kind, used in configuration errors
    pub fn kind(&self) -> &'static str {
        match self {
            RuleParam::Flag => "a boolean",
            RuleParam::Count(_) => "a non-negative integer",
            RuleParam::Ratio(_) => "a number",
            RuleParam::Literals(_) => "a list of strings",
        }
    }

    /// Returns false for values that switch the rule off (0, 0.0, empty list)
    pub fn is_truthy(&self) -> bool {
        match self {
            RuleParam::Flag => true,
            RuleParam::Count(n) => *n != 0,
            RuleParam::Ratio(r) => *r != 0.0,
            RuleParam::Literals(items) => !items.is_empty(),
        }
    }

    pub fn as_count(&self) -> Option<usize> {
        match self {
            RuleParam::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_ratio(&self) -> Option<f64> {
        match self {
            RuleParam::Ratio(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_literals(&self) -> &[String] {
        match self {
            RuleParam::Literals(items) => items,
            _ => &[],
        }
    }
}

impl fmt::Display for RuleParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleParam::Flag => f.write_str("-"),
            RuleParam::Count(n) => write!(f, "{}", n),
            RuleParam::Ratio(r) => write!(f, "{}", r),
            RuleParam::Literals(items) => write!(f, "{:?}", items),
        }
    }
}

/// Everything a predicate may consult besides the sentences themselves
///
/// Built by the engine for each call; it only borrows engine state.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub source_lang: &'a str,
    pub target_lang: &'a str,
    pub disable_minimal_length: bool,
    pub lm_threshold: f64,
    pub adapters: &'a Adapters,
}

impl<'a> RuleContext<'a> {
    /// Language code of the given side
    pub fn lang(&self, side: Side) -> &'a str {
        match side {
            Side::Left => self.source_lang,
            Side::Right => self.target_lang,
        }
    }
}

/// Predicate applied to one side: `(ctx, param, sentence, side) -> passes`
pub type SideCheck = fn(&RuleContext<'_>, &RuleParam, &str, Side) -> bool;

/// Predicate applied to a pair: `(ctx, param, left, right) -> passes`
pub type PairCheck = fn(&RuleContext<'_>, &RuleParam, &str, &str) -> bool;

/// A predicate tagged with its arity
#[derive(Clone, Copy)]
pub enum RuleCheck {
    PerSide(SideCheck),
    Paired(PairCheck),
}

impl RuleCheck {
    pub fn arity(&self) -> Arity {
        match self {
            RuleCheck::PerSide(_) => Arity::PerSide,
            RuleCheck::Paired(_) => Arity::Paired,
        }
    }
}

impl fmt::Debug for RuleCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleCheck::{:?}", self.arity())
    }
}

/// One predicate of the pipeline
#[derive(Debug, Clone)]
pub struct RuleSpec {
    /// Unique name, used in reasons and configuration keys
    pub name: &'static str,

    /// Human-readable description
    pub description: &'static str,

    /// Parameter used when configuration does not override it
    pub default: RuleParam,

    /// Whether the rule runs when configuration does not mention it
    pub enabled_by_default: bool,

    /// Predicate, tagged with its arity
    pub check: RuleCheck,

    /// A failure ends evaluation at once, in both modes
    ///
    /// Later predicates assume the condition this rule guards.
    pub gates_pipeline: bool,
}

impl RuleSpec {
    /// Per-side rule, enabled by default
    pub fn per_side(
        name: &'static str,
        description: &'static str,
        default: RuleParam,
        check: SideCheck,
    ) -> Self {
        Self {
            name,
            description,
            default,
            enabled_by_default: true,
            check: RuleCheck::PerSide(check),
            gates_pipeline: false,
        }
    }

    /// Paired rule, enabled by default
    pub fn paired(
        name: &'static str,
        description: &'static str,
        default: RuleParam,
        check: PairCheck,
    ) -> Self {
        Self {
            name,
            description,
            default,
            enabled_by_default: true,
            check: RuleCheck::Paired(check),
            gates_pipeline: false,
        }
    }

    /// Leaves the rule off unless configuration turns it on
    pub fn disabled_by_default(mut self) -> Self {
        self.enabled_by_default = false;
        self
    }

    /// Marks the rule as a gate for the rest of the pipeline
    pub fn gating(mut self) -> Self {
        self.gates_pipeline = true;
        self
    }

    pub fn arity(&self) -> Arity {
        self.check.arity()
    }
}
