#![forbid(unsafe_code)]

//! Core domain types for hardrules
//!
//! This module defines the fundamental types shared by the rule table, the
//! engine and the output formatters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One side of a translation unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Source-language sentence
    Left,
    /// Target-language sentence
    Right,
}

impl Side {
    /// Returns the side tag used in discard reasons
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a triggered rule was looking at when it failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// A per-side rule failing on one side
    Side(Side),
    /// A paired rule failing on the pair as a whole
    Pair,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Side(side) => f.write_str(side.as_str()),
            Target::Pair => f.write_str("left,right"),
        }
    }
}

/// Identifier of one triggered rule, rendered as `rule_name(side)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reason {
    /// Name of the rule that triggered
    pub rule: &'static str,
    /// Side (or pair) the rule triggered on
    pub target: Target,
}

impl Reason {
    pub fn new(rule: &'static str, target: Target) -> Self {
        Self { rule, target }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.rule, self.target)
    }
}

impl Serialize for Reason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of evaluating one translation unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every enabled rule passed
    Keep,
    /// Short-circuit mode: the first rule that failed
    Discard(Reason),
    /// Exhaustive mode: every rule that failed, in evaluation order
    ///
    /// Also used when both sides of a pair are empty.
    DiscardAll(Vec<Reason>),
}

impl Verdict {
    /// Returns true if the pair should be kept
    pub fn is_keep(&self) -> bool {
        matches!(self, Verdict::Keep)
    }

    /// Returns the triggered rules (empty for `Keep`)
    pub fn reasons(&self) -> &[Reason] {
        match self {
            Verdict::Keep => &[],
            Verdict::Discard(reason) => std::slice::from_ref(reason),
            Verdict::DiscardAll(reasons) => reasons,
        }
    }

    /// Text written to the annotation column: `keep` or the reasons joined by `;`
    pub fn annotation(&self) -> String {
        match self {
            Verdict::Keep => "keep".to_string(),
            _ => self
                .reasons()
                .iter()
                .map(Reason::to_string)
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}
