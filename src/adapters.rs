#![forbid(unsafe_code)]

//! Seams for the expensive external scorers
//!
//! Fluency scoring, language identification and porn classification are
//! models owned by other components. The engine only consumes them through
//! the traits below; any of them may be absent, in which case the rule that
//! uses it passes every pair.

pub mod whatlang_ident;

pub use whatlang_ident::WhatlangIdentifier;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label the porn classifier returns for clean text
pub const NEGATIVE_LABEL: &str = "__label__negative";

/// Scores how fluent a sentence pair is; higher is better
pub trait FluencyScorer: Send + Sync {
    fn score(&self, left: &str, right: &str) -> f64;
}

/// Identifies the language of a sentence as an ISO 639-1 style code
pub trait LanguageIdentifier: Send + Sync {
    fn getlang(&self, text: &str) -> String;
}

/// Classifies detokenized, lowercased text; returns a fastText-style label
pub trait PornClassifier: Send + Sync {
    fn predict(&self, text: &str) -> String;
}

/// Tokenizer used to normalise text before porn classification
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
    fn detokenize(&self, tokens: &[String]) -> String;
}

/// Side inspected by the porn classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PornSide {
    /// Source language (left column)
    #[default]
    Sl,
    /// Target language (right column)
    Tl,
}

impl fmt::Display for PornSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PornSide::Sl => f.write_str("sl"),
            PornSide::Tl => f.write_str("tl"),
        }
    }
}

/// One identifier per side, each configured for that side's language
pub struct LanguageIdent {
    pub source: Box<dyn LanguageIdentifier>,
    pub target: Box<dyn LanguageIdentifier>,
}

/// Porn classifier together with the tokenizer of the side it inspects
pub struct PornRemoval {
    pub classifier: Box<dyn PornClassifier>,
    pub tokenizer: Box<dyn Tokenizer>,
    pub side: PornSide,
}

impl PornRemoval {
    /// Returns true if the inspected side is classified as clean
    pub fn is_clean(&self, left: &str, right: &str) -> bool {
        let text = match self.side {
            PornSide::Sl => left,
            PornSide::Tl => right,
        };
        let tokens = self.tokenizer.tokenize(&text.to_lowercase());
        self.classifier.predict(&self.tokenizer.detokenize(&tokens)) == NEGATIVE_LABEL
    }
}

/// The external scorers handed to the engine at construction
#[derive(Default)]
pub struct Adapters {
    pub fluency: Option<Box<dyn FluencyScorer>>,
    pub lang_ident: Option<LanguageIdent>,
    pub porn: Option<PornRemoval>,
}

impl Adapters {
    /// No scorers at all: every adapter-backed rule passes
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_fluency(mut self, scorer: impl FluencyScorer + 'static) -> Self {
        self.fluency = Some(Box::new(scorer));
        self
    }

    pub fn with_lang_ident(
        mut self,
        source: impl LanguageIdentifier + 'static,
        target: impl LanguageIdentifier + 'static,
    ) -> Self {
        self.lang_ident = Some(LanguageIdent {
            source: Box::new(source),
            target: Box::new(target),
        });
        self
    }

    pub fn with_porn_removal(
        mut self,
        classifier: impl PornClassifier + 'static,
        tokenizer: impl Tokenizer + 'static,
        side: PornSide,
    ) -> Self {
        self.porn = Some(PornRemoval {
            classifier: Box::new(classifier),
            tokenizer: Box::new(tokenizer),
            side,
        });
        self
    }
}

impl fmt::Debug for Adapters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapters")
            .field("fluency", &self.fluency.is_some())
            .field("lang_ident", &self.lang_ident.is_some())
            .field("porn", &self.porn.as_ref().map(|p| p.side))
            .finish()
    }
}

/// Tokenizer splitting on whitespace and joining with single spaces
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn detokenize(&self, tokens: &[String]) -> String {
        tokens.join(" ")
    }
}
