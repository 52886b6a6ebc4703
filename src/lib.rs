#![forbid(unsafe_code)]

//! Hardrules: rule-based filtering of noisy parallel corpora
//!
//! Each translation unit (a source sentence and its translation) is run
//! through an ordered pipeline of cheap heuristic rules. The first rule that
//! fails decides the discard reason, or every failing rule is collected when
//! exhaustive evaluation is requested.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod text;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, HardrulesError, RuleError};

// Re-export core domain types for convenient access
pub use adapters::Adapters;
pub use engine::{Engine, EngineSettings};
pub use types::{Reason, Side, Target, Verdict};
