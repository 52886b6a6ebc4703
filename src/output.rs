//! Output formatters (TSV and JSONL records, rule listings)

pub mod jsonl;
pub mod rule_status;
pub mod tsv;

pub use jsonl::JsonlFormatter;
pub use rule_status::{RuleStatus, RuleStatusHumanFormatter, RuleStatusJsonlFormatter};
pub use tsv::TsvFormatter;

use crate::engine::ScoredRecord;

/// Turns one scored record into one output line (without the newline)
///
/// Formatters run on the worker threads, so they must be shareable.
pub trait RecordFormatter: Send + Sync {
    fn format(&self, record: &ScoredRecord<'_>) -> String;
}
