#![forbid(unsafe_code)]

//! Tab-separated record output
//!
//! Each line is the input record (unless only scores are requested), then
//! `1` (keep) or `0` (discard), then optionally the annotation: `keep` or the
//! triggered rules joined by `;`.

use super::RecordFormatter;
use crate::engine::ScoredRecord;

/// TSV output formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct TsvFormatter {
    score_only: bool,
    annotated: bool,
}

impl TsvFormatter {
    pub fn new(score_only: bool, annotated: bool) -> Self {
        Self {
            score_only,
            annotated,
        }
    }
}

impl RecordFormatter for TsvFormatter {
    fn format(&self, record: &ScoredRecord<'_>) -> String {
        let mut output = String::with_capacity(record.line.len() + 16);

        if !self.score_only {
            output.push_str(record.line);
            output.push('\t');
        }
        output.push(if record.outcome.is_keep() { '1' } else { '0' });

        if self.annotated {
            output.push('\t');
            output.push_str(&record.outcome.annotation());
        }
        output
    }
}
