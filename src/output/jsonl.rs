#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable output
//!
//! One JSON object per input record, in input order:
//! `{"line": 1, "keep": false, "reasons": ["no_empty(left)"], "source": "", "target": "hola"}`

use super::RecordFormatter;
use crate::engine::ScoredRecord;
use serde::Serialize;

/// JSONL output formatter
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonlFormatter;

impl JsonlFormatter {
    /// Creates a new JsonlFormatter
    pub fn new() -> Self {
        JsonlFormatter
    }
}

/// Record line for JSONL output
#[derive(Debug, Serialize)]
struct RecordLine<'a> {
    line: usize,
    keep: bool,
    reasons: Vec<String>,
    source: &'a str,
    target: &'a str,
}

impl RecordFormatter for JsonlFormatter {
    fn format(&self, record: &ScoredRecord<'_>) -> String {
        let line = RecordLine {
            line: record.line_number,
            keep: record.outcome.is_keep(),
            reasons: record.outcome.reasons(),
            source: record.source,
            target: record.target,
        };
        // Plain strings and numbers always serialize
        serde_json::to_string(&line).unwrap_or_default()
    }
}
