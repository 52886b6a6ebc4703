#![forbid(unsafe_code)]

//! Batch driver: tab-separated records in, scored records out
//!
//! Records are read in blocks, each block is evaluated in parallel with
//! rayon, and the formatted results are written back in input order.

use crate::engine::Engine;
use crate::error::HardrulesError;
use crate::output::RecordFormatter;
use crate::types::Verdict;
use rayon::prelude::*;
use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

/// Reason reported for records without the requested columns
pub const WRONG_COLS: &str = "c_wrong_cols";

/// Default number of records evaluated per parallel block
pub const DEFAULT_BLOCK_SIZE: usize = 10_000;

/// How records are read and scheduled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOptions {
    /// 1-based index of the source column
    pub scol: usize,
    /// 1-based index of the target column
    pub tcol: usize,
    /// Records per parallel block
    pub block_size: usize,
    /// Worker threads; 0 lets rayon decide
    pub processes: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            scol: 1,
            tcol: 2,
            block_size: DEFAULT_BLOCK_SIZE,
            processes: 0,
        }
    }
}

/// Result of scoring one input record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The record was evaluated by the engine
    Scored(Verdict),
    /// The record lacks the source or target column
    WrongColumns,
}

impl Outcome {
    pub fn is_keep(&self) -> bool {
        matches!(self, Outcome::Scored(verdict) if verdict.is_keep())
    }

    /// Reasons as written to the output
    pub fn reasons(&self) -> Vec<String> {
        match self {
            Outcome::Scored(verdict) => verdict.reasons().iter().map(ToString::to_string).collect(),
            Outcome::WrongColumns => vec![WRONG_COLS.to_string()],
        }
    }

    /// `keep`, or the reasons joined by `;`
    pub fn annotation(&self) -> String {
        match self {
            Outcome::Scored(verdict) => verdict.annotation(),
            Outcome::WrongColumns => WRONG_COLS.to_string(),
        }
    }
}

/// One input line together with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredRecord<'a> {
    /// The line as read, without its terminator
    pub line: &'a str,
    /// 1-based line number in the input
    pub line_number: usize,
    /// Source sentence, empty when the column is missing
    pub source: &'a str,
    /// Target sentence, empty when the column is missing
    pub target: &'a str,
    pub outcome: Outcome,
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub total: usize,
    pub kept: usize,
    pub discarded: usize,
    pub malformed: usize,
    pub elapsed: Duration,
}

impl BatchSummary {
    fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::WrongColumns => self.malformed += 1,
            outcome if outcome.is_keep() => self.kept += 1,
            Outcome::Scored(_) => self.discarded += 1,
        }
    }

    /// Records per second, 0 for an instantaneous run
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total as f64 / secs
        } else {
            0.0
        }
    }
}

/// Scores a single line against the engine
pub fn score_line<'a>(
    engine: &Engine,
    line: &'a str,
    line_number: usize,
    options: &BatchOptions,
) -> ScoredRecord<'a> {
    let fields: Vec<&str> = line.split('\t').collect();
    let column = |index: usize| index.checked_sub(1).and_then(|i| fields.get(i).copied());

    match (column(options.scol), column(options.tcol)) {
        (Some(source), Some(target)) => ScoredRecord {
            line,
            line_number,
            source,
            target,
            outcome: Outcome::Scored(engine.evaluate(source, target)),
        },
        _ => {
            tracing::error!(
                "Line {}: expected at least {} columns, found {}",
                line_number,
                options.scol.max(options.tcol),
                fields.len()
            );
            ScoredRecord {
                line,
                line_number,
                source: "",
                target: "",
                outcome: Outcome::WrongColumns,
            }
        }
    }
}

/// Scores every record of `input` and writes the formatted results to `output`
///
/// # Errors
///
/// Returns an error if reading, writing, or building the thread pool fails.
/// Malformed records are not errors; they are counted and reported. Invalid
/// UTF-8 is replaced with U+FFFD and the record is scored as usual.
pub fn run<R: BufRead, W: Write>(
    engine: &Engine,
    mut input: R,
    output: &mut W,
    formatter: &dyn RecordFormatter,
    options: &BatchOptions,
) -> Result<BatchSummary, HardrulesError> {
    let start = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(options.processes)
        .build()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    let block_size = options.block_size.max(1);

    tracing::info!(
        "Scoring with {} threads, blocks of {} records",
        pool.current_num_threads(),
        block_size
    );

    let mut summary = BatchSummary::default();
    let mut block: Vec<String> = Vec::with_capacity(block_size);
    let mut first_line = 1;

    let mut raw = Vec::new();
    loop {
        raw.clear();
        if input.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        block.push(decode_line(&raw, first_line + block.len()));
        if block.len() == block_size {
            write_block(engine, &pool, &block, first_line, output, formatter, options, &mut summary)?;
            first_line += block.len();
            block.clear();
        }
    }
    if !block.is_empty() {
        write_block(engine, &pool, &block, first_line, output, formatter, options, &mut summary)?;
    }
    output.flush()?;

    summary.elapsed = start.elapsed();
    tracing::info!(
        "Scored {} records: {} kept, {} discarded, {} malformed in {:.2}s ({:.0} records/s)",
        summary.total,
        summary.kept,
        summary.discarded,
        summary.malformed,
        summary.elapsed.as_secs_f64(),
        summary.throughput()
    );
    Ok(summary)
}

/// One input line without its `\n`; a `\r` before it is kept
fn decode_line(raw: &[u8], line_number: usize) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    match String::from_utf8_lossy(raw) {
        Cow::Borrowed(line) => line.to_string(),
        Cow::Owned(line) => {
            tracing::warn!("Line {}: invalid UTF-8 replaced", line_number);
            line
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn write_block<W: Write>(
    engine: &Engine,
    pool: &rayon::ThreadPool,
    block: &[String],
    first_line: usize,
    output: &mut W,
    formatter: &dyn RecordFormatter,
    options: &BatchOptions,
    summary: &mut BatchSummary,
) -> Result<(), HardrulesError> {
    tracing::debug!(
        "Block of {} records starting at line {}",
        block.len(),
        first_line
    );

    // Indexed parallel iterators collect in input order
    let scored: Vec<(Outcome, String)> = pool.install(|| {
        block
            .par_iter()
            .enumerate()
            .map(|(offset, line)| {
                let record = score_line(engine, line, first_line + offset, options);
                let formatted = formatter.format(&record);
                (record.outcome, formatted)
            })
            .collect()
    });

    for (outcome, formatted) in scored {
        summary.record(&outcome);
        output.write_all(formatted.as_bytes())?;
        output.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::Adapters;
    use crate::engine::EngineSettings;
    use crate::output::TsvFormatter;

    fn engine() -> Engine {
        Engine::new(EngineSettings::new("en", "es"), Adapters::none()).unwrap()
    }

    fn run_to_string(input: &str, formatter: &dyn RecordFormatter, options: &BatchOptions) -> (String, BatchSummary) {
        let mut output = Vec::new();
        let summary = run(&engine(), input.as_bytes(), &mut output, formatter, options).unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_score_line_selects_columns() {
        let engine = engine();
        let options = BatchOptions {
            scol: 2,
            tcol: 3,
            ..BatchOptions::default()
        };
        let record = score_line(
            &engine,
            "url\tThe cat sat on the mat.\tEl gato se sentó en la alfombra.",
            1,
            &options,
        );
        assert_eq!(record.source, "The cat sat on the mat.");
        assert_eq!(record.outcome, Outcome::Scored(Verdict::Keep));
    }

    #[test]
    fn test_score_line_wrong_columns() {
        let engine = engine();
        let record = score_line(&engine, "only one column", 7, &BatchOptions::default());
        assert_eq!(record.outcome, Outcome::WrongColumns);
        assert_eq!(record.outcome.annotation(), WRONG_COLS);
        assert!(!record.outcome.is_keep());
    }

    #[test]
    fn test_score_line_zero_column_is_missing() {
        let engine = engine();
        let options = BatchOptions {
            scol: 0,
            ..BatchOptions::default()
        };
        let record = score_line(&engine, "a\tb", 1, &options);
        assert_eq!(record.outcome, Outcome::WrongColumns);
    }

    #[test]
    fn test_run_preserves_order_across_blocks() {
        let input = "The cat sat on the mat.\tEl gato se sentó en la alfombra.\n\
                     \thola\n\
                     broken\n\
                     The dog is in the garden.\tEl perro está en el jardín.\n";
        let options = BatchOptions {
            block_size: 3,
            processes: 2,
            ..BatchOptions::default()
        };
        let formatter = TsvFormatter::new(true, true);
        let (output, summary) = run_to_string(input, &formatter, &options);

        assert_eq!(output, "1\tkeep\n0\tno_empty(left)\n0\tc_wrong_cols\n1\tkeep\n");
        assert_eq!(summary.total, 4);
        assert_eq!(summary.kept, 2);
        assert_eq!(summary.discarded, 1);
        assert_eq!(summary.malformed, 1);
    }

    #[test]
    fn test_run_replaces_invalid_utf8() {
        let input: &[u8] = b"The cat sat on the mat.\tEl gato se sent\xc3\xb3 en la alfombra.\n\
                             Bad \xff byte here today\tMal byte aqu\xc3\xad hoy\n\
                             The dog is in the garden.\tEl perro est\xc3\xa1 en el jard\xc3\xadn.\n";
        let mut output = Vec::new();
        let summary = run(
            &engine(),
            input,
            &mut output,
            &TsvFormatter::new(false, false),
            &BatchOptions::default(),
        )
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(summary.total, 3);
        assert_eq!(summary.malformed, 0);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("\t1"));
        assert!(lines[1].starts_with("Bad \u{FFFD} byte here today\t"));
        assert!(lines[2].ends_with("\t1"));
    }

    #[test]
    fn test_run_keeps_carriage_return() {
        let formatter = TsvFormatter::new(false, false);
        let (output, _) = run_to_string("a b c\td e f\r\n", &formatter, &BatchOptions::default());
        assert!(output.starts_with("a b c\td e f\r\t"));
    }

    #[test]
    fn test_run_empty_input() {
        let (output, summary) = run_to_string("", &TsvFormatter::new(false, false), &BatchOptions::default());
        assert!(output.is_empty());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.throughput(), 0.0);
    }
}
