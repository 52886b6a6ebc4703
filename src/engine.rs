//! Rule pipeline engine and batch driver

pub mod batch;
pub mod executor;

pub use batch::{BatchOptions, BatchSummary, Outcome, ScoredRecord};
pub use executor::{DEFAULT_LM_THRESHOLD, Engine, EngineSettings};
