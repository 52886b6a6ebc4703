#![forbid(unsafe_code)]

//! Rule definitions, registry and pipeline configuration

pub mod builtin;
mod pipeline;
mod registry;
mod rule;

// Re-export core types
pub use pipeline::{PipelineConfig, PipelineEntry};
pub use registry::RuleRegistry;
pub use rule::{Arity, PairCheck, RuleCheck, RuleContext, RuleParam, RuleSpec, SideCheck};
