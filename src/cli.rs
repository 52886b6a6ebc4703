//! CLI argument parsing and command dispatch

pub mod args;
pub(crate) mod common;
pub mod filter;
pub mod init;
pub mod list;

// Re-export types for convenient access
pub use args::{Cli, Command, FilterArgs, OutputFormat, RecordFormat};
pub use common::{EXIT_ERROR, EXIT_PARSE_ERROR, EXIT_RECORD_ERRORS, EXIT_SUCCESS, init_logging};
