//! Configuration file parsing and validation

pub mod hardrules_toml;

pub use hardrules_toml::{CONFIG_FILE, Config, HardrulesMeta, RuleValue, RulesConfig};
