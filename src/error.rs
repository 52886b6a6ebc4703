//! Error types for hardrules
//!
//! Configuration and rule-table problems are detected while the engine is
//! being built and surface as one of the variants below. Nothing in here is
//! ever produced while a sentence pair is being evaluated.

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML syntax or structure error
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// I/O error while reading a configuration file
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A configured rule name is not part of the rule table
    #[error("Unknown rule in configuration: {0}")]
    UnknownRule(String),

    /// A configured value has the wrong type or is out of range
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// Missing required setting
    #[error("Missing required setting: {0}")]
    MissingField(String),
}

/// Rule-table errors
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// Two rules registered under the same name
    #[error("Duplicate rule name: {0}")]
    Duplicate(String),

    /// A configured rule has no predicate behind it
    #[error("Rule {0} is not implemented")]
    NotImplemented(String),
}

/// Top-level error type for hardrules
#[derive(Debug, thiserror::Error)]
pub enum HardrulesError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rule error
    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
