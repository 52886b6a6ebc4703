#![forbid(unsafe_code)]

//! Rule registry: the ordered table of predicates
//!
//! Registration order is evaluation order. It decides which rule is reported
//! first when a pair fails several of them, so it is part of the observable
//! behaviour of the engine.

use crate::error::RuleError;
use crate::rules::RuleSpec;
use crate::rules::builtin;
use std::collections::HashMap;

/// Ordered collection of rules, addressable by name
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<RuleSpec>,
    index: HashMap<&'static str, usize>,
}

impl RuleRegistry {
    /// Create a new empty RuleRegistry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in rule table
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for spec in builtin::rules() {
            // Built-in names are unique; a clash here is a programming error
            // caught by the registry tests.
            if let Err(err) = registry.register(spec) {
                tracing::error!("{}", err);
            }
        }
        registry
    }

    /// Append a rule at the end of the evaluation order
    ///
    /// # Errors
    ///
    /// Returns `RuleError::Duplicate` if a rule with the same name exists.
    pub fn register(&mut self, spec: RuleSpec) -> Result<(), RuleError> {
        if self.index.contains_key(spec.name) {
            return Err(RuleError::Duplicate(spec.name.to_string()));
        }
        self.index.insert(spec.name, self.rules.len());
        self.rules.push(spec);
        Ok(())
    }

    /// Get a rule by name
    pub fn get(&self, name: &str) -> Option<&RuleSpec> {
        self.index.get(name).map(|&idx| &self.rules[idx])
    }

    /// Look up the predicate behind a configured rule name
    ///
    /// # Errors
    ///
    /// Returns `RuleError::NotImplemented` if no rule has this name.
    pub fn resolve(&self, name: &str) -> Result<&RuleSpec, RuleError> {
        self.get(name)
            .ok_or_else(|| RuleError::NotImplemented(name.to_string()))
    }

    /// Iterate over the rules in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = &RuleSpec> {
        self.rules.iter()
    }

    /// Get the number of rules in the registry
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
