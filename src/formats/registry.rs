//! Output formats by name
//!
//! A [`Formatter`] turns a finished [`Document`] into text. The CLI and
//! [`crate::Converter`] pick one by the name given in `convert.format` or
//! `--to`, so every formatter is reachable through a [`FormatRegistry`].

use crate::ast::Document;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("format '{0}' not found")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Renders a whole document in one output format
pub trait Formatter: Send + Sync {
    /// Lookup key, as typed after `--to`
    fn name(&self) -> &str;

    fn serialize(&self, doc: &Document) -> Result<String, FormatError>;

    /// One-line summary shown by `smc formats`
    fn description(&self) -> &str {
        ""
    }
}

/// Formatters keyed by name, iterated in name order
pub struct FormatRegistry {
    formatters: BTreeMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self {
            formatters: BTreeMap::new(),
        }
    }

    /// `html`, `tag` and `json`
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(super::HtmlFormatter::default());
        registry.register(super::TagFormatter);
        registry.register(super::JsonFormatter);
        registry
    }

    /// Add a formatter, shadowing any earlier one with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        let name = formatter.name().to_string();
        self.formatters.insert(name, Box::new(formatter));
    }

    pub fn resolve(&self, name: &str) -> Result<&dyn Formatter, FormatError> {
        self.formatters
            .get(name)
            .map(|formatter| formatter.as_ref())
            .ok_or_else(|| FormatError::NotFound(name.to_string()))
    }

    pub fn render(&self, doc: &Document, name: &str) -> Result<String, FormatError> {
        self.resolve(name)?.serialize(doc)
    }

    pub fn names(&self) -> Vec<&str> {
        self.formatters.keys().map(String::as_str).collect()
    }

    /// `(name, description)` pairs in name order
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.formatters
            .iter()
            .map(|(name, formatter)| (name.as_str(), formatter.description()))
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
