//! Dialect registry
//!
//! Resolves dialects by name. The two built-in dialects are always present
//! (with the short aliases `t2t` and `doku`); more can be registered from
//! configuration, which makes adding a dialect a matter of writing a table in
//! a config file.

use super::Dialect;
use crate::error::DialectError;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use tracing::debug;

static BUILTIN: Lazy<Vec<Dialect>> = Lazy::new(|| vec![Dialect::txt2tags(), Dialect::dokuwiki()]);

const ALIASES: &[(&str, &str)] = &[("t2t", "txt2tags"), ("doku", "dokuwiki")];

#[derive(Debug, Clone)]
pub struct DialectRegistry {
    dialects: BTreeMap<String, Dialect>,
}

impl DialectRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            dialects: BTreeMap::new(),
        }
    }

    /// Create a registry holding the built-in dialects
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for dialect in BUILTIN.iter() {
            registry.dialects.insert(dialect.name.clone(), dialect.clone());
        }
        registry
    }

    /// Validate and register a dialect under its name
    ///
    /// A dialect with the same name is replaced.
    pub fn register(&mut self, dialect: Dialect) -> Result<(), DialectError> {
        dialect.validate()?;
        debug!(name = %dialect.name, "registered dialect");
        self.dialects.insert(dialect.name.clone(), dialect);
        Ok(())
    }

    /// Register every dialect of a `name -> dialect` table, naming each one
    /// after its key
    pub fn extend<I>(&mut self, dialects: I) -> Result<(), DialectError>
    where
        I: IntoIterator<Item = (String, Dialect)>,
    {
        for (name, mut dialect) in dialects {
            dialect.name = name;
            self.register(dialect)?;
        }
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Dialect> {
        let name = ALIASES
            .iter()
            .find(|(alias, _)| *alias == name)
            .map(|(_, target)| *target)
            .unwrap_or(name);
        self.dialects.get(name)
    }

    /// Like [`DialectRegistry::get`], failing with [`DialectError::Unknown`]
    pub fn resolve(&self, name: &str) -> Result<&Dialect, DialectError> {
        self.get(name)
            .ok_or_else(|| DialectError::Unknown(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All registered dialect names (sorted)
    pub fn list_dialects(&self) -> Vec<String> {
        self.dialects.keys().cloned().collect()
    }
}

impl Default for DialectRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
