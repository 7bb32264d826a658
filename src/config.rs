//! Configuration loading
//!
//! `defaults/smc.default.toml` is embedded into the crate so the documented
//! defaults and runtime behavior stay in sync. User files and CLI overrides
//! are layered on top via [`Loader`] before deserializing into [`SmcConfig`].

use crate::dialect::{Dialect, DialectRegistry};
use crate::error::DialectError;
use crate::formats::HtmlOptions;
use crate::processor::Converter;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/smc.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SmcConfig {
    pub convert: ConvertConfig,
    pub html: HtmlConfig,
    pub logging: LoggingConfig,
    /// Dialects declared in configuration, keyed by name
    #[serde(default)]
    pub dialects: BTreeMap<String, Dialect>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub dialect: String,
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub escape_text: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

impl SmcConfig {
    /// Built-in dialects plus the ones declared under `[dialects]`
    pub fn dialect_registry(&self) -> Result<DialectRegistry, DialectError> {
        let mut registry = DialectRegistry::with_defaults();
        registry.extend(self.dialects.clone())?;
        Ok(registry)
    }

    pub fn html_options(&self) -> HtmlOptions {
        HtmlOptions {
            escape_text: self.html.escape_text,
        }
    }

    /// A converter for `convert.dialect` honoring the `[html]` settings
    pub fn converter(&self) -> Result<Converter, DialectError> {
        let registry = self.dialect_registry()?;
        let dialect = registry.resolve(&self.convert.dialect)?.clone();
        Ok(Converter::new(dialect)?.with_html_options(self.html_options()))
    }
}

/// Builds an [`SmcConfig`] from `defaults/smc.default.toml` plus whatever
/// the caller layers on top; later layers win key by key.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    /// Layer a TOML file that must exist, e.g. the one named by `--config`
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file only if it exists, e.g. `./smc.toml`
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Set one dotted key such as `convert.dialect`; applied after every file
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<SmcConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone
pub fn load_defaults() -> Result<SmcConfig, ConfigError> {
    Loader::new().build()
}
