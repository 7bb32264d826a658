//! Conversion API
//!
//! [`convert`] is the one-call entry point: markup in, HTML out. [`Converter`]
//! bundles a dialect with a [`FormatRegistry`] for callers that convert many
//! inputs or want an output format other than HTML.
//!
//! ```rust,ignore
//! use simple_markup::{Converter, Dialect};
//!
//! let converter = Converter::new(Dialect::dokuwiki())?;
//! let html = converter.convert("====== Title ======")?;
//! let tree = converter.convert_to("lorem **ipsum**", "tag")?;
//! ```

use crate::ast::Document;
use crate::dialect::Dialect;
use crate::error::{ConversionError, DialectError};
use crate::formats::{FormatRegistry, Formatter, HtmlFormatter, HtmlOptions};
use crate::parser;
use tracing::{debug, info_span};

/// Convert `input` written in `dialect` to HTML
///
/// Empty or whitespace-only input converts to an empty string.
pub fn convert(input: &str, dialect: &Dialect) -> Result<String, ConversionError> {
    let document = parse_document(input, dialect)?;
    Ok(HtmlFormatter::default().render(&document))
}

/// Parse `input` into a document tree without rendering it
pub fn parse_document(input: &str, dialect: &Dialect) -> Result<Document, ConversionError> {
    dialect.validate()?;
    let _span = info_span!("parse", dialect = %dialect.name, bytes = input.len()).entered();
    parser::parse(input, dialect)
}

/// A validated dialect paired with the formats it can render to
pub struct Converter {
    dialect: Dialect,
    formats: FormatRegistry,
}

impl Converter {
    pub fn new(dialect: Dialect) -> Result<Self, DialectError> {
        dialect.validate()?;
        Ok(Self {
            dialect,
            formats: FormatRegistry::with_defaults(),
        })
    }

    /// Replace the `html` formatter with one using `options`
    pub fn with_html_options(mut self, options: HtmlOptions) -> Self {
        self.formats.register(HtmlFormatter::new(options));
        self
    }

    /// Register an additional output format
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formats.register(formatter);
        self
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    pub fn parse(&self, input: &str) -> Result<Document, ConversionError> {
        let _span =
            info_span!("parse", dialect = %self.dialect.name, bytes = input.len()).entered();
        parser::parse(input, &self.dialect)
    }

    /// Convert to HTML
    pub fn convert(&self, input: &str) -> Result<String, ConversionError> {
        self.convert_to(input, "html")
    }

    /// Convert to the named format
    ///
    /// The format is looked up before parsing, so an unknown name fails fast.
    pub fn convert_to(&self, input: &str, format: &str) -> Result<String, ConversionError> {
        let formatter = self.formats.resolve(format)?;
        let document = self.parse(input)?;
        let output = formatter.serialize(&document)?;
        debug!(format, bytes = output.len(), "serialized document");
        Ok(output)
    }
}
