//! # simple-markup
//!
//! Converts documents written in lightweight plain-text markup dialects
//! (a txt2tags-like syntax and a DokuWiki-like syntax) into a document tree,
//! and renders that tree as HTML.
//!
//! The conversion runs in four layers:
//!
//! 1. [`lexer`] - a pull-based tokenizer holding an explicit stack of lexical
//!    contexts (open inline styles, headings). Raw segmentation is done by logos,
//!    the context-sensitive part is a hand-written engine on top.
//! 2. [`dialect`] - the immutable configuration record that parameterizes the
//!    tokenizer and the tree builder for one source syntax.
//! 3. [`parser`] - a chumsky grammar that turns the token stream into an
//!    [`ast::Document`].
//! 4. [`formats`] - renderers walking the finished tree (`html`, `tag`, `json`).
//!
//! ```rust,ignore
//! use simple_markup::{convert, Dialect};
//!
//! let html = convert("lorem **ipsum sit** dolor", &Dialect::txt2tags())?;
//! assert_eq!(html, "<p>lorem <b>ipsum sit</b> dolor</p>");
//! ```
//!
//! ## Testing
//!
//! Structural assertions over parsed documents live in the [testing] module.

pub mod ast;
pub mod config;
pub mod dialect;
pub mod error;
pub mod formats;
pub mod lexer;
pub mod parser;
pub mod processor;
pub mod testing;

pub use ast::Document;
pub use dialect::{Dialect, DialectRegistry};
pub use error::{ConversionError, LexError, ParseError};
pub use processor::{convert, parse_document, Converter};
