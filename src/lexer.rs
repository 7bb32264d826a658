//! Lexer
//!
//! Tokenization runs in two layers:
//! 1. [`base`] - a vanilla logos lexer splitting the source into line breaks,
//!    whitespace and runs of non-whitespace
//! 2. [`engine`] - the context-sensitive [`Tokenizer`], which groups base
//!    tokens into lines ([`lines`]), keeps the lexical context stack
//!    ([`context`]) and emits the semantic [`tokens`]
//!
//! Everything dialect-specific comes from the [`Dialect`] handed in; the
//! engine itself has no per-dialect code paths.

pub mod base;
pub mod context;
pub mod engine;
pub mod lines;
pub mod tokens;

pub use engine::Tokenizer;
pub use tokens::{Style, Token, TokenKind};

use crate::dialect::Dialect;
use crate::error::LexError;

/// Tokenize `source` lazily
pub fn lex<'a>(source: &'a str, dialect: &'a Dialect) -> Tokenizer<'a> {
    Tokenizer::new(source, dialect)
}

/// Tokenize `source` into a vector, stopping at the first error
pub fn lex_all(source: &str, dialect: &Dialect) -> Result<Vec<Token>, LexError> {
    lex(source, dialect).collect()
}
