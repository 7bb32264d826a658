//! Error types for the conversion pipeline
//!
//! Each layer reports its own error type. [`LexError`] and [`ParseError`] are
//! internal and carry byte offsets only; [`ConversionError`] is what callers of
//! [`crate::convert`] see, enriched with line/column and a source excerpt.

use crate::ast::location::SourceLocation;
use crate::formats::FormatError;
use crate::lexer::tokens::{Style, TokenKind};
use std::ops::Range;
use thiserror::Error;

/// Fatal tokenizer failures.
///
/// None of these should be reachable with a valid dialect; they signal a gap in
/// the dialect configuration or a broken context-stack invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("no token pattern matches at offset {offset}")]
    NoMatch { offset: usize },

    #[error("lexical context stack underflow at offset {offset}")]
    ContextUnderflow { offset: usize },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match self {
            LexError::NoMatch { offset } | LexError::ContextUnderflow { offset } => *offset,
        }
    }
}

/// Grammar failures raised by the tree builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected {found:?}")]
    UnexpectedToken { found: TokenKind, span: Range<usize> },

    #[error("unexpected end of input")]
    UnexpectedEnd { span: Range<usize> },

    #[error("{kind:?} must be followed by a {expected:?} delimiter")]
    BrokenAdjacency {
        kind: TokenKind,
        expected: Style,
        span: Range<usize>,
    },

    #[error("{message}")]
    Invalid { message: String, span: Range<usize> },
}

impl ParseError {
    pub fn span(&self) -> &Range<usize> {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEnd { span }
            | ParseError::BrokenAdjacency { span, .. }
            | ParseError::Invalid { span, .. } => span,
        }
    }
}

/// Errors produced while building or validating a dialect description.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    #[error("dialect '{dialect}': {field} must not be empty")]
    EmptyGlyph { dialect: String, field: &'static str },

    #[error("dialect '{dialect}': {first} and {second} share the glyph '{glyph}'")]
    DuplicateGlyph {
        dialect: String,
        first: &'static str,
        second: &'static str,
        glyph: String,
    },

    #[error("dialect '{dialect}': {field} must not contain whitespace")]
    WhitespaceGlyph { dialect: String, field: &'static str },

    #[error("dialect '{dialect}': heading markers {min}..={max} are not a valid range")]
    HeadingRange { dialect: String, min: usize, max: usize },

    #[error("dialect '{dialect}': {message}")]
    Invalid { dialect: String, message: String },

    #[error("unknown dialect '{0}'")]
    Unknown(String),
}

/// User-visible conversion failure.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("lexical error at line {line}, column {column}: {source} (near `{excerpt}`)")]
    Lex {
        source: LexError,
        offset: usize,
        line: usize,
        column: usize,
        excerpt: String,
    },

    #[error("parse error at line {line}, column {column}: {source} (near `{excerpt}`)")]
    Parse {
        source: ParseError,
        offset: usize,
        line: usize,
        column: usize,
        excerpt: String,
    },

    #[error(transparent)]
    Dialect(#[from] DialectError),

    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ConversionError {
    pub fn from_lex(err: LexError, source: &str) -> Self {
        let offset = err.offset();
        let (line, column, excerpt) = diagnostics(source, offset);
        ConversionError::Lex {
            source: err,
            offset,
            line,
            column,
            excerpt,
        }
    }

    pub fn from_parse(err: ParseError, source: &str) -> Self {
        let offset = err.span().start;
        let (line, column, excerpt) = diagnostics(source, offset);
        ConversionError::Parse {
            source: err,
            offset,
            line,
            column,
            excerpt,
        }
    }

    /// Byte offset of the failure, when it is tied to a source position.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ConversionError::Lex { offset, .. } | ConversionError::Parse { offset, .. } => {
                Some(*offset)
            }
            _ => None,
        }
    }
}

fn diagnostics(source: &str, offset: usize) -> (usize, usize, String) {
    let location = SourceLocation::new(source);
    let position = location.position(offset);
    (
        position.line + 1,
        position.column + 1,
        location.excerpt(offset, 20),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_error_reports_line_and_column() {
        let source = "first line\nsecond **line";
        let err = ConversionError::from_parse(
            ParseError::UnexpectedEnd {
                span: source.len()..source.len(),
            },
            source,
        );
        match &err {
            ConversionError::Parse { line, column, .. } => {
                assert_eq!(*line, 2);
                assert_eq!(*column, 14);
            }
            other => panic!("Expected parse error, found {other:?}"),
        }
        assert_eq!(err.offset(), Some(source.len()));
        assert!(err.to_string().starts_with("parse error at line 2, column 14"));
    }

    #[test]
    fn test_lex_error_display() {
        let err = LexError::ContextUnderflow { offset: 4 };
        assert_eq!(
            err.to_string(),
            "lexical context stack underflow at offset 4"
        );
        assert_eq!(err.offset(), 4);
    }
}
