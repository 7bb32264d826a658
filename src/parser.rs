//! Tree builder
//!
//! A chumsky grammar over the semantic token stream. Tokens are pulled from
//! the tokenizer lazily through a [`Stream`]; the finished [`Document`] is
//! returned whole, or the conversion fails.
//!
//! Error policy: a style left open when its block ends degrades to literal
//! text (see [`elements::inlines`]). Every other grammar failure aborts the
//! conversion with the offending token and its position.

mod combinators;
mod elements;
mod stream;

use chumsky::error::SimpleReason;
use chumsky::prelude::*;
use chumsky::Stream;
use tracing::debug;

use crate::ast::Document;
use crate::dialect::Dialect;
use crate::error::{ConversionError, LexError, ParseError};
use crate::lexer::{lex, Token};
use combinators::ParserError;
use elements::document::document;
use stream::{CheckedTokens, Fault};

/// Tokenize and parse `source`
pub fn parse(source: &str, dialect: &Dialect) -> Result<Document, ConversionError> {
    parse_tokens(lex(source, dialect), source, dialect)
}

/// Parse a token stream produced from `source`
///
/// The tokens need not come from [`lex`]; composite closers are checked for a
/// matching follow-up token either way.
pub fn parse_tokens<I>(tokens: I, source: &str, dialect: &Dialect) -> Result<Document, ConversionError>
where
    I: IntoIterator<Item = Result<Token, LexError>>,
{
    let eoi = source.len()..source.len();
    let mut fault = None;
    let result = document(dialect.lists.max_depth).parse(Stream::from_iter(
        eoi.clone(),
        CheckedTokens::new(tokens.into_iter(), &mut fault),
    ));

    if let Some(fault) = fault {
        return Err(match fault {
            Fault::Lex(err) => ConversionError::from_lex(err, source),
            Fault::Parse(err) => ConversionError::from_parse(err, source),
        });
    }

    match result {
        Ok(document) => {
            debug!(blocks = document.len(), "built document");
            Ok(document)
        }
        Err(errors) => {
            let err = errors
                .into_iter()
                .next()
                .map(parse_error)
                .unwrap_or(ParseError::UnexpectedEnd { span: eoi });
            Err(ConversionError::from_parse(err, source))
        }
    }
}

fn parse_error(error: ParserError) -> ParseError {
    let span = error.span();
    match error.reason() {
        SimpleReason::Custom(message) => ParseError::Invalid {
            message: message.clone(),
            span,
        },
        _ => match error.found() {
            Some(token) => ParseError::UnexpectedToken {
                found: token.kind,
                span,
            },
            None => ParseError::UnexpectedEnd { span },
        },
    }
}
