//! Parser combinator helpers shared by the element parsers.

use chumsky::prelude::*;
use chumsky::BoxedParser;
use std::ops::Range;

use crate::ast::Inline;
use crate::lexer::{Token, TokenKind};

/// Type alias for parser error
pub(crate) type ParserError = Simple<Token>;

/// A boxed parser over the token stream
pub(crate) type Boxed<O> = BoxedParser<'static, Token, O, ParserError>;

/// Helper: match a specific token kind
pub(crate) fn token(expected: TokenKind) -> impl Parser<Token, Token, Error = ParserError> + Clone {
    filter(move |t: &Token| t.kind == expected)
}

/// Helper: match any token whose kind satisfies `predicate`
pub(crate) fn kind<F>(predicate: F) -> impl Parser<Token, Token, Error = ParserError> + Clone
where
    F: Fn(&TokenKind) -> bool + Clone,
{
    filter(move |t: &Token| predicate(&t.kind))
}

/// Separators between blocks: soft newlines and paragraph breaks
pub(crate) fn separator() -> impl Parser<Token, (), Error = ParserError> + Clone {
    kind(TokenKind::is_separator).ignored()
}

/// Helper: concatenate the inline groups produced by repeated inline parsers
pub(crate) fn flatten(groups: Vec<Vec<Inline>>) -> Vec<Inline> {
    groups.into_iter().flatten().collect()
}

/// Helper: try `parsers` in order, `None` when there are none
pub(crate) fn first_of<O: 'static>(parsers: &[Boxed<O>]) -> Option<Boxed<O>> {
    parsers
        .iter()
        .cloned()
        .reduce(|acc, parser| acc.or(parser).boxed())
}

/// Helper: the byte range covered by a token and everything after it
pub(crate) fn extend_span(first: &Range<usize>, whole: &Range<usize>) -> Range<usize> {
    first.start.min(whole.start)..first.end.max(whole.end)
}
