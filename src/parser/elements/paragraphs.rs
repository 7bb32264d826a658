//! Paragraph parsing
//!
//! Grammar: `Paragraph := Inline+`
//!
//! A paragraph ends wherever inline content stops: at a paragraph break, at a
//! token starting another block, or at the end of input.

use chumsky::prelude::*;

use crate::ast::{Inline, Paragraph};
use crate::lexer::Token;
use crate::parser::combinators::{flatten, ParserError};

pub(crate) fn paragraph<P>(inline: P) -> impl Parser<Token, Paragraph, Error = ParserError> + Clone
where
    P: Parser<Token, Vec<Inline>, Error = ParserError> + Clone,
{
    inline
        .repeated()
        .at_least(1)
        .map(flatten)
        .map_with_span(|content, span| Paragraph::new(content).at(span))
}
