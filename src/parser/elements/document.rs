//! Document parsing
//!
//! Grammar:
//!
//! ```text
//! Document := SEP* (Block SEP*)* EOF        SEP := Newline | ParagraphBreak
//! Block    := Heading | List | Paragraph
//! ```

use chumsky::prelude::*;

use crate::ast::{Block, Document};
use crate::lexer::Token;
use crate::parser::combinators::{separator, ParserError};
use crate::parser::elements::headings::heading;
use crate::parser::elements::inlines::inline;
use crate::parser::elements::lists::list;
use crate::parser::elements::paragraphs::paragraph;

pub(crate) fn document(max_depth: u8) -> impl Parser<Token, Document, Error = ParserError> {
    let inline = inline();
    let block = choice((
        heading().map(Block::Heading),
        list(inline.clone(), max_depth).map(Block::List),
        paragraph(inline).map(Block::Paragraph),
    ));

    separator()
        .repeated()
        .ignore_then(block.then_ignore(separator().repeated()).repeated())
        .then_ignore(end())
        .map(Document::with_blocks)
}
