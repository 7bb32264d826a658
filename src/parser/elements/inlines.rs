//! Inline content parsing
//!
//! Grammar:
//!
//! ```text
//! Inline    := Word | LineBreak | Newline | Styled
//! Styled(s) := Open(s) Inline* Closer(s)?
//! Closer(s) := Close(s) | CloseAdjacent(s, _)
//! ```
//!
//! Each inline parser yields a group of nodes rather than one node, because a
//! style left open when its block ends degrades to literal text: the opening
//! glyph followed by whatever was parsed inside.

use chumsky::prelude::*;
use tracing::warn;

use crate::ast::Inline;
use crate::lexer::tokens::Style;
use crate::lexer::{Token, TokenKind};
use crate::parser::combinators::{flatten, kind, token, ParserError};

/// Parse one inline element
pub(crate) fn inline() -> impl Parser<Token, Vec<Inline>, Error = ParserError> + Clone {
    recursive(|inline| {
        let word = token(TokenKind::Word).map(|t: Token| vec![Inline::Plain(t.text)]);
        let line_break = token(TokenKind::LineBreak).to(vec![Inline::LineBreak]);
        let soft_break = token(TokenKind::Newline).to(vec![Inline::SoftBreak]);

        choice((
            word,
            line_break,
            soft_break,
            styled(Style::Bold, inline.clone()),
            styled(Style::Italic, inline.clone()),
            styled(Style::Underline, inline),
        ))
    })
}

/// Parse a styled span, degrading to text when its closer never comes
fn styled<P>(style: Style, inline: P) -> impl Parser<Token, Vec<Inline>, Error = ParserError> + Clone
where
    P: Parser<Token, Vec<Inline>, Error = ParserError> + Clone,
{
    token(TokenKind::Open(style))
        .then(
            inline
                .repeated()
                .map(flatten)
                .map_with_span(|children, span| (children, span)),
        )
        .then(kind(move |k| k.closes(style)).or_not())
        .map(move |((open, (children, content_span)), closer)| match closer {
            Some(_) => vec![Inline::styled(style, children)],
            None => {
                warn!(
                    %style,
                    offset = open.span.start,
                    "unclosed {style}, keeping its delimiter as text"
                );
                let glued = content_span.start == open.span.end;
                degrade(open, children, glued)
            }
        })
}

/// The opening glyph becomes text, joined to the following word when no
/// whitespace separated them in the source
fn degrade(open: Token, mut children: Vec<Inline>, glued: bool) -> Vec<Inline> {
    match children.first_mut() {
        Some(Inline::Plain(text)) if glued => {
            text.insert_str(0, &open.text);
        }
        _ => children.insert(0, Inline::Plain(open.text)),
    }
    children
}
