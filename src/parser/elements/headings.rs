//! Heading parsing
//!
//! Grammar: `Heading := HeadingStart(n) Word* HeadingEnd(n)`
//!
//! Both markers carry the level already decoded by the tokenizer; a mismatch
//! can only come from a hand-built token stream and is reported as invalid.

use chumsky::prelude::*;

use crate::ast::{Heading, Inline};
use crate::lexer::{Token, TokenKind};
use crate::parser::combinators::{kind, token, ParserError};

pub(crate) fn heading() -> impl Parser<Token, Heading, Error = ParserError> + Clone {
    kind(|k| matches!(k, TokenKind::HeadingStart(_)))
        .then(token(TokenKind::Word).repeated())
        .then(kind(|k| matches!(k, TokenKind::HeadingEnd(_))))
        .try_map(|((start, words), end), span| match (start.kind, end.kind) {
            (TokenKind::HeadingStart(open), TokenKind::HeadingEnd(close)) if open == close => {
                let content = words.into_iter().map(|w| Inline::Plain(w.text)).collect();
                Ok(Heading::new(open, content).at(start.span.start..end.span.end))
            }
            (open, close) => Err(Simple::custom(
                span,
                format!("heading opened with {open:?} is closed with {close:?}"),
            )),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chumsky::Stream;

    fn run(kinds: &[(TokenKind, &str)]) -> Result<Heading, Vec<ParserError>> {
        let tokens: Vec<_> = kinds
            .iter()
            .enumerate()
            .map(|(i, (k, text))| {
                let span = i * 10..i * 10 + text.len();
                (Token::new(*k, *text, span.clone()), span)
            })
            .collect();
        let eoi = tokens.len() * 10;
        heading()
            .then_ignore(end())
            .parse(Stream::from_iter(eoi..eoi, tokens.into_iter()))
    }

    #[test]
    fn test_heading_words() {
        let heading = run(&[
            (TokenKind::HeadingStart(4), "===="),
            (TokenKind::Word, "sit"),
            (TokenKind::Word, "dolor"),
            (TokenKind::HeadingEnd(4), "===="),
        ])
        .unwrap();
        assert_eq!(heading.level, 4);
        assert_eq!(heading.text(), "sit dolor");
        assert_eq!(heading.span, 0..34);
    }

    #[test]
    fn test_mismatched_levels_fail() {
        assert!(run(&[
            (TokenKind::HeadingStart(1), "="),
            (TokenKind::Word, "x"),
            (TokenKind::HeadingEnd(2), "=="),
        ])
        .is_err());
    }
}
