//! Checked token stream
//!
//! The grammar consumes plain tokens, but the tokenizer yields `Result`s and
//! composite closers carry a promise about the token after them. This adapter
//! sits between the two: it stops the stream at the first lexical error or
//! broken promise and parks the failure where the caller can pick it up after
//! parsing.

use crate::error::{LexError, ParseError};
use crate::lexer::tokens::Style;
use crate::lexer::{Token, TokenKind};
use std::ops::Range;

/// Failure detected while feeding the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Fault {
    Lex(LexError),
    Parse(ParseError),
}

pub(crate) struct CheckedTokens<'f, I> {
    tokens: I,
    /// A composite closer whose adjacent style must be touched next
    pending_adjacent: Option<(TokenKind, Style, Range<usize>)>,
    fault: &'f mut Option<Fault>,
}

impl<'f, I> CheckedTokens<'f, I>
where
    I: Iterator<Item = Result<Token, LexError>>,
{
    pub(crate) fn new(tokens: I, fault: &'f mut Option<Fault>) -> Self {
        Self {
            tokens,
            pending_adjacent: None,
            fault,
        }
    }

    fn broken_adjacency(&mut self) {
        if let Some((kind, expected, span)) = self.pending_adjacent.take() {
            *self.fault = Some(Fault::Parse(ParseError::BrokenAdjacency {
                kind,
                expected,
                span,
            }));
        }
    }
}

impl<I> Iterator for CheckedTokens<'_, I>
where
    I: Iterator<Item = Result<Token, LexError>>,
{
    type Item = (Token, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.fault.is_some() {
            return None;
        }
        match self.tokens.next() {
            None => {
                self.broken_adjacency();
                None
            }
            Some(Err(err)) => {
                *self.fault = Some(Fault::Lex(err));
                None
            }
            Some(Ok(token)) => {
                if let Some((_, expected, _)) = &self.pending_adjacent {
                    if !token.kind.touches(*expected) {
                        self.broken_adjacency();
                        return None;
                    }
                    self.pending_adjacent = None;
                }
                if let TokenKind::CloseAdjacent(_, adjacent) = token.kind {
                    self.pending_adjacent = Some((token.kind, adjacent, token.span.clone()));
                }
                let span = token.span.clone();
                Some((token, span))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind, at: usize) -> Result<Token, LexError> {
        Ok(Token::new(kind, "", at..at + 2))
    }

    #[test]
    fn test_passes_valid_adjacency() {
        let mut fault = None;
        let tokens = vec![
            tok(TokenKind::CloseAdjacent(Style::Bold, Style::Italic), 0),
            tok(TokenKind::Open(Style::Italic), 2),
        ];
        let count = CheckedTokens::new(tokens.into_iter(), &mut fault).count();
        assert_eq!(count, 2);
        assert_eq!(fault, None);
    }

    #[test]
    fn test_stops_at_broken_adjacency() {
        let mut fault = None;
        let tokens = vec![
            tok(TokenKind::CloseAdjacent(Style::Bold, Style::Italic), 0),
            tok(TokenKind::Word, 2),
            tok(TokenKind::Word, 4),
        ];
        let count = CheckedTokens::new(tokens.into_iter(), &mut fault).count();
        assert_eq!(count, 1);
        assert!(matches!(
            fault,
            Some(Fault::Parse(ParseError::BrokenAdjacency {
                expected: Style::Italic,
                ..
            }))
        ));
    }

    #[test]
    fn test_adjacency_broken_by_end_of_input() {
        let mut fault = None;
        let tokens = vec![tok(TokenKind::CloseAdjacent(Style::Bold, Style::Underline), 0)];
        let count = CheckedTokens::new(tokens.into_iter(), &mut fault).count();
        assert_eq!(count, 1);
        assert!(fault.is_some());
    }

    #[test]
    fn test_stops_at_lex_error() {
        let mut fault = None;
        let tokens = vec![
            tok(TokenKind::Word, 0),
            Err(LexError::NoMatch { offset: 2 }),
            tok(TokenKind::Word, 4),
        ];
        let count = CheckedTokens::new(tokens.into_iter(), &mut fault).count();
        assert_eq!(count, 1);
        assert_eq!(fault, Some(Fault::Lex(LexError::NoMatch { offset: 2 })));
    }
}
