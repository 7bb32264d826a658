//! Raw segmentation using the logos lexer
//!
//! The base layer knows nothing about dialects. It only splits the source into
//! line breaks, horizontal whitespace and runs of non-whitespace characters;
//! every higher-level decision is made by the engine on top of these.

use crate::error::LexError;
use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseToken {
    #[regex(r"\r?\n")]
    Newline,

    #[regex(r"[ \t\r\x0B\x0C]+")]
    Whitespace,

    #[regex(r"[^ \t\r\n\x0B\x0C]+")]
    Run,
}

/// Tokenize source into base tokens with their spans
///
/// A position no pattern matches becomes [`LexError::NoMatch`].
pub fn tokenize(source: &str) -> impl Iterator<Item = Result<(BaseToken, Range<usize>), LexError>> + '_ {
    let mut lexer = BaseToken::lexer(source);
    std::iter::from_fn(move || {
        let result = lexer.next()?;
        let span = lexer.span();
        Some(result.map(|token| (token, span.clone())).map_err(|_| LexError::NoMatch {
            offset: span.start,
        }))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<BaseToken> {
        tokenize(source).map(|r| r.unwrap().0).collect()
    }

    #[test]
    fn test_tokenize_words() {
        let tokens: Vec<_> = tokenize("hello world").map(|r| r.unwrap()).collect();
        assert_eq!(
            tokens,
            vec![
                (BaseToken::Run, 0..5),
                (BaseToken::Whitespace, 5..6),
                (BaseToken::Run, 6..11),
            ]
        );
    }

    #[test]
    fn test_crlf_is_one_newline() {
        assert_eq!(
            kinds("a\r\nb\n"),
            vec![
                BaseToken::Run,
                BaseToken::Newline,
                BaseToken::Run,
                BaseToken::Newline
            ]
        );
    }

    #[test]
    fn test_tabs_and_spaces_merge() {
        assert_eq!(
            kinds("\t   **x**"),
            vec![BaseToken::Whitespace, BaseToken::Run]
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(kinds(""), vec![]);
    }

    #[test]
    fn test_unicode_runs() {
        let tokens: Vec<_> = tokenize("zażółć gęślą").map(|r| r.unwrap()).collect();
        assert_eq!(tokens[0], (BaseToken::Run, 0..10));
        assert_eq!(tokens[2].0, BaseToken::Run);
    }
}
