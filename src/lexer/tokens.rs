//! Token definitions
//!
//! These are the semantic tokens the tree builder consumes. They are produced
//! by the context-sensitive [`super::engine::Tokenizer`], not by logos
//! directly; see [`super::base`] for the raw segmentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Inline formatting styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Bold,
    Italic,
    Underline,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Bold, Style::Italic, Style::Underline];

    pub fn name(&self) -> &'static str {
        match self {
            Style::Bold => "bold",
            Style::Italic => "italic",
            Style::Underline => "underline",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// One or more blank lines between two content lines
    ParagraphBreak,
    /// A single line break inside a block
    Newline,
    Word,
    /// Forced line break
    LineBreak,
    Open(Style),
    Close(Style),
    /// Closes the first style; the second style's delimiter follows with no
    /// text in between
    CloseAdjacent(Style, Style),
    HeadingStart(u8),
    HeadingEnd(u8),
    Bullet { ordered: bool, depth: u8 },
}

impl TokenKind {
    /// Check if this token separates blocks or lines
    pub fn is_separator(&self) -> bool {
        matches!(self, TokenKind::ParagraphBreak | TokenKind::Newline)
    }

    /// Check if this token closes `style`, alone or as part of a composite
    pub fn closes(&self, style: Style) -> bool {
        matches!(self, TokenKind::Close(s) | TokenKind::CloseAdjacent(s, _) if *s == style)
    }

    /// Check if this token opens or closes `style`
    pub fn touches(&self, style: Style) -> bool {
        matches!(self, TokenKind::Open(s) if *s == style) || self.closes(style)
    }
}

/// A semantic token with its source text and byte span
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Range<usize>,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Range<usize>) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    pub fn position(&self) -> usize {
        self.span.start
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Word => write!(f, "Word({:?})", self.text),
            kind => write!(f, "{kind:?}"),
        }
    }
}
