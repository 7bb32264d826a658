//! Inline elements
//!
//! Inline content is what a paragraph, heading or list item is made of: plain
//! words, styled spans (which nest), forced line breaks and soft breaks.
//!
//! Styled spans close in strict LIFO order, so an inline tree can always be
//! rendered without crossing tags:
//!
//! ```text
//! **lorem __//ipsum// sit dolor__** amet
//!
//! Bold
//!   Plain("lorem")
//!   Underline
//!     Italic
//!       Plain("ipsum")
//!     Plain("sit dolor")
//! Plain("amet")
//! ```

use crate::lexer::tokens::Style;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "kebab-case")]
pub enum Inline {
    /// Words joined by single spaces
    Plain(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    Underline(Vec<Inline>),
    /// Forced line break (`\\` in DokuWiki)
    LineBreak,
    /// A single newline inside a paragraph or list item
    SoftBreak,
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Inline::Plain(text.into())
    }

    /// Wrap children in the node matching `style`
    pub fn styled(style: Style, children: Vec<Inline>) -> Self {
        match style {
            Style::Bold => Inline::Bold(children),
            Style::Italic => Inline::Italic(children),
            Style::Underline => Inline::Underline(children),
        }
    }

    pub fn style(&self) -> Option<Style> {
        match self {
            Inline::Bold(_) => Some(Style::Bold),
            Inline::Italic(_) => Some(Style::Italic),
            Inline::Underline(_) => Some(Style::Underline),
            _ => None,
        }
    }

    pub fn children(&self) -> &[Inline] {
        match self {
            Inline::Bold(children) | Inline::Italic(children) | Inline::Underline(children) => {
                children
            }
            _ => &[],
        }
    }

    pub fn node_type(&self) -> &'static str {
        match self {
            Inline::Plain(_) => "Plain",
            Inline::Bold(_) => "Bold",
            Inline::Italic(_) => "Italic",
            Inline::Underline(_) => "Underline",
            Inline::LineBreak => "LineBreak",
            Inline::SoftBreak => "SoftBreak",
        }
    }

    /// Text of this element with all styling removed
    pub fn text(&self) -> String {
        match self {
            Inline::Plain(text) => text.clone(),
            Inline::LineBreak | Inline::SoftBreak => String::new(),
            _ => plain_text(self.children()),
        }
    }
}

impl fmt::Display for Inline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inline::Plain(text) => write!(f, "Plain({text:?})"),
            other => write!(f, "{}({})", other.node_type(), other.children().len()),
        }
    }
}

/// Text of a run of inlines, words separated by single spaces
pub fn plain_text(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(Inline::text)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Merge adjacent `Plain` nodes and drop trailing soft breaks.
///
/// The tree builder produces one `Plain` per word; merging keeps the tree
/// small without changing how it renders, since words are space-joined either
/// way.
pub fn normalize(inlines: Vec<Inline>) -> Vec<Inline> {
    let mut merged: Vec<Inline> = Vec::with_capacity(inlines.len());
    for inline in inlines {
        match (merged.last_mut(), inline) {
            (Some(Inline::Plain(previous)), Inline::Plain(word)) => {
                previous.push(' ');
                previous.push_str(&word);
            }
            (_, inline) => merged.push(inline),
        }
    }
    while matches!(merged.last(), Some(Inline::SoftBreak)) {
        merged.pop();
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_merges_words() {
        let merged = normalize(vec![
            Inline::plain("lorem"),
            Inline::plain("ipsum"),
            Inline::Bold(vec![Inline::plain("sit")]),
            Inline::plain("dolor"),
        ]);
        assert_eq!(
            merged,
            vec![
                Inline::plain("lorem ipsum"),
                Inline::Bold(vec![Inline::plain("sit")]),
                Inline::plain("dolor"),
            ]
        );
    }

    #[test]
    fn test_normalize_keeps_breaks_between_words() {
        let merged = normalize(vec![
            Inline::plain("a"),
            Inline::SoftBreak,
            Inline::plain("b"),
            Inline::SoftBreak,
        ]);
        assert_eq!(
            merged,
            vec![Inline::plain("a"), Inline::SoftBreak, Inline::plain("b")]
        );
    }

    #[test]
    fn test_plain_text_strips_styles() {
        let inlines = vec![
            Inline::plain("lorem"),
            Inline::Bold(vec![
                Inline::plain("ipsum"),
                Inline::Italic(vec![Inline::plain("sit")]),
            ]),
            Inline::LineBreak,
            Inline::plain("amet"),
        ];
        assert_eq!(plain_text(&inlines), "lorem ipsum sit amet");
    }

    #[test]
    fn test_styled_round_trips_style() {
        for style in [Style::Bold, Style::Italic, Style::Underline] {
            assert_eq!(Inline::styled(style, vec![]).style(), Some(style));
        }
        assert_eq!(Inline::LineBreak.style(), None);
    }
}
