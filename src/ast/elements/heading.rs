//! Heading element
//!
//! Headings hold plain words only; inline styles are not recognized between
//! heading markers. The level is already resolved through the dialect's
//! marker mapping, so `= Title =` in txt2tags and `====== Title ======` in
//! DokuWiki both become level 1.

use super::super::traits::{AstNode, Visitor};
use super::inline::{normalize, plain_text, Inline};
use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub level: u8,
    pub content: Vec<Inline>,
    pub span: Range<usize>,
}

impl Heading {
    pub fn new(level: u8, content: Vec<Inline>) -> Self {
        Self {
            level,
            content: normalize(content),
            span: 0..0,
        }
    }

    pub fn at(mut self, span: Range<usize>) -> Self {
        self.span = span;
        self
    }

    pub fn text(&self) -> String {
        plain_text(&self.content)
    }
}

impl AstNode for Heading {
    fn node_type(&self) -> &'static str {
        "Heading"
    }

    fn display_label(&self) -> String {
        format!("h{} {}", self.level, self.text())
    }

    fn span(&self) -> &Range<usize> {
        &self.span
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_heading(self);
        visitor.leave_heading(self);
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Heading(h{}, '{}')", self.level, self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading() {
        let heading = Heading::new(4, vec![Inline::plain("sit"), Inline::plain("dolor")]);
        assert_eq!(heading.text(), "sit dolor");
        assert_eq!(heading.display_label(), "h4 sit dolor");
        assert_eq!(format!("{heading}"), "Heading(h4, 'sit dolor')");
    }
}
