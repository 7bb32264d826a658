//! Paragraph element
//!
//! A paragraph is a run of inline content spanning one or more source lines,
//! terminated by a blank line, a block-starting line (heading or bullet) or
//! the end of input. Single newlines inside it are kept as soft breaks.

use super::super::traits::{AstNode, Visitor};
use super::inline::{normalize, plain_text, Inline};
use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub content: Vec<Inline>,
    pub span: Range<usize>,
}

impl Paragraph {
    pub fn new(content: Vec<Inline>) -> Self {
        Self {
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

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        let text = self.text();
        if text.chars().count() > 50 {
            format!("{}...", text.chars().take(50).collect::<String>())
        } else {
            text
        }
    }

    fn span(&self) -> &Range<usize> {
        &self.span
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_paragraph(self);
        visitor.leave_paragraph(self);
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Paragraph({} inlines)", self.content.len())
    }
}
