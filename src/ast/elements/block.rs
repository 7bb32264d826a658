//! Block - the top-level unit of a document

use super::super::traits::{AstNode, Visitor};
use super::heading::Heading;
use super::list::List;
use super::paragraph::Paragraph;
use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Block {
    Paragraph(Paragraph),
    Heading(Heading),
    List(List),
}

impl Block {
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Block::List(_))
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_heading(&self) -> Option<&Heading> {
        match self {
            Block::Heading(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Block::List(l) => Some(l),
            _ => None,
        }
    }
}

impl AstNode for Block {
    fn node_type(&self) -> &'static str {
        match self {
            Block::Paragraph(p) => p.node_type(),
            Block::Heading(h) => h.node_type(),
            Block::List(l) => l.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Block::Paragraph(p) => p.display_label(),
            Block::Heading(h) => h.display_label(),
            Block::List(l) => l.display_label(),
        }
    }

    fn span(&self) -> &Range<usize> {
        match self {
            Block::Paragraph(p) => p.span(),
            Block::Heading(h) => h.span(),
            Block::List(l) => l.span(),
        }
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Block::Paragraph(p) => p.accept(visitor),
            Block::Heading(h) => h.accept(visitor),
            Block::List(l) => l.accept(visitor),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Paragraph(p) => write!(f, "{p}"),
            Block::Heading(h) => write!(f, "{h}"),
            Block::List(l) => write!(f, "{l}"),
        }
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<Heading> for Block {
    fn from(heading: Heading) -> Self {
        Block::Heading(heading)
    }
}

impl From<List> for Block {
    fn from(list: List) -> Self {
        Block::List(list)
    }
}
