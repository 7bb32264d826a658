//! List element
//!
//! A list is a sequence of items sharing one marker kind (bulleted or
//! numbered). Each item owns its inline content and at most one nested list,
//! which holds the deeper-indented items that followed it:
//!
//! ```text
//! - lorem              List(unordered)
//!  - ipsum               Item "lorem"
//!  - sit                   List(unordered) [ipsum, sit]
//! - dolor                Item "dolor"
//! ```
//!
//! Nesting attaches to the trailing item only; the items already collected
//! in the outer list are never re-wrapped.

use super::super::traits::{AstNode, Visitor};
use super::inline::{normalize, plain_text, Inline};
use serde::Serialize;
use std::fmt;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct List {
    pub ordered: bool,
    pub items: Vec<ListItem>,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub content: Vec<Inline>,
    pub nested: Option<List>,
    pub span: Range<usize>,
}

impl List {
    pub fn new(ordered: bool, items: Vec<ListItem>) -> Self {
        Self {
            ordered,
            items,
            span: 0..0,
        }
    }

    pub fn at(mut self, span: Range<usize>) -> Self {
        self.span = span;
        self
    }

    /// Number of nesting levels, counting this list
    pub fn depth(&self) -> usize {
        1 + self
            .items
            .iter()
            .filter_map(|item| item.nested.as_ref())
            .map(List::depth)
            .max()
            .unwrap_or(0)
    }
}

impl AstNode for List {
    fn node_type(&self) -> &'static str {
        "List"
    }

    fn display_label(&self) -> String {
        let kind = if self.ordered { "numbered" } else { "bulleted" };
        format!("{} items, {kind}", self.items.len())
    }

    fn span(&self) -> &Range<usize> {
        &self.span
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_list(self);
        for item in &self.items {
            item.accept(visitor);
        }
        visitor.leave_list(self);
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List({} items)", self.items.len())
    }
}

impl ListItem {
    pub fn new(content: Vec<Inline>) -> Self {
        Self {
            content: normalize(content),
            nested: None,
            span: 0..0,
        }
    }

    pub fn with_nested(mut self, nested: List) -> Self {
        self.nested = Some(nested);
        self
    }

    pub fn at(mut self, span: Range<usize>) -> Self {
        self.span = span;
        self
    }

    pub fn text(&self) -> String {
        plain_text(&self.content)
    }
}

impl AstNode for ListItem {
    fn node_type(&self) -> &'static str {
        "ListItem"
    }

    fn display_label(&self) -> String {
        self.text()
    }

    fn span(&self) -> &Range<usize> {
        &self.span
    }

    fn accept(&self, visitor: &mut dyn Visitor) {
        visitor.visit_list_item(self);
        if let Some(nested) = &self.nested {
            nested.accept(visitor);
        }
        visitor.leave_list_item(self);
    }
}

impl fmt::Display for ListItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListItem('{}')", self.text())
    }
}
