//! Document element
//!
//! The root of the tree: an ordered sequence of blocks. An empty or
//! whitespace-only source produces a document without blocks.

use super::super::traits::{visit_children, Visitor};
use super::block::Block;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn count_by_type(&self) -> (usize, usize, usize) {
        let paragraphs = self.blocks.iter().filter(|b| b.is_paragraph()).count();
        let headings = self.blocks.iter().filter(|b| b.is_heading()).count();
        let lists = self.blocks.iter().filter(|b| b.is_list()).count();
        (paragraphs, headings, lists)
    }

    /// Walk every block in source order
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        visit_children(visitor, &self.blocks);
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (paragraphs, headings, lists) = self.count_by_type();
        write!(
            f,
            "Document({} blocks: {paragraphs} paragraphs, {headings} headings, {lists} lists)",
            self.blocks.len()
        )
    }
}
