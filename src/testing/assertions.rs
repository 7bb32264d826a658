//! Fluent assertion API for document trees

use super::matchers::TextMatch;
use crate::ast::{AstNode, Block, Document, Heading, Inline, List, ListItem, Paragraph};
use crate::lexer::tokens::Style;

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a document
pub fn assert_doc(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

// ============================================================================
// Document Assertions
// ============================================================================

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of blocks in the document
    pub fn block_count(self, expected: usize) -> Self {
        let actual = self.doc.blocks.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} blocks, found {} blocks: [{}]",
            expected,
            actual,
            summarize_blocks(&self.doc.blocks)
        );
        self
    }

    pub fn is_empty(self) -> Self {
        self.block_count(0)
    }

    /// Assert on a specific block by index
    pub fn block<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.doc.blocks.len(),
            "Block index {} out of bounds (document has {} blocks)",
            index,
            self.doc.blocks.len()
        );
        assertion(BlockAssertion {
            block: &self.doc.blocks[index],
            context: format!("blocks[{index}]"),
        });
        self
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a Block,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.block {
            Block::Paragraph(para) => ParagraphAssertion {
                para,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Paragraph, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    pub fn assert_heading(self) -> HeadingAssertion<'a> {
        match self.block {
            Block::Heading(heading) => HeadingAssertion {
                heading,
                context: self.context,
            },
            other => panic!(
                "{}: Expected Heading, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    pub fn assert_list(self) -> ListAssertion<'a> {
        match self.block {
            Block::List(list) => ListAssertion {
                list,
                context: self.context,
            },
            other => panic!(
                "{}: Expected List, found {}",
                self.context,
                other.node_type()
            ),
        }
    }

    /// Assert the block covers exactly `start..end` of the source
    pub fn span(self, start: usize, end: usize) -> Self {
        let actual = self.block.span();
        assert_eq!(
            *actual,
            start..end,
            "{}: Expected span {}..{}, found {:?}",
            self.context,
            start,
            end,
            actual
        );
        self
    }
}

// ============================================================================
// Paragraph Assertions
// ============================================================================

pub struct ParagraphAssertion<'a> {
    para: &'a Paragraph,
    context: String,
}

impl<'a> ParagraphAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.para.text(), &self.context);
        self
    }
    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.para.text(), &self.context);
        self
    }
    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.para.text(), &self.context);
        self
    }
    pub fn inline_count(self, expected: usize) -> Self {
        assert_inline_count(&self.para.content, expected, &self.context);
        self
    }
    pub fn inline<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        assertion(inline_at(&self.para.content, index, &self.context));
        self
    }
}

// ============================================================================
// Heading Assertions
// ============================================================================

pub struct HeadingAssertion<'a> {
    heading: &'a Heading,
    context: String,
}

impl<'a> HeadingAssertion<'a> {
    pub fn level(self, expected: u8) -> Self {
        assert_eq!(
            self.heading.level, expected,
            "{}: Expected heading level {}, found {}",
            self.context, expected, self.heading.level
        );
        self
    }
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.heading.text(), &self.context);
        self
    }
    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.heading.text(), &self.context);
        self
    }
}

// ============================================================================
// List Assertions
// ============================================================================

pub struct ListAssertion<'a> {
    list: &'a List,
    context: String,
}

impl<'a> ListAssertion<'a> {
    pub fn ordered(self) -> Self {
        assert!(
            self.list.ordered,
            "{}: Expected ordered list, found unordered",
            self.context
        );
        self
    }
    pub fn unordered(self) -> Self {
        assert!(
            !self.list.ordered,
            "{}: Expected unordered list, found ordered",
            self.context
        );
        self
    }
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.list.items.len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} list items, found {} list items: [{}]",
            self.context,
            expected,
            actual,
            self.list
                .items
                .iter()
                .map(ListItem::text)
                .collect::<Vec<_>>()
                .join(", ")
        );
        self
    }
    /// Assert the item texts in order
    pub fn item_texts(self, expected: &[&str]) -> Self {
        let actual: Vec<String> = self.list.items.iter().map(ListItem::text).collect();
        assert_eq!(
            actual, expected,
            "{}: Expected items {:?}, found {:?}",
            self.context, expected, actual
        );
        self
    }
    pub fn depth(self, expected: usize) -> Self {
        let actual = self.list.depth();
        assert_eq!(
            actual, expected,
            "{}: Expected list depth {}, found {}",
            self.context, expected, actual
        );
        self
    }
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(ListItemAssertion<'a>),
    {
        assert!(
            index < self.list.items.len(),
            "{}: Item index {} out of bounds (list has {} items)",
            self.context,
            index,
            self.list.items.len()
        );
        assertion(ListItemAssertion {
            item: &self.list.items[index],
            context: format!("{}:items[{}]", self.context, index),
        });
        self
    }
}

// ============================================================================
// ListItem Assertions
// ============================================================================

pub struct ListItemAssertion<'a> {
    item: &'a ListItem,
    context: String,
}

impl<'a> ListItemAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.item.text(), &self.context);
        self
    }
    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.item.text(), &self.context);
        self
    }
    pub fn inline<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        assertion(inline_at(&self.item.content, index, &self.context));
        self
    }
    pub fn no_nested(self) -> Self {
        assert!(
            self.item.nested.is_none(),
            "{}: Expected no nested list, found {}",
            self.context,
            self.item
                .nested
                .as_ref()
                .map(|list| list.display_label())
                .unwrap_or_default()
        );
        self
    }
    /// Assert the item carries a nested list and run assertions on it
    pub fn nested<F>(self, assertion: F) -> Self
    where
        F: FnOnce(ListAssertion<'a>),
    {
        let context = format!("{}:nested", self.context);
        match &self.item.nested {
            Some(list) => assertion(ListAssertion { list, context }),
            None => panic!("{context}: Expected a nested list, found none"),
        }
        self
    }
}

// ============================================================================
// Inline Assertions
// ============================================================================

pub struct InlineAssertion<'a> {
    inline: &'a Inline,
    context: String,
}

impl<'a> InlineAssertion<'a> {
    /// Assert this is `Plain` with exactly `expected` as text
    pub fn plain(self, expected: &str) -> Self {
        match self.inline {
            Inline::Plain(text) => {
                TextMatch::Exact(expected.to_string()).assert(text, &self.context)
            }
            other => panic!(
                "{}: Expected Plain({:?}), found {}",
                self.context, expected, other
            ),
        }
        self
    }
    /// Assert this is a styled span of `style`
    pub fn styled(self, style: Style) -> Self {
        assert_eq!(
            self.inline.style(),
            Some(style),
            "{}: Expected {} span, found {}",
            self.context,
            style,
            self.inline
        );
        self
    }
    pub fn bold(self) -> Self {
        self.styled(Style::Bold)
    }
    pub fn italic(self) -> Self {
        self.styled(Style::Italic)
    }
    pub fn underline(self) -> Self {
        self.styled(Style::Underline)
    }
    pub fn line_break(self) -> Self {
        assert_eq!(
            *self.inline,
            Inline::LineBreak,
            "{}: Expected LineBreak, found {}",
            self.context,
            self.inline
        );
        self
    }
    pub fn soft_break(self) -> Self {
        assert_eq!(
            *self.inline,
            Inline::SoftBreak,
            "{}: Expected SoftBreak, found {}",
            self.context,
            self.inline
        );
        self
    }
    /// Text with all styling removed
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.inline.text(), &self.context);
        self
    }
    pub fn child_count(self, expected: usize) -> Self {
        assert_inline_count(self.inline.children(), expected, &self.context);
        self
    }
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(InlineAssertion<'a>),
    {
        assertion(inline_at(self.inline.children(), index, &self.context));
        self
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn inline_at<'a>(inlines: &'a [Inline], index: usize, context: &str) -> InlineAssertion<'a> {
    assert!(
        index < inlines.len(),
        "{}: Inline index {} out of bounds ({} inlines: [{}])",
        context,
        index,
        inlines.len(),
        summarize_inlines(inlines)
    );
    InlineAssertion {
        inline: &inlines[index],
        context: format!("{context}:inlines[{index}]"),
    }
}

fn assert_inline_count(inlines: &[Inline], expected: usize, context: &str) {
    assert_eq!(
        inlines.len(),
        expected,
        "{}: Expected {} inlines, found {}: [{}]",
        context,
        expected,
        inlines.len(),
        summarize_inlines(inlines)
    );
}

fn summarize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| block.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

fn summarize_inlines(inlines: &[Inline]) -> String {
    inlines
        .iter()
        .map(|inline| inline.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
