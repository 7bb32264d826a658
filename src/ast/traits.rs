//! AST traits - common interfaces for uniform node access

use super::elements::Block;
use std::ops::Range;

/// Visitor trait for traversing the AST
///
/// Default implementations are empty, so you only need to override the
/// methods you care about. Inline content is not visited separately; a
/// visitor reads `content` from the node it is handed.
///
/// ```ignore
/// struct HeadingCounter(usize);
///
/// impl Visitor for HeadingCounter {
///     fn visit_heading(&mut self, _heading: &Heading) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait Visitor {
    fn visit_paragraph(&mut self, _paragraph: &super::Paragraph) {}
    fn leave_paragraph(&mut self, _paragraph: &super::Paragraph) {}

    fn visit_heading(&mut self, _heading: &super::Heading) {}
    fn leave_heading(&mut self, _heading: &super::Heading) {}

    fn visit_list(&mut self, _list: &super::List) {}
    fn leave_list(&mut self, _list: &super::List) {}

    fn visit_list_item(&mut self, _list_item: &super::ListItem) {}
    fn leave_list_item(&mut self, _list_item: &super::ListItem) {}
}

/// Helper function to visit all blocks in a slice
pub fn visit_children(visitor: &mut dyn Visitor, blocks: &[Block]) {
    for block in blocks {
        block.accept(visitor);
    }
}

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    fn span(&self) -> &Range<usize>;
    fn start_offset(&self) -> usize {
        self.span().start
    }

    /// Accept a visitor for traversing this node and its children
    fn accept(&self, visitor: &mut dyn Visitor);
}
