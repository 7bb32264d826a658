//! Testing utilities for document assertions
//!
//! Tests that inspect a parsed tree should use [`assert_doc`] rather than
//! matching on enums by hand. Compare:
//!
//! ```rust-example
//! match &doc.blocks[0] {
//!     Block::List(list) => {
//!         assert!(!list.ordered);
//!         assert_eq!(list.items.len(), 2);
//!         match &list.items[0].nested {
//!             Some(nested) => assert_eq!(nested.items[0].text(), "ipsum"),
//!             None => panic!("Expected nested list"),
//!         }
//!     }
//!     _ => panic!("Expected list"),
//! }
//! ```
//!
//! with the fluent form:
//!
//! ```rust-example
//! use simple_markup::testing::assert_doc;
//!
//! assert_doc(&doc).block(0, |block| {
//!     block
//!         .assert_list()
//!         .unordered()
//!         .item_count(2)
//!         .item(0, |item| {
//!             item.nested(|nested| {
//!                 nested.item(0, |inner| inner.text("ipsum"));
//!             });
//!         });
//! });
//! ```
//!
//! Every failure message carries a path such as `blocks[0]:items[1]:inlines[0]`
//! naming the node that did not match.
//!
//! The [`parse`] helper parses with a built-in dialect and panics with the
//! formatted [`crate::ConversionError`] on failure.

mod assertions;
mod matchers;

pub use assertions::{
    assert_doc, BlockAssertion, DocumentAssertion, HeadingAssertion, InlineAssertion,
    ListAssertion, ListItemAssertion, ParagraphAssertion,
};
pub use matchers::TextMatch;

use crate::ast::Document;
use crate::dialect::Dialect;

/// Parse `source`, panicking with the error message on failure
pub fn parse(source: &str, dialect: &Dialect) -> Document {
    match crate::parse_document(source, dialect) {
        Ok(doc) => doc,
        Err(err) => panic!("Failed to parse {source:?} as {}: {err}", dialect.name),
    }
}
