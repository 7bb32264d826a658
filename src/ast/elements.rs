//! Element-specific AST node definitions
//!
//! The document structure is deliberately flat:
//! - a document is a sequence of blocks (paragraph, heading, list)
//! - paragraphs, headings and list items hold inline content
//! - list items may hold one nested list

pub mod block;
pub mod document;
pub mod heading;
pub mod inline;
pub mod list;
pub mod paragraph;

pub use block::Block;
pub use document::Document;
pub use heading::Heading;
pub use inline::Inline;
pub use list::{List, ListItem};
pub use paragraph::Paragraph;
