//! Document tree
//!
//! ## Modules
//!
//! - `elements` - node definitions, one module per element type
//! - `location` - byte offset to line/column conversion
//! - `traits` - common traits for AST nodes

pub mod elements;
pub mod location;
pub mod traits;

pub use elements::{Block, Document, Heading, Inline, List, ListItem, Paragraph};
pub use location::{Location, Position, SourceLocation};
pub use traits::{AstNode, Visitor};
