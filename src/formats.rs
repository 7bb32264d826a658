//! Output formats
//!
//! Renderers walking a finished [`crate::ast::Document`]. `html` is the
//! primary output; `tag` and `json` expose the tree itself.

pub mod html;
pub mod json;
pub mod registry;
pub mod tag;

pub use html::{HtmlFormatter, HtmlOptions};
pub use json::JsonFormatter;
pub use registry::{FormatError, FormatRegistry, Formatter};
pub use tag::TagFormatter;
