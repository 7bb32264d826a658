//! Element parsers, one module per block type plus inline content

pub(crate) mod document;
pub(crate) mod headings;
pub(crate) mod inlines;
pub(crate) mod lists;
pub(crate) mod paragraphs;
