//! XML-like AST tag serialization
//!
//! Dumps the tree exactly as built, one tag per node, for inspecting parser
//! output:
//!
//! ```text
//! <document>
//!   <heading level="1">Title</heading>
//!   <paragraph>lorem <bold>ipsum</bold> dolor</paragraph>
//!   <list ordered="false">
//!     <item>lorem
//!       <list ordered="false">
//!         <item>ipsum</item>
//!       </list>
//!     </item>
//!   </list>
//! </document>
//! ```

use super::registry::{FormatError, Formatter};
use crate::ast::{Document, Heading, Inline, List, ListItem, Paragraph, Visitor};

/// Tag serializer using the Visitor pattern
struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn open_tag(&mut self, tag: &str) {
        self.push_indent(&format!("<{tag}>"));
    }

    fn close_tag_inline(&mut self, tag: &str) {
        self.output.push_str(&format!("</{tag}>"));
    }

    fn inlines(&mut self, inlines: &[Inline]) {
        for (i, inline) in inlines.iter().enumerate() {
            if i > 0 {
                self.output.push(' ');
            }
            match inline {
                Inline::Plain(text) => self.output.push_str(&escape_xml(text)),
                Inline::LineBreak => self.output.push_str("<line-break/>"),
                Inline::SoftBreak => self.output.push_str("<soft-break/>"),
                styled => {
                    let tag = styled.style().map(|s| s.name()).unwrap_or("span");
                    self.output.push_str(&format!("<{tag}>"));
                    self.inlines(styled.children());
                    self.close_tag_inline(tag);
                }
            }
        }
    }
}

impl Visitor for TagSerializer {
    fn visit_paragraph(&mut self, para: &Paragraph) {
        self.open_tag("paragraph");
        self.inlines(&para.content);
        self.close_tag_inline("paragraph");
        self.output.push('\n');
    }

    fn visit_heading(&mut self, heading: &Heading) {
        self.push_indent(&format!("<heading level=\"{}\">", heading.level));
        self.inlines(&heading.content);
        self.close_tag_inline("heading");
        self.output.push('\n');
    }

    fn visit_list(&mut self, list: &List) {
        self.push_indent(&format!("<list ordered=\"{}\">\n", list.ordered));
        self.indent_level += 1;
    }

    fn leave_list(&mut self, _list: &List) {
        self.indent_level -= 1;
        self.push_indent("</list>\n");
    }

    fn visit_list_item(&mut self, item: &ListItem) {
        self.open_tag("item");
        self.inlines(&item.content);
        if item.nested.is_some() {
            self.output.push('\n');
            self.indent_level += 1;
        }
    }

    fn leave_list_item(&mut self, item: &ListItem) {
        if item.nested.is_some() {
            self.indent_level -= 1;
            self.push_indent("");
        }
        self.close_tag_inline("item");
        self.output.push('\n');
    }
}

/// Serialize a document to AST tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut serializer = TagSerializer {
        output: String::from("<document>\n"),
        indent_level: 1,
    };
    doc.accept(&mut serializer);
    serializer.output.push_str("</document>");
    serializer.output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TagFormatter;

impl Formatter for TagFormatter {
    fn name(&self) -> &str {
        "tag"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_document(doc))
    }

    fn description(&self) -> &str {
        "XML-like tree dump"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_simple_paragraph() {
        let doc = Document::with_blocks(vec![Paragraph::new(vec![
            Inline::plain("Hello"),
            Inline::Bold(vec![Inline::plain("world")]),
        ])
        .into()]);

        let result = serialize_document(&doc);
        assert_eq!(
            result,
            "<document>\n  <paragraph>Hello <bold>world</bold></paragraph>\n</document>"
        );
    }

    #[test]
    fn test_serialize_nested_list() {
        let nested = List::new(true, vec![ListItem::new(vec![Inline::plain("ipsum")])]);
        let doc = Document::with_blocks(vec![List::new(
            false,
            vec![ListItem::new(vec![Inline::plain("lorem")]).with_nested(nested)],
        )
        .into()]);

        let result = serialize_document(&doc);
        assert_eq!(
            result,
            "<document>\n\
             \x20 <list ordered=\"false\">\n\
             \x20   <item>lorem\n\
             \x20     <list ordered=\"true\">\n\
             \x20       <item>ipsum</item>\n\
             \x20     </list>\n\
             \x20   </item>\n\
             \x20 </list>\n\
             </document>"
        );
    }

    #[test]
    fn test_heading_and_breaks() {
        let doc = Document::with_blocks(vec![
            Heading::new(3, vec![Inline::plain("Title")]).into(),
            Paragraph::new(vec![Inline::plain("a"), Inline::LineBreak, Inline::plain("b")]).into(),
        ]);
        let result = serialize_document(&doc);
        assert!(result.contains("<heading level=\"3\">Title</heading>"));
        assert!(result.contains("<paragraph>a <line-break/> b</paragraph>"));
    }

    #[test]
    fn test_xml_escaping() {
        let doc = Document::with_blocks(vec![Paragraph::new(vec![Inline::plain(
            "Text with <special> & \"chars\"",
        )])
        .into()]);

        let result = serialize_document(&doc);
        assert!(result.contains("&lt;special&gt;"));
        assert!(result.contains("&amp;"));
        assert!(result.contains("&quot;"));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(serialize_document(&Document::new()), "<document>\n</document>");
    }
}
