//! HTML rendering
//!
//! Each node maps to one fixed fragment with no attributes:
//!
//! ```text
//! Paragraph -> <p>...</p>        Bold      -> <b>...</b>
//! Heading   -> <hN>...</hN>      Italic    -> <i>...</i>
//! List      -> <ul>/<ol>         Underline -> <u>...</u>
//! ListItem  -> <li>...</li>      LineBreak -> <br/>
//! ```
//!
//! Blocks and list items are separated by newlines, inline elements by single
//! spaces. A nested list is rendered inside its item's `<li>`, right after the
//! item's own content:
//!
//! ```text
//! <ul>
//! <li>lorem<ul>
//! <li>ipsum</li>
//! </ul></li>
//! <li>dolor</li>
//! </ul>
//! ```

use super::registry::{FormatError, Formatter};
use crate::ast::{Document, Heading, Inline, List, ListItem, Paragraph, Visitor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Escape `&`, `<` and `>` in text
    pub escape_text: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self { escape_text: true }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    options: HtmlOptions,
}

impl HtmlFormatter {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Render a document. Rendering cannot fail and has no side effects.
    pub fn render(&self, doc: &Document) -> String {
        let mut renderer = HtmlRenderer {
            output: String::new(),
            options: self.options,
            first_child: vec![true],
        };
        doc.accept(&mut renderer);
        renderer.output
    }
}

impl Formatter for HtmlFormatter {
    fn name(&self) -> &str {
        "html"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(self.render(doc))
    }

    fn description(&self) -> &str {
        "HTML fragments"
    }
}

struct HtmlRenderer {
    output: String,
    options: HtmlOptions,
    /// Per open container: whether the next child is its first
    first_child: Vec<bool>,
}

impl HtmlRenderer {
    fn begin_child(&mut self) {
        if let Some(first) = self.first_child.last_mut() {
            if !*first {
                self.output.push('\n');
            }
            *first = false;
        }
    }

    fn inlines(&mut self, inlines: &[Inline]) {
        let mut line_start = true;
        for inline in inlines {
            if *inline == Inline::SoftBreak {
                self.output.push('\n');
                line_start = true;
                continue;
            }
            if !line_start {
                self.output.push(' ');
            }
            line_start = false;
            self.inline(inline);
        }
    }

    fn inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Plain(text) => {
                let text = if self.options.escape_text {
                    escape_html(text)
                } else {
                    text.clone()
                };
                self.output.push_str(&text);
            }
            Inline::Bold(children) => self.wrapped("b", children),
            Inline::Italic(children) => self.wrapped("i", children),
            Inline::Underline(children) => self.wrapped("u", children),
            Inline::LineBreak => self.output.push_str("<br/>"),
            Inline::SoftBreak => self.output.push('\n'),
        }
    }

    fn wrapped(&mut self, tag: &str, children: &[Inline]) {
        self.output.push_str(&format!("<{tag}>"));
        self.inlines(children);
        self.output.push_str(&format!("</{tag}>"));
    }
}

fn list_tag(list: &List) -> &'static str {
    if list.ordered {
        "ol"
    } else {
        "ul"
    }
}

impl Visitor for HtmlRenderer {
    fn visit_paragraph(&mut self, paragraph: &Paragraph) {
        self.begin_child();
        self.output.push_str("<p>");
        self.inlines(&paragraph.content);
        self.output.push_str("</p>");
    }

    fn visit_heading(&mut self, heading: &Heading) {
        self.begin_child();
        self.output.push_str(&format!("<h{}>", heading.level));
        self.inlines(&heading.content);
        self.output.push_str(&format!("</h{}>", heading.level));
    }

    fn visit_list(&mut self, list: &List) {
        self.begin_child();
        self.output.push_str(&format!("<{}>\n", list_tag(list)));
        self.first_child.push(true);
    }

    fn leave_list(&mut self, list: &List) {
        self.first_child.pop();
        self.output.push_str(&format!("\n</{}>", list_tag(list)));
    }

    fn visit_list_item(&mut self, item: &ListItem) {
        self.begin_child();
        self.output.push_str("<li>");
        self.inlines(&item.content);
        self.first_child.push(true);
    }

    fn leave_list_item(&mut self, _item: &ListItem) {
        self.first_child.pop();
        self.output.push_str("</li>");
    }
}

/// Escape HTML special characters in text
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
