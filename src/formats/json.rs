//! JSON serialization of the document tree

use super::registry::{FormatError, Formatter};
use crate::ast::Document;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        serde_json::to_string_pretty(doc).map_err(|e| FormatError::Serialization(e.to_string()))
    }

    fn description(&self) -> &str {
        "JSON document tree"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Heading, Inline, List, ListItem, Paragraph};
    use serde_json::{json, Value};

    #[test]
    fn test_json_shape() {
        let doc = Document::with_blocks(vec![
            Heading::new(1, vec![Inline::plain("Title")]).at(0..9).into(),
            Paragraph::new(vec![
                Inline::plain("a"),
                Inline::Bold(vec![Inline::plain("b")]),
                Inline::LineBreak,
            ])
            .at(11..20)
            .into(),
            List::new(true, vec![ListItem::new(vec![Inline::plain("x")])]).into(),
        ]);
        let output = JsonFormatter.serialize(&doc).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            value["blocks"][0],
            json!({
                "type": "heading",
                "level": 1,
                "content": [{"type": "plain", "content": "Title"}],
                "span": {"start": 0, "end": 9}
            })
        );
        assert_eq!(
            value["blocks"][1]["content"],
            json!([
                {"type": "plain", "content": "a"},
                {"type": "bold", "content": [{"type": "plain", "content": "b"}]},
                {"type": "line-break"}
            ])
        );
        assert_eq!(value["blocks"][2]["type"], "list");
        assert_eq!(value["blocks"][2]["ordered"], true);
        assert_eq!(value["blocks"][2]["items"][0]["nested"], Value::Null);
    }
}
