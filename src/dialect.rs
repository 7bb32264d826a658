//! Dialect adapter
//!
//! A [`Dialect`] is plain data describing one source syntax: delimiter
//! glyphs, how heading markers encode levels, how list nesting is expressed
//! and how the awaiting-closer frame is entered. The tokenizer and the tree
//! builder read it; neither has dialect-specific branches of its own.
//!
//! | | txt2tags | dokuwiki |
//! |---|---|---|
//! | heading | `=`x1..5, level = count | `=`x2..6, level = 7 - count |
//! | unordered / ordered | `-` / `+` | `*` / `-` |
//! | nesting | indentation relative to the list | two spaces per level |
//! | await mode | replacing | stacked |
//!
//! Dialects can also be declared in configuration; see [`registry`].

pub mod registry;

pub use registry::DialectRegistry;

use crate::error::DialectError;
use crate::lexer::tokens::Style;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    #[serde(default)]
    pub name: String,
    pub delimiters: Delimiters,
    pub heading: HeadingSyntax,
    pub lists: ListSyntax,
    /// Blank lines needed to end a paragraph
    #[serde(default = "default_blank_lines")]
    pub paragraph_break_blank_lines: usize,
    pub await_mode: AwaitMode,
    /// Accept an opener separated from its text by spaces (`** bold**`)
    #[serde(default)]
    pub opener_padding: bool,
    /// Glyph forcing a line break when it ends a line
    #[serde(default)]
    pub line_break: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delimiters {
    pub bold: String,
    pub italic: String,
    pub underline: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingSyntax {
    pub glyph: String,
    pub min_marker: usize,
    pub max_marker: usize,
    pub direction: LevelDirection,
}

/// How the length of a heading marker maps to a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LevelDirection {
    /// The shortest marker is level 1
    Ascending,
    /// The longest marker is level 1
    Descending,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSyntax {
    pub unordered: String,
    pub ordered: String,
    pub nesting: Nesting,
    #[serde(default = "default_indent_step")]
    pub indent_step: usize,
    #[serde(default = "default_max_depth")]
    pub max_depth: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Nesting {
    /// Deeper indentation than the previous bullet means one level deeper
    Indented,
    /// Every `indent_step` columns of indentation is one level
    FixedIndent,
}

/// How the awaiting-closer frame is entered after a word inside a style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AwaitMode {
    /// The awaiting frame replaces the style frame
    Replacing,
    /// The awaiting frame is pushed above the style frame
    Stacked,
}

impl AwaitMode {
    /// Frames popped when a closer is consumed
    pub fn unwind_depth(&self) -> usize {
        match self {
            AwaitMode::Replacing => 1,
            AwaitMode::Stacked => 2,
        }
    }
}

fn default_blank_lines() -> usize {
    1
}

fn default_indent_step() -> usize {
    2
}

fn default_max_depth() -> u8 {
    2
}

impl Dialect {
    pub fn txt2tags() -> Self {
        Dialect {
            name: "txt2tags".to_string(),
            delimiters: Delimiters::default(),
            heading: HeadingSyntax {
                glyph: "=".to_string(),
                min_marker: 1,
                max_marker: 5,
                direction: LevelDirection::Ascending,
            },
            lists: ListSyntax {
                unordered: "-".to_string(),
                ordered: "+".to_string(),
                nesting: Nesting::Indented,
                indent_step: default_indent_step(),
                max_depth: default_max_depth(),
            },
            paragraph_break_blank_lines: 1,
            await_mode: AwaitMode::Replacing,
            opener_padding: false,
            line_break: None,
        }
    }

    pub fn dokuwiki() -> Self {
        Dialect {
            name: "dokuwiki".to_string(),
            delimiters: Delimiters::default(),
            heading: HeadingSyntax {
                glyph: "=".to_string(),
                min_marker: 2,
                max_marker: 6,
                direction: LevelDirection::Descending,
            },
            lists: ListSyntax {
                unordered: "*".to_string(),
                ordered: "-".to_string(),
                nesting: Nesting::FixedIndent,
                indent_step: 2,
                max_depth: default_max_depth(),
            },
            paragraph_break_blank_lines: 1,
            await_mode: AwaitMode::Stacked,
            opener_padding: true,
            line_break: Some("\\\\".to_string()),
        }
    }

    pub fn glyph(&self, style: Style) -> &str {
        match style {
            Style::Bold => &self.delimiters.bold,
            Style::Italic => &self.delimiters.italic,
            Style::Underline => &self.delimiters.underline,
        }
    }

    /// Style whose delimiter starts `text`, preferring the longest glyph
    pub fn style_at(&self, text: &str) -> Option<Style> {
        Style::ALL
            .into_iter()
            .filter(|style| {
                let glyph = self.glyph(*style);
                !glyph.is_empty() && text.starts_with(glyph)
            })
            .max_by_key(|style| self.glyph(*style).len())
    }

    /// Frames unwound by a closer
    pub fn composite_unwind_depth(&self) -> usize {
        self.await_mode.unwind_depth()
    }

    /// Levels this dialect can express, always starting at 1
    pub fn heading_levels(&self) -> RangeInclusive<u8> {
        let count = self
            .heading
            .max_marker
            .saturating_sub(self.heading.min_marker)
            + 1;
        1..=u8::try_from(count).unwrap_or(u8::MAX)
    }

    /// Level encoded by a marker of `marker_len` glyphs
    pub fn heading_level(&self, marker_len: usize) -> Option<u8> {
        let HeadingSyntax {
            min_marker,
            max_marker,
            direction,
            ..
        } = &self.heading;
        if marker_len < *min_marker || marker_len > *max_marker {
            return None;
        }
        let level = match direction {
            LevelDirection::Ascending => marker_len - min_marker + 1,
            LevelDirection::Descending => max_marker + 1 - marker_len,
        };
        u8::try_from(level).ok()
    }

    /// Marker length encoding `level`; inverse of [`Dialect::heading_level`]
    pub fn heading_marker_len(&self, level: u8) -> Option<usize> {
        if !self.heading_levels().contains(&level) {
            return None;
        }
        let level = usize::from(level);
        Some(match self.heading.direction {
            LevelDirection::Ascending => level + self.heading.min_marker - 1,
            LevelDirection::Descending => self.heading.max_marker + 1 - level,
        })
    }

    /// `Some(ordered)` when `run` is one of the list markers
    pub fn bullet_kind(&self, run: &str) -> Option<bool> {
        if run == self.lists.unordered {
            Some(false)
        } else if run == self.lists.ordered {
            Some(true)
        } else {
            None
        }
    }

    /// Check the dialect is internally consistent
    pub fn validate(&self) -> Result<(), DialectError> {
        let mut glyphs: Vec<(&'static str, &str)> = vec![
            ("delimiters.bold", &self.delimiters.bold),
            ("delimiters.italic", &self.delimiters.italic),
            ("delimiters.underline", &self.delimiters.underline),
            ("heading.glyph", &self.heading.glyph),
            ("lists.unordered", &self.lists.unordered),
            ("lists.ordered", &self.lists.ordered),
        ];
        if let Some(line_break) = &self.line_break {
            glyphs.push(("line_break", line_break));
        }

        for (field, glyph) in &glyphs {
            if glyph.is_empty() {
                return Err(DialectError::EmptyGlyph {
                    dialect: self.name.clone(),
                    field: *field,
                });
            }
            if glyph.chars().any(char::is_whitespace) {
                return Err(DialectError::WhitespaceGlyph {
                    dialect: self.name.clone(),
                    field: *field,
                });
            }
        }

        // Inline delimiters, list markers and the line break must be told
        // apart by exact match
        let exclusive: Vec<(&'static str, &str)> = glyphs
            .iter()
            .copied()
            .filter(|(field, _)| *field != "heading.glyph")
            .collect();
        for (i, (first, a)) in exclusive.iter().enumerate() {
            for (second, b) in exclusive.iter().skip(i + 1) {
                if a == b {
                    return Err(DialectError::DuplicateGlyph {
                        dialect: self.name.clone(),
                        first: *first,
                        second: *second,
                        glyph: a.to_string(),
                    });
                }
            }
        }

        let HeadingSyntax {
            min_marker,
            max_marker,
            ..
        } = self.heading;
        if min_marker == 0 || min_marker > max_marker || max_marker - min_marker >= 6 {
            return Err(DialectError::HeadingRange {
                dialect: self.name.clone(),
                min: min_marker,
                max: max_marker,
            });
        }

        if self.lists.max_depth == 0 {
            return Err(self.invalid("lists.max_depth must be at least 1"));
        }
        if self.lists.nesting == Nesting::FixedIndent && self.lists.indent_step == 0 {
            return Err(self.invalid("lists.indent_step must be at least 1"));
        }
        if self.paragraph_break_blank_lines == 0 {
            return Err(self.invalid("paragraph_break_blank_lines must be at least 1"));
        }
        Ok(())
    }

    fn invalid(&self, message: &str) -> DialectError {
        DialectError::Invalid {
            dialect: self.name.clone(),
            message: message.to_string(),
        }
    }
}

impl Default for Delimiters {
    fn default() -> Self {
        Delimiters {
            bold: "**".to_string(),
            italic: "//".to_string(),
            underline: "__".to_string(),
        }
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::txt2tags()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_validate() {
        assert_eq!(Dialect::txt2tags().validate(), Ok(()));
        assert_eq!(Dialect::dokuwiki().validate(), Ok(()));
    }

    #[test]
    fn test_txt2tags_heading_levels() {
        let dialect = Dialect::txt2tags();
        assert_eq!(dialect.heading_levels(), 1..=5);
        assert_eq!(dialect.heading_level(1), Some(1));
        assert_eq!(dialect.heading_level(4), Some(4));
        assert_eq!(dialect.heading_level(6), None);
        assert_eq!(dialect.heading_level(0), None);
    }

    #[test]
    fn test_dokuwiki_heading_levels_descend() {
        let dialect = Dialect::dokuwiki();
        assert_eq!(dialect.heading_levels(), 1..=5);
        assert_eq!(dialect.heading_level(6), Some(1));
        assert_eq!(dialect.heading_level(2), Some(5));
        assert_eq!(dialect.heading_level(1), None);
        assert_eq!(dialect.heading_marker_len(1), Some(6));
    }

    #[test]
    fn test_heading_level_round_trip() {
        for dialect in [Dialect::txt2tags(), Dialect::dokuwiki()] {
            for level in dialect.heading_levels() {
                let len = dialect.heading_marker_len(level).unwrap();
                assert_eq!(dialect.heading_level(len), Some(level));
            }
            assert_eq!(dialect.heading_marker_len(0), None);
            assert_eq!(dialect.heading_marker_len(9), None);
        }
    }

    #[test]
    fn test_style_at() {
        let dialect = Dialect::txt2tags();
        assert_eq!(dialect.style_at("**bold"), Some(Style::Bold));
        assert_eq!(dialect.style_at("//"), Some(Style::Italic));
        assert_eq!(dialect.style_at("__x"), Some(Style::Underline));
        assert_eq!(dialect.style_at("*x"), None);
    }

    #[test]
    fn test_unwind_depth() {
        assert_eq!(Dialect::txt2tags().composite_unwind_depth(), 1);
        assert_eq!(Dialect::dokuwiki().composite_unwind_depth(), 2);
    }

    #[test]
    fn test_bullet_kind() {
        let t2t = Dialect::txt2tags();
        assert_eq!(t2t.bullet_kind("-"), Some(false));
        assert_eq!(t2t.bullet_kind("+"), Some(true));
        assert_eq!(t2t.bullet_kind("*"), None);

        let doku = Dialect::dokuwiki();
        assert_eq!(doku.bullet_kind("*"), Some(false));
        assert_eq!(doku.bullet_kind("-"), Some(true));
    }

    #[test]
    fn test_validate_rejects_duplicate_glyphs() {
        let mut dialect = Dialect::txt2tags();
        dialect.delimiters.italic = "**".to_string();
        assert!(matches!(
            dialect.validate(),
            Err(DialectError::DuplicateGlyph {
                first: "delimiters.bold",
                second: "delimiters.italic",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_glyphs() {
        let mut dialect = Dialect::txt2tags();
        dialect.delimiters.bold = String::new();
        assert!(matches!(
            dialect.validate(),
            Err(DialectError::EmptyGlyph { field: "delimiters.bold", .. })
        ));

        let mut dialect = Dialect::txt2tags();
        dialect.lists.ordered = "+ ".to_string();
        assert!(matches!(
            dialect.validate(),
            Err(DialectError::WhitespaceGlyph { field: "lists.ordered", .. })
        ));
    }

    #[test]
    fn test_validate_rejects_heading_range() {
        let mut dialect = Dialect::txt2tags();
        dialect.heading.min_marker = 3;
        dialect.heading.max_marker = 2;
        assert!(matches!(
            dialect.validate(),
            Err(DialectError::HeadingRange { min: 3, max: 2, .. })
        ));

        dialect.heading.min_marker = 1;
        dialect.heading.max_marker = 7;
        assert!(dialect.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r##"{
            "name": "mini",
            "delimiters": {"bold": "*", "italic": "/", "underline": "_"},
            "heading": {"glyph": "#", "min_marker": 1, "max_marker": 3, "direction": "ascending"},
            "lists": {"unordered": "o", "ordered": "#.", "nesting": "fixed-indent"},
            "await_mode": "stacked"
        }"##;
        let dialect: Dialect = serde_json::from_str(json).unwrap();
        assert_eq!(dialect.paragraph_break_blank_lines, 1);
        assert_eq!(dialect.lists.indent_step, 2);
        assert_eq!(dialect.lists.max_depth, 2);
        assert!(!dialect.opener_padding);
        assert_eq!(dialect.line_break, None);
        assert_eq!(dialect.validate(), Ok(()));
    }
}
