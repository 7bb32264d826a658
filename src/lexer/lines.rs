//! Physical lines and their classification
//!
//! The engine never looks further ahead than the current line. A [`LineReader`]
//! groups base tokens into [`Line`]s (indentation plus non-whitespace runs),
//! and [`classify`] decides whether a line opens a heading, a list item or
//! continues ordinary text.

use super::base::{tokenize, BaseToken};
use crate::dialect::{Dialect, Nesting};
use crate::error::LexError;
use std::ops::Range;

/// Columns a tab advances the indentation by
const TAB_WIDTH: usize = 4;

/// A maximal run of non-whitespace characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub text: &'a str,
    pub start: usize,
}

impl Run<'_> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// Leading whitespace in columns
    pub indent: usize,
    pub runs: Vec<Run<'a>>,
    /// Byte offset of the first character of the line
    pub start: usize,
}

impl<'a> Line<'a> {
    pub fn is_blank(&self) -> bool {
        self.runs.is_empty()
    }

    /// Byte offset just past the last run
    pub fn content_end(&self) -> usize {
        self.runs.last().map(Run::end).unwrap_or(self.start)
    }
}

type BaseStream<'a> = Box<dyn Iterator<Item = Result<(BaseToken, Range<usize>), LexError>> + 'a>;

/// Groups base tokens into lines
pub struct LineReader<'a> {
    source: &'a str,
    tokens: BaseStream<'a>,
    done: bool,
}

impl<'a> LineReader<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            tokens: Box::new(tokenize(source)),
            done: false,
        }
    }
}

impl<'a> Iterator for LineReader<'a> {
    type Item = Result<Line<'a>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut line: Option<Line<'a>> = None;
        loop {
            let (token, span) = match self.tokens.next() {
                None => {
                    self.done = true;
                    return line.map(Ok);
                }
                Some(Err(err)) => {
                    self.done = true;
                    return Some(Err(err));
                }
                Some(Ok(item)) => item,
            };
            let current = line.get_or_insert_with(|| Line {
                indent: 0,
                runs: Vec::new(),
                start: span.start,
            });
            match token {
                BaseToken::Newline => break,
                BaseToken::Whitespace => {
                    if current.runs.is_empty() {
                        current.indent += indent_width(&self.source[span]);
                    }
                }
                BaseToken::Run => current.runs.push(Run {
                    text: &self.source[span.clone()],
                    start: span.start,
                }),
            }
        }
        line.map(Ok)
    }
}

fn indent_width(whitespace: &str) -> usize {
    whitespace
        .chars()
        .map(|c| match c {
            '\t' => TAB_WIDTH,
            '\r' => 0,
            _ => 1,
        })
        .sum()
}

/// What a non-blank line starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Heading(HeadingLine),
    /// A list marker; depth is resolved by the engine
    Bullet { ordered: bool },
    Text,
}

/// A recognized heading line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingLine {
    pub level: u8,
    /// Bytes covered by each marker
    pub marker_bytes: usize,
    /// Content between the markers, as byte offsets
    pub content: Range<usize>,
}

/// Classify a non-blank line
pub fn classify(line: &Line<'_>, source: &str, dialect: &Dialect) -> LineKind {
    if let Some(heading) = heading_line(line, source, dialect) {
        return LineKind::Heading(heading);
    }
    if line.runs.len() >= 2 {
        if let Some(ordered) = dialect.bullet_kind(line.runs[0].text) {
            return LineKind::Bullet { ordered };
        }
    }
    LineKind::Text
}

/// The trimmed line must start and end with equally long runs of the heading
/// glyph, with something other than whitespace between them.
fn heading_line(line: &Line<'_>, source: &str, dialect: &Dialect) -> Option<HeadingLine> {
    let glyph = dialect.heading.glyph.as_str();
    if glyph.is_empty() {
        return None;
    }
    let start = line.runs.first()?.start;
    let end = line.content_end();
    let trimmed = &source[start..end];

    let leading = repeats(trimmed.as_bytes(), glyph.as_bytes(), false);
    let trailing = repeats(trimmed.as_bytes(), glyph.as_bytes(), true);
    if leading == 0 || leading != trailing {
        return None;
    }
    let level = dialect.heading_level(leading)?;
    let marker_bytes = leading * glyph.len();
    if trimmed.len() <= 2 * marker_bytes {
        return None;
    }
    let content = start + marker_bytes..end - marker_bytes;
    if source[content.clone()].trim().is_empty() {
        return None;
    }
    Some(HeadingLine {
        level,
        marker_bytes,
        content,
    })
}

/// How many times `glyph` repeats at the start (or end) of `text`
fn repeats(text: &[u8], glyph: &[u8], from_end: bool) -> usize {
    let mut count = 0;
    let mut rest = text;
    loop {
        let matched = if from_end {
            rest.strip_suffix(glyph)
        } else {
            rest.strip_prefix(glyph)
        };
        match matched {
            Some(remaining) => {
                count += 1;
                rest = remaining;
            }
            None => return count,
        }
    }
}

/// Resolves bullet depth from indentation
#[derive(Debug, Clone, Default)]
pub struct IndentStack {
    indents: Vec<usize>,
}

impl IndentStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.indents.clear();
    }

    /// Depth of a bullet indented by `indent` columns, or `None` when the
    /// dialect does not accept that indentation
    pub fn depth(&mut self, indent: usize, dialect: &Dialect) -> Option<u8> {
        let max_depth = usize::from(dialect.lists.max_depth);
        match dialect.lists.nesting {
            Nesting::FixedIndent => {
                let step = dialect.lists.indent_step;
                if step == 0 || indent % step != 0 {
                    return None;
                }
                let depth = indent / step + 1;
                if depth > max_depth {
                    return None;
                }
                u8::try_from(depth).ok()
            }
            Nesting::Indented => {
                while self.indents.last().is_some_and(|top| *top > indent) {
                    self.indents.pop();
                }
                let top = self.indents.last().copied();
                if top != Some(indent) && self.indents.len() < max_depth {
                    self.indents.push(indent);
                }
                u8::try_from(self.indents.len().max(1)).ok()
            }
        }
    }
}
