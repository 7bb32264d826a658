//! Byte offset to line/column conversion
//!
//! Tokens and AST nodes carry byte ranges into the source. Diagnostics want
//! human coordinates instead, so [`SourceLocation`] pre-computes the byte
//! offset of every line start once and answers lookups with a binary search.
//!
//! ```text
//! Source: "Hello\nWorld"
//!   line_starts = [0, 6]
//!   position(8) -> line 1, column 2
//! ```
//!
//! Lines and columns are 0-based here; [`crate::ConversionError`] adds one when
//! reporting. Columns count characters, not bytes.

use std::fmt;
use std::ops::Range;

/// A line/column pair, both 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and end positions of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Location {
    pub start: Position,
    pub end: Position,
}

impl Location {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Converts byte offsets of one source text into positions
pub struct SourceLocation<'a> {
    source: &'a str,
    /// Byte offsets where each line starts
    line_starts: Vec<usize>,
}

impl<'a> SourceLocation<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        for (byte_pos, ch) in source.char_indices() {
            if ch == '\n' {
                line_starts.push(byte_pos + 1);
            }
        }
        Self {
            source,
            line_starts,
        }
    }

    /// Position of a byte offset. Offsets past the end map to the end.
    pub fn position(&self, byte_offset: usize) -> Position {
        let offset = self.clamp(byte_offset);
        let line = self
            .line_starts
            .binary_search(&offset)
            .unwrap_or_else(|i| i - 1);
        let line_start = self.line_starts[line];
        let column = self.source[line_start..offset].chars().count();
        Position::new(line, column)
    }

    pub fn range_to_location(&self, range: &Range<usize>) -> Location {
        Location::new(self.position(range.start), self.position(range.end))
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Up to `radius` characters on each side of the offset, on a single line.
    pub fn excerpt(&self, byte_offset: usize, radius: usize) -> String {
        let offset = self.clamp(byte_offset);
        let before: String = {
            let mut chars: Vec<char> = self.source[..offset]
                .chars()
                .rev()
                .take_while(|c| *c != '\n')
                .take(radius)
                .collect();
            chars.reverse();
            chars.into_iter().collect()
        };
        let after: String = self.source[offset..]
            .chars()
            .take_while(|c| *c != '\n')
            .take(radius)
            .collect();
        format!("{before}{after}")
    }

    fn clamp(&self, byte_offset: usize) -> usize {
        let mut offset = byte_offset.min(self.source.len());
        while !self.source.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_single_line() {
        let loc = SourceLocation::new("Hello");
        assert_eq!(loc.position(0), Position::new(0, 0));
        assert_eq!(loc.position(4), Position::new(0, 4));
    }

    #[test]
    fn test_position_multiline() {
        let loc = SourceLocation::new("Hello\nWorld");
        assert_eq!(loc.line_count(), 2);
        assert_eq!(loc.position(5), Position::new(0, 5));
        assert_eq!(loc.position(6), Position::new(1, 0));
        assert_eq!(loc.position(8), Position::new(1, 2));
    }

    #[test]
    fn test_position_counts_characters() {
        let loc = SourceLocation::new("zażółć **x**");
        // "zażółć " is 11 bytes but 7 characters
        assert_eq!(loc.position(11), Position::new(0, 7));
    }

    #[test]
    fn test_position_past_end_is_clamped() {
        let loc = SourceLocation::new("ab\ncd");
        assert_eq!(loc.position(100), Position::new(1, 2));
    }

    #[test]
    fn test_range_to_location() {
        let loc = SourceLocation::new("one\ntwo three");
        let location = loc.range_to_location(&(4..13));
        assert_eq!(format!("{location}"), "1:0..1:9");
    }

    #[test]
    fn test_excerpt_stays_on_one_line() {
        let loc = SourceLocation::new("first\nsecond line here\nthird");
        assert_eq!(loc.excerpt(13, 4), "ond line");
        assert_eq!(loc.excerpt(6, 3), "sec");
    }
}
