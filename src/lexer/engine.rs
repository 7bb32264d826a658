//! Context-sensitive tokenizer
//!
//! The engine pulls one [`Line`] at a time, emits the separator that belongs
//! before it, then scans its runs against the [`ContextStack`]. Style
//! delimiters open and close with the same glyph, so whether `**` opens or
//! closes bold depends only on the stack:
//!
//! ```text
//! lorem **ipsum sit** dolor
//!
//! Word("lorem")             [Initial]
//! Open(Bold)                [Initial, Style(Bold)]
//! Word("ipsum") Word("sit") [Initial, AwaitingCloser(Bold)]   (replacing)
//! Close(Bold)               [Initial]
//! Word("dolor")
//! ```
//!
//! Inside a style, a word stops right before the innermost style's glyph and
//! the engine enters the awaiting-closer frame; the next thing scanned is
//! then always that style's closer. Whether the awaiting frame replaces the
//! style frame or sits above it is the dialect's [`AwaitMode`], and fixes how
//! many frames a closer unwinds. Both modes produce the same tokens.

use super::context::{Context, ContextStack};
use super::lines::{classify, HeadingLine, IndentStack, Line, LineKind, LineReader, Run};
use super::tokens::{Token, TokenKind};
use crate::dialect::{AwaitMode, Dialect};
use crate::error::LexError;
use crate::lexer::tokens::Style;
use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::ops::Range;
use tracing::trace;

/// Lazy, single-pass token stream over one source text
///
/// Yields `Err` at most once; the stream is exhausted afterwards.
pub struct Tokenizer<'a> {
    source: &'a str,
    dialect: &'a Dialect,
    lines: LineReader<'a>,
    stack: ContextStack,
    indents: IndentStack,
    pending: VecDeque<Token>,
    error: Option<LexError>,
    finished: bool,
    /// End of the previous content line, once there is one
    last_content_end: Option<usize>,
    /// Blank lines seen since the previous content line
    blank_lines: usize,
    /// The previous line ended in a forced line break
    suppress_newline: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str, dialect: &'a Dialect) -> Self {
        Self {
            source,
            dialect,
            lines: LineReader::new(source),
            stack: ContextStack::new(),
            indents: IndentStack::new(),
            pending: VecDeque::new(),
            error: None,
            finished: false,
            last_content_end: None,
            blank_lines: 0,
            suppress_newline: false,
        }
    }

    /// The lexical context stack as it stands after the tokens yielded so far
    pub fn stack(&self) -> &ContextStack {
        &self.stack
    }

    fn emit(&mut self, kind: TokenKind, span: Range<usize>) {
        let text = &self.source[span.clone()];
        self.pending.push_back(Token::new(kind, text, span));
    }

    fn process_line(&mut self, line: Line<'a>) -> Result<(), LexError> {
        if line.is_blank() {
            if self.last_content_end.is_some() {
                self.blank_lines += 1;
            }
            return Ok(());
        }

        let previous_end = self.last_content_end;
        let paragraph_break = previous_end.is_some()
            && self.blank_lines >= self.dialect.paragraph_break_blank_lines;
        if paragraph_break {
            self.indents.reset();
        }

        let kind = classify(&line, self.source, self.dialect);
        let bullet = match kind {
            LineKind::Bullet { ordered } => self
                .indents
                .depth(line.indent, self.dialect)
                .map(|depth| (ordered, depth)),
            _ => None,
        };
        let starts_block = matches!(kind, LineKind::Heading(_)) || bullet.is_some();

        if let Some(previous_end) = previous_end {
            let span = previous_end..line.start;
            if paragraph_break {
                self.emit(TokenKind::ParagraphBreak, span);
                self.stack.reset();
            } else if !starts_block && !self.suppress_newline {
                self.emit(TokenKind::Newline, span);
            }
        }
        self.blank_lines = 0;
        self.suppress_newline = false;
        self.last_content_end = Some(line.content_end());

        match (kind, bullet) {
            (LineKind::Heading(heading), _) => self.heading(&line, heading),
            (_, Some((ordered, depth))) => {
                self.stack.reset();
                self.emit(TokenKind::Bullet { ordered, depth }, line.runs[0].span());
                self.inline(&line.runs[1..])
            }
            _ => self.inline(&line.runs),
        }
    }

    fn heading(&mut self, line: &Line<'a>, heading: HeadingLine) -> Result<(), LexError> {
        let HeadingLine {
            level,
            marker_bytes,
            content,
        } = heading;
        self.stack.reset();
        self.indents.reset();

        self.emit(
            TokenKind::HeadingStart(level),
            content.start - marker_bytes..content.start,
        );
        self.stack.push(Context::Heading(level));
        for run in &line.runs {
            let start = run.start.max(content.start);
            let end = run.end().min(content.end);
            if start < end {
                self.emit(TokenKind::Word, start..end);
            }
        }
        self.stack.pop(content.end)?;
        self.emit(
            TokenKind::HeadingEnd(level),
            content.end..content.end + marker_bytes,
        );
        Ok(())
    }

    fn inline(&mut self, runs: &[Run<'a>]) -> Result<(), LexError> {
        let dialect = self.dialect;
        for (i, run) in runs.iter().enumerate() {
            let last = i + 1 == runs.len();
            let mut text = run.text;
            let mut line_break = None;
            if last {
                if let Some(stripped) = dialect
                    .line_break
                    .as_deref()
                    .and_then(|glyph| text.strip_suffix(glyph))
                {
                    line_break = Some(run.start + stripped.len()..run.end());
                    text = stripped;
                }
            }
            self.scan_run(text, run.start, !last)?;
            if let Some(span) = line_break {
                self.emit(TokenKind::LineBreak, span);
                self.suppress_newline = true;
            }
        }
        Ok(())
    }

    /// Scan one run of non-whitespace. `base` is the run's byte offset;
    /// `more_runs` tells whether another run follows on the same line.
    fn scan_run(&mut self, text: &str, base: usize, more_runs: bool) -> Result<(), LexError> {
        let dialect = self.dialect;
        let mut pos = 0;
        while pos < text.len() {
            let rest = &text[pos..];

            if let Some(style) = self.stack.awaiting() {
                let glyph = dialect.glyph(style);
                debug_assert!(rest.starts_with(glyph));
                let close_end = pos + glyph.len();
                self.stack
                    .unwind(dialect.composite_unwind_depth(), base + pos)?;
                let span = base + pos..base + close_end;
                match self.adjacent(style, &text[close_end..], more_runs) {
                    Some((adjacent, closes)) => {
                        self.emit(TokenKind::CloseAdjacent(style, adjacent), span);
                        if closes {
                            self.enter_await(adjacent, base + close_end)?;
                        }
                    }
                    None => self.emit(TokenKind::Close(style), span),
                }
                pos = close_end;
                continue;
            }

            if let Some(style) = dialect.style_at(rest) {
                if self.can_open(style, rest, more_runs) {
                    let end = pos + dialect.glyph(style).len();
                    self.emit(TokenKind::Open(style), base + pos..base + end);
                    self.stack.push(Context::Style(style));
                    pos = end;
                    continue;
                }
            }

            match self.word_end(rest) {
                Some((style, len)) => {
                    self.emit(TokenKind::Word, base + pos..base + pos + len);
                    self.enter_await(style, base + pos + len)?;
                    pos += len;
                }
                None => {
                    self.emit(TokenKind::Word, base + pos..base + text.len());
                    pos = text.len();
                }
            }
        }
        Ok(())
    }

    /// Length of a word running into the innermost style's closer, if it does.
    /// The word always keeps its first character.
    fn word_end(&self, rest: &str) -> Option<(Style, usize)> {
        let style = self.stack.innermost_style()?;
        let glyph = self.dialect.glyph(style);
        let skip = rest.chars().next().map_or(0, char::len_utf8);
        rest[skip..].find(glyph).map(|idx| (style, skip + idx))
    }

    /// The style whose delimiter directly follows a closer, and whether that
    /// delimiter closes the enclosing style (`true`) or opens a new one
    fn adjacent(&self, closed: Style, after: &str, more_runs: bool) -> Option<(Style, bool)> {
        let adjacent = self.dialect.style_at(after).filter(|s| *s != closed)?;
        if self.stack.innermost_style() == Some(adjacent) {
            Some((adjacent, true))
        } else if self.can_open(adjacent, after, more_runs) {
            Some((adjacent, false))
        } else {
            None
        }
    }

    fn can_open(&self, style: Style, rest: &str, more_runs: bool) -> bool {
        if self.stack.is_open(style) || self.stack.in_heading() {
            return false;
        }
        rest.len() > self.dialect.glyph(style).len() || (self.dialect.opener_padding && more_runs)
    }

    fn enter_await(&mut self, style: Style, offset: usize) -> Result<(), LexError> {
        let context = Context::AwaitingCloser(style);
        match self.dialect.await_mode {
            AwaitMode::Replacing => self.stack.replace_top(context, offset),
            AwaitMode::Stacked => {
                self.stack.push(context);
                Ok(())
            }
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                trace!(%token, span = ?token.span, "token");
                return Some(Ok(token));
            }
            if let Some(err) = self.error.take() {
                self.finished = true;
                return Some(Err(err));
            }
            if self.finished {
                return None;
            }
            match self.lines.next() {
                None => self.finished = true,
                Some(Err(err)) => self.error = Some(err),
                Some(Ok(line)) => {
                    if let Err(err) = self.process_line(line) {
                        self.error = Some(err);
                    }
                }
            }
        }
    }
}

impl FusedIterator for Tokenizer<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokens::Style::{Bold, Italic, Underline};
    use TokenKind::*;

    fn kinds(source: &str, dialect: &Dialect) -> Vec<TokenKind> {
        Tokenizer::new(source, dialect)
            .map(|t| t.unwrap().kind)
            .collect()
    }

    fn words(source: &str, dialect: &Dialect) -> Vec<String> {
        Tokenizer::new(source, dialect)
            .map(|t| t.unwrap())
            .filter(|t| t.kind == Word)
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_simple_bold() {
        let t2t = Dialect::txt2tags();
        assert_eq!(
            kinds("lorem **ipsum sit** dolor", &t2t),
            vec![Word, Open(Bold), Word, Word, Close(Bold), Word]
        );
        assert_eq!(
            words("lorem **ipsum sit** dolor", &t2t),
            vec!["lorem", "ipsum", "sit", "dolor"]
        );
    }

    #[test]
    fn test_opener_followed_by_space_is_a_word() {
        let t2t = Dialect::txt2tags();
        assert_eq!(
            kinds("lorem ** ipsum sit** dolor amet", &t2t),
            vec![Word; 6]
        );
    }

    #[test]
    fn test_stray_glyph_inside_style_is_text() {
        let t2t = Dialect::txt2tags();
        let source = "lorem **ipsum sit ** dolor** amet";
        assert_eq!(
            kinds(source, &t2t),
            vec![Word, Open(Bold), Word, Word, Word, Word, Close(Bold), Word]
        );
        assert_eq!(
            words(source, &t2t),
            vec!["lorem", "ipsum", "sit", "**", "dolor", "amet"]
        );
    }

    #[test]
    fn test_composite_closer_into_enclosing_style() {
        let t2t = Dialect::txt2tags();
        assert_eq!(
            kinds("**lorem __//ipsum// sit dolor__** amet", &t2t),
            vec![
                Open(Bold),
                Word,
                Open(Underline),
                Open(Italic),
                Word,
                Close(Italic),
                Word,
                Word,
                CloseAdjacent(Underline, Bold),
                Close(Bold),
                Word,
            ]
        );
    }

    #[test]
    fn test_composite_closer_into_new_style() {
        let t2t = Dialect::txt2tags();
        assert_eq!(
            kinds("**a**//b//", &t2t),
            vec![
                Open(Bold),
                Word,
                CloseAdjacent(Bold, Italic),
                Open(Italic),
                Word,
                Close(Italic),
            ]
        );
    }

    #[test]
    fn test_await_modes_yield_identical_tokens() {
        let replacing = Dialect::txt2tags();
        let mut stacked = Dialect::txt2tags();
        stacked.await_mode = AwaitMode::Stacked;
        for source in [
            "lorem **ipsum sit** dolor",
            "**lorem //ipsum sit// dolor** amet",
            "**lorem __//ipsum// sit dolor__** amet",
            "**a**//b// __c__",
            "lorem **ipsum sit ** dolor** amet",
            "//a **b** c//\n__d__",
        ] {
            assert_eq!(
                Tokenizer::new(source, &replacing).collect::<Vec<_>>(),
                Tokenizer::new(source, &stacked).collect::<Vec<_>>(),
                "token streams differ for {source:?}"
            );
        }
    }

    #[test]
    fn test_stack_is_initial_after_closed_styles() {
        for dialect in [Dialect::txt2tags(), Dialect::dokuwiki()] {
            let mut tokenizer = Tokenizer::new("**lorem __//ipsum// sit dolor__** amet", &dialect);
            for token in tokenizer.by_ref() {
                token.unwrap();
            }
            assert_eq!(tokenizer.stack().frames(), &[Context::Initial]);
        }
    }

    #[test]
    fn test_separators() {
        let t2t = Dialect::txt2tags();
        assert_eq!(
            kinds("\n\na\nb\n\n \nc\n\n", &t2t),
            vec![Word, Newline, Word, ParagraphBreak, Word]
        );
    }

    #[test]
    fn test_paragraph_break_resets_styles() {
        let t2t = Dialect::txt2tags();
        assert_eq!(
            kinds("**a\n\nb**", &t2t),
            vec![Open(Bold), Word, ParagraphBreak, Word]
        );
    }

    #[test]
    fn test_style_spans_soft_break() {
        let t2t = Dialect::txt2tags();
        assert_eq!(
            kinds("**a\nb**", &t2t),
            vec![Open(Bold), Word, Newline, Word, Close(Bold)]
        );
    }

    #[test]
    fn test_headings() {
        let t2t = Dialect::txt2tags();
        let source = "= lorem ipsum =\n\n\n\t   ==== sit dolor ====";
        assert_eq!(
            kinds(source, &t2t),
            vec![
                HeadingStart(1),
                Word,
                Word,
                HeadingEnd(1),
                ParagraphBreak,
                HeadingStart(4),
                Word,
                Word,
                HeadingEnd(4),
            ]
        );
        assert_eq!(words(source, &t2t), vec!["lorem", "ipsum", "sit", "dolor"]);
    }

    #[test]
    fn test_heading_glued_to_markers() {
        let t2t = Dialect::txt2tags();
        assert_eq!(words(" =sit dolor=", &t2t), vec!["sit", "dolor"]);
    }

    #[test]
    fn test_no_styles_inside_headings() {
        let t2t = Dialect::txt2tags();
        assert_eq!(
            kinds("== **bold** ==", &t2t),
            vec![HeadingStart(2), Word, HeadingEnd(2)]
        );
    }

    #[test]
    fn test_heading_then_text_uses_newline() {
        let t2t = Dialect::txt2tags();
        assert_eq!(
            kinds("= a =\namet", &t2t),
            vec![HeadingStart(1), Word, HeadingEnd(1), Newline, Word]
        );
    }

    #[test]
    fn test_bullets() {
        let t2t = Dialect::txt2tags();
        let source = "intro\n- jeden\n  - dwa\n- trzy\npiec";
        assert_eq!(
            kinds(source, &t2t),
            vec![
                Word,
                Bullet {
                    ordered: false,
                    depth: 1
                },
                Word,
                Bullet {
                    ordered: false,
                    depth: 2
                },
                Word,
                Bullet {
                    ordered: false,
                    depth: 1
                },
                Word,
                Newline,
                Word,
            ]
        );
    }

    #[test]
    fn test_dokuwiki_fixed_indent() {
        let doku = Dialect::dokuwiki();
        assert_eq!(
            kinds("* a\n  * b\n - c", &doku),
            vec![
                Bullet {
                    ordered: false,
                    depth: 1
                },
                Word,
                Bullet {
                    ordered: false,
                    depth: 2
                },
                Word,
                Newline,
                Word,
                Word,
            ]
        );
    }

    #[test]
    fn test_dokuwiki_line_break() {
        let doku = Dialect::dokuwiki();
        assert_eq!(
            kinds("lorem\\\\\nipsum \\\\", &doku),
            vec![Word, LineBreak, Word, LineBreak]
        );
        assert_eq!(kinds("a\\\\b c", &doku), vec![Word, Word]);
    }

    #[test]
    fn test_dokuwiki_padded_opener() {
        let doku = Dialect::dokuwiki();
        assert_eq!(
            kinds("** lorem ipsum** dolor", &doku),
            vec![Open(Bold), Word, Word, Close(Bold), Word]
        );
        let t2t = Dialect::txt2tags();
        assert_eq!(kinds("** lorem ipsum** dolor", &t2t), vec![Word; 4]);
    }

    #[test]
    fn test_spans_point_into_source() {
        let t2t = Dialect::txt2tags();
        let source = "ab **cd**";
        let tokens: Vec<_> = Tokenizer::new(source, &t2t).map(|t| t.unwrap()).collect();
        for token in &tokens {
            assert_eq!(&source[token.span.clone()], token.text);
        }
        assert_eq!(tokens[1].span, 3..5);
        assert_eq!(tokens[3].span, 7..9);
    }

    #[test]
    fn test_empty_and_blank_input() {
        let t2t = Dialect::txt2tags();
        assert!(kinds("", &t2t).is_empty());
        assert!(kinds(" \n\t\n\n", &t2t).is_empty());
    }
}
