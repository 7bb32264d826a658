//! Lexical context stack
//!
//! The engine's mode is an explicit stack of frames, outermost first. The
//! bottom frame is always [`Context::Initial`] and can never be popped:
//!
//! ```text
//! **lorem __//ipsum
//!
//! [Initial, Style(Bold), Style(Underline), Style(Italic)]
//! ```
//!
//! Each tokenizer owns its stack, so independent conversions never share
//! state.

use super::tokens::Style;
use crate::error::LexError;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Initial,
    /// Inside an open inline style
    Style(Style),
    /// A word inside the style just ended at the style's delimiter
    AwaitingCloser(Style),
    Heading(u8),
}

#[derive(Debug, Clone)]
pub struct ContextStack {
    frames: Vec<Context>,
}

impl ContextStack {
    pub fn new() -> Self {
        Self {
            frames: vec![Context::Initial],
        }
    }

    pub fn push(&mut self, context: Context) {
        debug!(?context, depth = self.frames.len() + 1, "push lexical context");
        self.frames.push(context);
    }

    /// Pop the top frame. Popping `Initial` is an underflow.
    pub fn pop(&mut self, offset: usize) -> Result<Context, LexError> {
        if self.frames.len() <= 1 {
            return Err(LexError::ContextUnderflow { offset });
        }
        let context = self.frames.pop().ok_or(LexError::ContextUnderflow { offset })?;
        debug!(?context, depth = self.frames.len(), "pop lexical context");
        Ok(context)
    }

    /// Pop `count` frames
    pub fn unwind(&mut self, count: usize, offset: usize) -> Result<(), LexError> {
        for _ in 0..count {
            self.pop(offset)?;
        }
        Ok(())
    }

    /// Swap the top frame for `context`. `Initial` cannot be replaced.
    pub fn replace_top(&mut self, context: Context, offset: usize) -> Result<(), LexError> {
        self.pop(offset)?;
        self.push(context);
        Ok(())
    }

    /// Drop everything above `Initial`
    pub fn reset(&mut self) {
        if self.frames.len() > 1 {
            debug!(dropped = self.frames.len() - 1, "reset lexical context");
            self.frames.truncate(1);
        }
    }

    pub fn top(&self) -> Context {
        self.frames.last().copied().unwrap_or(Context::Initial)
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn frames(&self) -> &[Context] {
        &self.frames
    }

    /// Style whose closer is expected next, if any
    pub fn awaiting(&self) -> Option<Style> {
        match self.top() {
            Context::AwaitingCloser(style) => Some(style),
            _ => None,
        }
    }

    /// Innermost open style
    pub fn innermost_style(&self) -> Option<Style> {
        self.frames.iter().rev().find_map(|frame| match frame {
            Context::Style(style) | Context::AwaitingCloser(style) => Some(*style),
            _ => None,
        })
    }

    pub fn is_open(&self, style: Style) -> bool {
        self.frames.iter().any(|frame| {
            matches!(frame, Context::Style(s) | Context::AwaitingCloser(s) if *s == style)
        })
    }

    pub fn in_heading(&self) -> bool {
        self.frames
            .iter()
            .any(|frame| matches!(frame, Context::Heading(_)))
    }
}

impl Default for ContextStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stack_is_initial() {
        let stack = ContextStack::new();
        assert_eq!(stack.top(), Context::Initial);
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.innermost_style(), None);
    }

    #[test]
    fn test_popping_initial_underflows() {
        let mut stack = ContextStack::new();
        assert_eq!(stack.pop(3), Err(LexError::ContextUnderflow { offset: 3 }));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_unwind_past_initial_underflows() {
        let mut stack = ContextStack::new();
        stack.push(Context::Style(Style::Bold));
        assert!(stack.unwind(2, 0).is_err());
        assert_eq!(stack.frames(), &[Context::Initial]);
    }

    #[test]
    fn test_innermost_style_and_awaiting() {
        let mut stack = ContextStack::new();
        stack.push(Context::Style(Style::Bold));
        stack.push(Context::Style(Style::Italic));
        assert_eq!(stack.innermost_style(), Some(Style::Italic));
        assert_eq!(stack.awaiting(), None);

        stack.replace_top(Context::AwaitingCloser(Style::Italic), 0).unwrap();
        assert_eq!(stack.awaiting(), Some(Style::Italic));
        assert!(stack.is_open(Style::Italic));
        assert!(stack.is_open(Style::Bold));
        assert!(!stack.is_open(Style::Underline));
    }

    #[test]
    fn test_replace_initial_underflows() {
        let mut stack = ContextStack::new();
        assert!(stack
            .replace_top(Context::AwaitingCloser(Style::Bold), 0)
            .is_err());
    }

    #[test]
    fn test_reset() {
        let mut stack = ContextStack::new();
        stack.push(Context::Heading(2));
        assert!(stack.in_heading());
        stack.reset();
        assert_eq!(stack.frames(), &[Context::Initial]);
        assert!(!stack.in_heading());
    }
}
