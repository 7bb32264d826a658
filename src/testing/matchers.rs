//! Text matching for assertions

/// How an actual text is compared against the expected one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    /// Panic with `context` in the message when `actual` does not match
    pub fn assert(&self, actual: &str, context: &str) {
        match self {
            TextMatch::Exact(expected) => assert_eq!(
                actual, expected,
                "{context}: Expected text to be '{expected}', but got '{actual}'"
            ),
            TextMatch::StartsWith(prefix) => assert!(
                actual.starts_with(prefix.as_str()),
                "{context}: Expected text to start with '{prefix}', but got '{actual}'"
            ),
            TextMatch::Contains(substring) => assert!(
                actual.contains(substring.as_str()),
                "{context}: Expected text to contain '{substring}', but got '{actual}'"
            ),
        }
    }
}
