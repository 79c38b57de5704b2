//! # Input Buffer
//!
//! Everything the user has typed this session, as a sequence of chars.
//! Only the tail is ever edited: typing appends, backspace pops.

use std::fmt;

/// Character that separates words in the buffer.
pub const SEPARATOR: char = ' ';

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    chars: Vec<char>,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, c: char) {
        self.chars.push(c);
    }

    pub fn push_str(&mut self, text: &str) {
        self.chars.extend(text.chars());
    }

    /// Removes the last character. Returns `None` on an empty buffer.
    pub fn backspace(&mut self) -> Option<char> {
        self.chars.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn ends_with_separator(&self) -> bool {
        self.chars.last() == Some(&SEPARATOR)
    }

    /// The word being typed right now: the trailing run of non-separator
    /// chars. Empty when the buffer is empty or ends in a separator.
    pub fn current_word(&self) -> String {
        let start = self
            .chars
            .iter()
            .rposition(|&c| c == SEPARATOR)
            .map_or(0, |i| i + 1);
        self.chars[start..].iter().collect()
    }

    /// The most recently completed word: trailing separators are skipped,
    /// then the run of non-separator chars before them is returned.
    pub fn last_word(&self) -> String {
        let end = self
            .chars
            .iter()
            .rposition(|&c| c != SEPARATOR)
            .map_or(0, |i| i + 1);
        let start = self.chars[..end]
            .iter()
            .rposition(|&c| c == SEPARATOR)
            .map_or(0, |i| i + 1);
        self.chars[start..end].iter().collect()
    }
}

impl fmt::Display for InputBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars
            .iter()
            .try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

impl From<&str> for InputBuffer {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_word_is_trailing_run() {
        assert_eq!(InputBuffer::from("foo bar").current_word(), "bar");
        assert_eq!(InputBuffer::from("foo").current_word(), "foo");
        assert_eq!(InputBuffer::from("foo bar ").current_word(), "");
        assert_eq!(InputBuffer::new().current_word(), "");
    }

    #[test]
    fn test_last_word_skips_trailing_separators() {
        assert_eq!(InputBuffer::from("foo bar ").last_word(), "bar");
        assert_eq!(InputBuffer::from("foo bar   ").last_word(), "bar");
        assert_eq!(InputBuffer::from("foo bar").last_word(), "bar");
        assert_eq!(InputBuffer::from("  solo").last_word(), "solo");
    }

    #[test]
    fn test_last_word_of_blank_buffer_is_empty() {
        assert_eq!(InputBuffer::new().last_word(), "");
        assert_eq!(InputBuffer::from("    ").last_word(), "");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut buffer = InputBuffer::new();
        assert_eq!(buffer.backspace(), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_push_and_pop_multibyte() {
        let mut buffer = InputBuffer::new();
        buffer.push_str("héllo");
        buffer.push('é');
        assert_eq!(buffer.len(), 6);
        assert_eq!(buffer.backspace(), Some('é'));
        assert_eq!(buffer.to_string(), "héllo");
    }

    #[test]
    fn test_ends_with_separator() {
        assert!(InputBuffer::from("a ").ends_with_separator());
        assert!(!InputBuffer::from("a").ends_with_separator());
        assert!(!InputBuffer::new().ends_with_separator());
    }
}
