//! # Suggestion Set
//!
//! The ranked completions for the word under the cursor, plus which one is
//! currently being previewed. Built fresh on each debounce trigger.

use crate::core::trie::Candidate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSet {
    items: Vec<String>,
    cursor: usize,
}

impl SuggestionSet {
    /// Builds a set from ranked candidates, keeping their order.
    ///
    /// Empty completions (the typed word itself) are dropped since they
    /// have nothing to append. Returns `None` if nothing is left.
    pub fn from_candidates(candidates: Vec<Candidate>) -> Option<Self> {
        let items: Vec<String> = candidates
            .into_iter()
            .filter(|c| !c.text.is_empty())
            .map(|c| c.text)
            .collect();
        if items.is_empty() {
            return None;
        }
        Some(Self { items, cursor: 0 })
    }

    /// The candidate currently on preview.
    pub fn current(&self) -> &str {
        &self.items[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Advances to the next candidate, wrapping to the first.
    pub fn cycle(&mut self) -> &str {
        self.cursor = (self.cursor + 1) % self.items.len();
        self.current()
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
