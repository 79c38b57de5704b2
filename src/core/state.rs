//! # Session State
//!
//! All mutable state for one typing session, owned by the dispatcher.
//!
//! ```text
//! Session
//! ├── trie: Trie             // dictionary + learned words
//! ├── buffer: InputBuffer    // everything typed so far
//! ├── mode: Mode             // Typing | Previewing(SuggestionSet)
//! └── stats: SessionStats    // counters reported at session end
//! ```
//!
//! State changes only happen through `update(session, action)` in action.rs.

use crate::core::buffer::InputBuffer;
use crate::core::suggest::SuggestionSet;
use crate::core::trie::Trie;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// No candidate on screen.
    #[default]
    Typing,
    /// A preview task is blinking `suggestions.current()`.
    Previewing(SuggestionSet),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub keystrokes: u64,
    pub words_learned: u64,
    pub previews: u64,
    pub commits: u64,
}

#[derive(Debug, Default)]
pub struct Session {
    pub trie: Trie,
    pub buffer: InputBuffer,
    pub mode: Mode,
    pub stats: SessionStats,
}

impl Session {
    pub fn new(trie: Trie) -> Self {
        Self {
            trie,
            ..Default::default()
        }
    }

    pub fn is_previewing(&self) -> bool {
        matches!(self.mode, Mode::Previewing(_))
    }

    pub fn suggestions(&self) -> Option<&SuggestionSet> {
        match &self.mode {
            Mode::Previewing(set) => Some(set),
            Mode::Typing => None,
        }
    }
}
