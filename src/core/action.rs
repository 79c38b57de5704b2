//! # Actions
//!
//! Everything that can happen in a session becomes an `Action`.
//! User presses Tab? That's `Action::Key(Key::Cycle)`.
//! Typing paused long enough? That's `Action::Evaluate`.
//!
//! The `update()` function applies an action to the session and returns the
//! effects the runtime has to carry out, in order. No I/O happens here.
//!
//! ```text
//! Session + Action  →  update()  →  Session' + [Effect]
//! ```
//!
//! ## Transitions
//!
//! | Mode       | Action             | Effects                              | Next       |
//! |------------|--------------------|--------------------------------------|------------|
//! | Typing     | Evaluate, matches  | SpawnPreview                         | Previewing |
//! | Typing     | Evaluate, none     | -                                    | Typing     |
//! | Typing     | Cycle / Commit     | - (ignored)                          | Typing     |
//! | Typing     | Char / Backspace   | Render                               | Typing     |
//! | Previewing | Cycle              | CancelPreview, SpawnPreview (next)   | Previewing |
//! | Previewing | Commit             | CancelPreview, Render (word + space) | Typing     |
//! | Previewing | other key          | CancelPreview, then as Typing        | Typing     |
//! | Previewing | Evaluate           | -                                    | Previewing |

use log::debug;

use crate::core::buffer::SEPARATOR;
use crate::core::state::{Mode, Session};
use crate::core::suggest::SuggestionSet;

/// A keystroke after terminal decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    /// Show the next ranked candidate (Tab).
    Cycle,
    /// Accept the previewed candidate (Enter).
    Commit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Key(Key),
    /// The debounce timer expired with no keystroke since.
    Evaluate,
}

/// Side effects requested by `update()`, applied in order by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show this full buffer text.
    Render(String),
    /// Stop the running preview and wait for it to finish.
    CancelPreview,
    /// Start blinking `candidate` after `base`.
    SpawnPreview { base: String, candidate: String },
}

pub fn update(session: &mut Session, action: Action) -> Vec<Effect> {
    let mut effects = Vec::new();
    match action {
        Action::Evaluate => evaluate(session, &mut effects),
        Action::Key(key) => {
            session.stats.keystrokes += 1;
            handle_key(session, key, &mut effects);
        }
    }
    effects
}

fn evaluate(session: &mut Session, effects: &mut Vec<Effect>) {
    if session.is_previewing() {
        return;
    }
    let word = session.buffer.current_word();
    let Some(suggestions) = SuggestionSet::from_candidates(session.trie.query(&word)) else {
        return;
    };
    debug!(
        "{} suggestion(s) for {:?}: {:?}",
        suggestions.len(),
        word,
        suggestions.items()
    );
    effects.push(spawn_preview(session, &suggestions));
    session.mode = Mode::Previewing(suggestions);
}

fn handle_key(session: &mut Session, key: Key, effects: &mut Vec<Effect>) {
    if let Mode::Previewing(suggestions) = &mut session.mode {
        match key {
            Key::Cycle => {
                let candidate = suggestions.cycle().to_string();
                debug!(
                    "Cycled to candidate {} ({:?})",
                    suggestions.cursor(),
                    candidate
                );
                effects.push(Effect::CancelPreview);
                effects.push(Effect::SpawnPreview {
                    base: session.buffer.to_string(),
                    candidate,
                });
                session.stats.previews += 1;
                return;
            }
            Key::Commit => {
                let candidate = suggestions.current().to_string();
                debug!("Committed candidate {:?}", candidate);
                effects.push(Effect::CancelPreview);
                session.mode = Mode::Typing;
                session.buffer.push_str(&candidate);
                session.stats.commits += 1;
                type_char(session, SEPARATOR, effects);
                return;
            }
            _ => {
                effects.push(Effect::CancelPreview);
                session.mode = Mode::Typing;
            }
        }
    }

    match key {
        // Cycle and commit only mean something while a candidate is shown.
        Key::Cycle | Key::Commit => {}
        Key::Backspace => {
            if session.buffer.backspace().is_some() {
                effects.push(Effect::Render(session.buffer.to_string()));
            }
        }
        Key::Char(c) => type_char(session, c, effects),
    }
}

fn type_char(session: &mut Session, c: char, effects: &mut Vec<Effect>) {
    if c == SEPARATOR && !session.buffer.ends_with_separator() {
        let word = session.buffer.last_word();
        if !word.is_empty() {
            session.trie.insert(&word);
            session.stats.words_learned += 1;
            debug!("Learned {:?} (count {})", word, session.trie.count(&word));
        }
    }
    session.buffer.push(c);
    effects.push(Effect::Render(session.buffer.to_string()));
}

fn spawn_preview(session: &mut Session, suggestions: &SuggestionSet) -> Effect {
    session.stats.previews += 1;
    Effect::SpawnPreview {
        base: session.buffer.to_string(),
        candidate: suggestions.current().to_string(),
    }
}
