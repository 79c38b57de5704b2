//! # Core Session Logic
//!
//! The prefix index, the typed buffer, and the session state machine.
//! It knows nothing about terminals or timers.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Trie (prefix index)  │
//!                    │  • Session (state)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No terminal. No clock. │
//!                    └───────────┬─────────────┘
//!                                │ Effects
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │  ENGINE (tokio)         │
//!                    │  debounce, preview,     │
//!                    │  display queue          │
//!                    └───────────┬─────────────┘
//!                                ▼
//!                    ┌─────────────────────────┐
//!                    │  TUI (ratatui/crossterm)│
//!                    └─────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`trie`]: `Trie`, the frequency-annotated prefix index, and ranking
//! - [`buffer`]: `InputBuffer` and current/last word extraction
//! - [`suggest`]: `SuggestionSet`, ranked candidates with a wrapping cursor
//! - [`state`]: `Session`, all mutable session state in one place
//! - [`action`]: `Key`, `Action`, `Effect` and the `update()` reducer
//! - [`dictionary`]: seeding the trie from a word list
//! - [`config`]: layered configuration

pub mod action;
pub mod buffer;
pub mod config;
pub mod dictionary;
pub mod state;
pub mod suggest;
pub mod trie;
