//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;

use async_trait::async_trait;

use crate::core::state::Session;
use crate::core::trie::Trie;
use crate::engine::DisplaySink;

/// A display that remembers every frame it was asked to show.
#[derive(Default)]
pub struct RecordingSink {
    pub frames: Vec<String>,
    /// Fail (without recording) when asked to render exactly this text.
    pub fail_on: Option<String>,
}

#[async_trait]
impl DisplaySink for RecordingSink {
    async fn render(&mut self, text: &str) -> io::Result<()> {
        if self.fail_on.as_deref() == Some(text) {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.frames.push(text.to_string());
        Ok(())
    }
}

/// Creates a session whose trie holds each of `words` once.
pub fn seeded_session(words: &[&str]) -> Session {
    let mut trie = Trie::new();
    for word in words {
        trie.insert(word);
    }
    Session::new(trie)
}
