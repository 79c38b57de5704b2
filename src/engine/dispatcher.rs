//! # Dispatcher
//!
//! The session event loop. One task owns the `Session` and waits on two
//! things at once: the next keystroke and the debounce timer. Each event
//! runs exactly one `update()` and its effects are applied before the next
//! event is looked at, so session state needs no locking.

use log::{debug, info, warn};
use std::fmt;
use tokio::sync::mpsc;

use crate::core::action::{Action, Effect, Key, update};
use crate::core::state::Session;

use super::Timing;
use super::debounce::Debounce;
use super::preview::{Frame, PreviewController};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The display stopped accepting frames mid-session.
    DisplayClosed,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::DisplayClosed => write!(f, "display closed"),
        }
    }
}

impl std::error::Error for SessionError {}

pub struct Dispatcher {
    session: Session,
    debounce: Debounce,
    preview: PreviewController,
    frames: mpsc::Sender<Frame>,
}

impl Dispatcher {
    pub fn new(session: Session, timing: Timing, frames: mpsc::Sender<Frame>) -> Self {
        Self {
            session,
            debounce: Debounce::new(timing.debounce),
            preview: PreviewController::new(frames.clone(), timing.preview_interval),
            frames,
        }
    }

    /// Runs the session until the key stream ends, then returns the final
    /// session state. The preview task is always stopped before returning.
    pub async fn run(mut self, mut keys: mpsc::Receiver<Key>) -> Result<Session, SessionError> {
        info!("Session started ({} words known)", self.session.trie.len());
        let result = self.event_loop(&mut keys).await;
        self.preview.cancel().await;

        let stats = self.session.stats;
        info!(
            "Session ended: {} keystrokes, {} words learned, {} previews, {} commits",
            stats.keystrokes, stats.words_learned, stats.previews, stats.commits
        );
        result.map(|()| self.session)
    }

    async fn event_loop(&mut self, keys: &mut mpsc::Receiver<Key>) -> Result<(), SessionError> {
        self.render(self.session.buffer.to_string()).await?;
        loop {
            let action = tokio::select! {
                key = keys.recv() => match key {
                    Some(key) => {
                        self.debounce.reset();
                        Action::Key(key)
                    }
                    None => {
                        debug!("Input stream ended");
                        return Ok(());
                    }
                },
                () = self.debounce.expired() => Action::Evaluate,
            };

            for effect in update(&mut self.session, action) {
                self.apply(effect).await?;
            }
        }
    }

    async fn apply(&mut self, effect: Effect) -> Result<(), SessionError> {
        match effect {
            Effect::Render(text) => self.render(text).await,
            Effect::CancelPreview => {
                self.preview.cancel().await;
                Ok(())
            }
            Effect::SpawnPreview { base, candidate } => {
                self.preview.spawn(base, candidate).await;
                Ok(())
            }
        }
    }

    async fn render(&mut self, text: String) -> Result<(), SessionError> {
        self.frames.send(Frame::input(text)).await.map_err(|_| {
            warn!("Display queue closed; ending session");
            SessionError::DisplayClosed
        })
    }
}
