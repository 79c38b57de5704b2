//! # TUI Adapter
//!
//! The terminal-specific layer. Puts the terminal into raw mode, reads key
//! events, and draws frames with ratatui.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Threads and tasks
//!
//! - **Reader thread**: blocking `crossterm::event::read`, one event at a
//!   time, forwarding keys over a bounded channel.
//! - **Display task**: drains the frame queue into a [`sink::TerminalSink`].
//! - **Dispatcher**: the session loop from [`crate::engine`], run on the
//!   caller's task.

mod event;
mod sink;

use log::{info, warn};
use std::fmt;
use std::io;
use tokio::sync::mpsc;

use crate::core::config::ResolvedConfig;
use crate::core::state::{Session, SessionStats};
use crate::core::trie::Trie;
use crate::engine::{Dispatcher, SessionError, drain_frames};

use sink::TerminalSink;

/// Pending keys before the reader thread blocks.
const KEY_QUEUE_CAPACITY: usize = 64;

#[derive(Debug)]
pub enum RunError {
    /// Raw mode / alternate screen could not be set up.
    Terminal(io::Error),
    Session(SessionError),
    /// The display task failed to write or panicked.
    Display(String),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunError::Terminal(e) => write!(f, "terminal setup failed: {e}"),
            RunError::Session(e) => write!(f, "session error: {e}"),
            RunError::Display(msg) => write!(f, "display error: {msg}"),
        }
    }
}

impl std::error::Error for RunError {}

/// Restores the terminal however the session ends.
struct TerminalModeGuard;

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        ratatui::restore();
        info!("Terminal restored");
    }
}

/// Runs one interactive session over the real terminal.
pub async fn run(config: &ResolvedConfig, trie: Trie) -> Result<SessionStats, RunError> {
    let terminal = ratatui::try_init().map_err(RunError::Terminal)?;
    let _terminal_mode_guard = TerminalModeGuard;
    info!("Terminal in raw mode");

    let timing = config.timing();
    let (frames_tx, frames_rx) = mpsc::channel(config.frame_queue_capacity);
    let display = tokio::spawn(async move {
        let mut sink = TerminalSink::new(terminal);
        drain_frames(frames_rx, &mut sink, timing.render_throttle).await
    });

    let (keys_tx, keys_rx) = mpsc::channel(KEY_QUEUE_CAPACITY);
    // Detached: it may still be blocked in `read` when the session ends.
    let _reader = event::spawn_reader(keys_tx);

    let dispatcher = Dispatcher::new(Session::new(trie), timing, frames_tx);
    let outcome = dispatcher.run(keys_rx).await;

    // The dispatcher held the last frame sender, so the display finishes
    // the queue and stops.
    let displayed = match display.await {
        Ok(Ok(count)) => Ok(count),
        Ok(Err(e)) => Err(RunError::Display(e.to_string())),
        Err(e) => {
            warn!("Display task failed: {}", e);
            Err(RunError::Display(e.to_string()))
        }
    };

    let frames = displayed?;
    let session = outcome.map_err(RunError::Session)?;
    info!("{} frames displayed", frames);
    Ok(session.stats)
}
