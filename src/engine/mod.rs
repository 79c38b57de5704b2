//! # Session Runtime
//!
//! The tokio side of a session: the debounce timer, the blinking preview
//! task, the ordered frame queue and the dispatcher loop that ties them to
//! `core::action::update`. Nothing here knows about a real terminal; input
//! arrives as `Key`s on a channel and output leaves through a `DisplaySink`.
//!
//! ```text
//!  keys ──► Dispatcher ──► frames (bounded mpsc) ──► drain_frames ──► DisplaySink
//!             │    ▲                ▲
//!             │    └── Debounce     │
//!             └──► PreviewController ┘  (one blinking task at a time)
//! ```

pub mod debounce;
pub mod dispatcher;
pub mod display;
pub mod preview;

use std::time::Duration;

pub use debounce::Debounce;
pub use dispatcher::{Dispatcher, SessionError};
pub use display::{DisplaySink, drain_frames};
pub use preview::{Frame, PreviewController};

/// Timer settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Quiet period after the last keystroke before suggesting.
    pub debounce: Duration,
    /// Time between preview blink frames.
    pub preview_interval: Duration,
    /// Minimum gap between two screen redraws.
    pub render_throttle: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(200),
            preview_interval: Duration::from_millis(200),
            render_throttle: Duration::from_millis(50),
        }
    }
}
