//! Debounce timer: every keystroke pushes the deadline back, and only a
//! full quiet period lets it fire.

use std::pin::Pin;
use std::time::Duration;

use tokio::time::{Instant, Sleep, sleep};

pub struct Debounce {
    delay: Duration,
    sleep: Pin<Box<Sleep>>,
    armed: bool,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            sleep: Box::pin(sleep(delay)),
            armed: false,
        }
    }

    /// Restarts the quiet period from now. Any earlier deadline is dropped.
    pub fn reset(&mut self) {
        self.sleep.as_mut().reset(Instant::now() + self.delay);
        self.armed = true;
    }

    #[cfg(test)]
    pub(crate) fn is_armed(&self) -> bool {
        self.armed
    }

    /// Completes once the current deadline passes, then disarms.
    /// Never completes while disarmed.
    ///
    /// Cancel-safe: dropping this future before it completes leaves the
    /// deadline in place.
    pub async fn expired(&mut self) {
        if !self.armed {
            std::future::pending::<()>().await;
        }
        self.sleep.as_mut().await;
        self.armed = false;
    }
}
