//! # Blinking Preview
//!
//! While a completion is on offer, a background task alternates the screen
//! between `base + candidate` and `base` until it is told to stop.
//!
//! Each spawn gets its own stop channel and a new generation number, and
//! `cancel` waits for the task to exit before returning. Once `cancel` (or
//! the next `spawn`) returns, no further frame from the old generation can
//! reach the queue.

use log::{debug, warn};
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// One complete screen image, as queued for the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    /// Preview generation that produced this frame; `None` for input echoes.
    pub generation: Option<u64>,
}

impl Frame {
    pub fn input(text: String) -> Self {
        Self {
            text,
            generation: None,
        }
    }

    pub fn preview(generation: u64, text: String) -> Self {
        Self {
            text,
            generation: Some(generation),
        }
    }
}

struct ActivePreview {
    generation: u64,
    stop: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

/// Owns the (at most one) running preview task.
pub struct PreviewController {
    frames: mpsc::Sender<Frame>,
    interval: Duration,
    last_generation: u64,
    active: Option<ActivePreview>,
}

impl PreviewController {
    pub fn new(frames: mpsc::Sender<Frame>, interval: Duration) -> Self {
        Self {
            frames,
            // `interval_at` panics on a zero period.
            interval: interval.max(MIN_INTERVAL),
            last_generation: 0,
            active: None,
        }
    }

    /// Stops any running preview, then starts blinking `candidate` after
    /// `base`. Returns the new task's generation.
    pub async fn spawn(&mut self, base: String, candidate: String) -> u64 {
        self.cancel().await;

        self.last_generation += 1;
        let generation = self.last_generation;
        let (stop, stopped) = oneshot::channel();
        let handle = tokio::spawn(blink(
            generation,
            [format!("{base}{candidate}"), base],
            self.frames.clone(),
            self.interval,
            stopped,
        ));
        debug!("Preview {} started for {:?}", generation, candidate);

        self.active = Some(ActivePreview {
            generation,
            stop,
            handle,
        });
        generation
    }

    /// Stops the running preview and waits until it has exited.
    /// Returns false if nothing was running.
    pub async fn cancel(&mut self) -> bool {
        let Some(active) = self.active.take() else {
            return false;
        };
        // The task may already be gone if the display hung up.
        let _ = active.stop.send(());
        if let Err(e) = active.handle.await {
            warn!("Preview {} ended abnormally: {}", active.generation, e);
        }
        debug!("Preview {} stopped", active.generation);
        true
    }

    #[cfg(test)]
    pub(crate) fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Generation of the running preview, if any.
    #[cfg(test)]
    pub(crate) fn generation(&self) -> Option<u64> {
        self.active.as_ref().map(|a| a.generation)
    }
}

async fn blink(
    generation: u64,
    frames_cycle: [String; 2],
    frames: mpsc::Sender<Frame>,
    period: Duration,
    mut stopped: oneshot::Receiver<()>,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    for text in frames_cycle.iter().cycle() {
        tokio::select! {
            biased;
            _ = &mut stopped => return,
            _ = ticker.tick() => {}
        }
        // A frame is either queued whole or not at all.
        tokio::select! {
            biased;
            _ = &mut stopped => return,
            sent = frames.send(Frame::preview(generation, text.clone())) => {
                if sent.is_err() {
                    return;
                }
            }
        }
    }
}
