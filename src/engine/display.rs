//! The single consumer of the frame queue.

use async_trait::async_trait;
use log::{debug, warn};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tokio::time::sleep;

use super::preview::Frame;

/// Something that can show a full frame, replacing whatever was there.
#[async_trait]
pub trait DisplaySink: Send {
    async fn render(&mut self, text: &str) -> io::Result<()>;
}

/// Renders queued frames in order until every producer has gone away,
/// waiting `throttle` after each one so the sink is never flooded.
///
/// A sink error ends the loop; the receiver is dropped on return so
/// producers see a closed queue instead of blocking forever.
pub async fn drain_frames<S: DisplaySink + ?Sized>(
    mut frames: Receiver<Frame>,
    sink: &mut S,
    throttle: Duration,
) -> io::Result<usize> {
    let mut rendered = 0usize;
    while let Some(frame) = frames.recv().await {
        if let Err(e) = sink.render(&frame.text).await {
            warn!("Display write failed after {} frames: {}", rendered, e);
            return Err(e);
        }
        rendered += 1;
        sleep(throttle).await;
    }
    debug!("Frame queue closed after {} frames", rendered);
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingSink;
    use tokio::sync::mpsc;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_renders_in_queue_order() {
        let (tx, rx) = mpsc::channel(8);
        for text in ["a", "ab", "abc"] {
            tx.send(Frame::input(text.to_string())).await.unwrap();
        }
        tx.send(Frame::preview(1, "abcd".to_string())).await.unwrap();
        drop(tx);

        let mut sink = RecordingSink::default();
        let rendered = drain_frames(rx, &mut sink, Duration::from_millis(50))
            .await
            .unwrap();
        assert_eq!(rendered, 4);
        assert_eq!(sink.frames, vec!["a", "ab", "abc", "abcd"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttles_between_frames() {
        let (tx, rx) = mpsc::channel(8);
        for i in 0..4 {
            tx.send(Frame::input(i.to_string())).await.unwrap();
        }
        drop(tx);

        let start = Instant::now();
        let mut sink = RecordingSink::default();
        drain_frames(rx, &mut sink, Duration::from_millis(50))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(200));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sink_error_closes_queue() {
        let (tx, rx) = mpsc::channel(8);
        tx.send(Frame::input("ok".to_string())).await.unwrap();
        tx.send(Frame::input("boom".to_string())).await.unwrap();

        let mut sink = RecordingSink {
            fail_on: Some("boom".to_string()),
            ..Default::default()
        };
        let result = drain_frames(rx, &mut sink, Duration::ZERO).await;
        assert!(result.is_err());
        assert_eq!(sink.frames, vec!["ok"]);
        assert!(tx.send(Frame::input("late".to_string())).await.is_err());
    }
}
