use std::time::Duration;

use tokio::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, error};

/// Trailing-edge debounce. Values pushed within `delay` of each other collapse
/// into the last one, which is forwarded once `delay` passes with no new push.
///
/// The timer runs on a spawned task owned by this handle. Dropping the
/// handle stops the task and discards whatever was pending.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    sender: Sender<T>,
}

impl<T: Send + 'static> Debouncer<T> {
    const CHANNEL_SIZE: usize = 100;

    /// Must be called from inside a tokio runtime.
    pub fn new(delay: Duration, sink: Sender<T>) -> Self {
        let (tx, mut rx) = mpsc::channel::<T>(Self::CHANNEL_SIZE);
        tokio::spawn(async move {
            while let Some(mut latest) = rx.recv().await {
                loop {
                    match tokio::time::timeout(delay, rx.recv()).await {
                        Ok(Some(value)) => latest = value,
                        Ok(None) => {
                            debug!("Debouncer dropped with a pending value");
                            return;
                        }
                        Err(_) => break,
                    }
                }
                if sink.send(latest).await.is_err() {
                    debug!("Debounce sink closed, stopping");
                    return;
                }
            }
        });
        Self { sender: tx }
    }

    /// A debouncer together with the receiving end of its output.
    pub fn channel(delay: Duration) -> (Self, Receiver<T>) {
        let (sink, out) = mpsc::channel(Self::CHANNEL_SIZE);
        (Self::new(delay, sink), out)
    }

    pub async fn push(&self, value: T) {
        if let Err(e) = self.sender.send(value).await {
            error!("Debouncer task is gone: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{sleep, Instant};

    const DELAY: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn test_burst_collapses_to_last_value() {
        let (debouncer, mut out) = Debouncer::channel(DELAY);
        debouncer.push("a").await;
        sleep(Duration::from_millis(50)).await;
        debouncer.push("ab").await;
        sleep(Duration::from_millis(50)).await;
        debouncer.push("abc").await;
        sleep(Duration::from_millis(200)).await;
        debouncer.push("abcd").await;
        let last_push = Instant::now();

        assert_eq!(out.recv().await, Some("abcd"));
        assert!(last_push.elapsed() >= DELAY);

        sleep(Duration::from_secs(5)).await;
        assert!(out.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_separate_bursts_each_fire() {
        let (debouncer, mut out) = Debouncer::channel(DELAY);
        debouncer.push(1).await;
        sleep(Duration::from_millis(400)).await;
        debouncer.push(2).await;
        debouncer.push(3).await;
        assert_eq!(out.recv().await, Some(1));
        assert_eq!(out.recv().await, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_fires_before_quiet_period() {
        let (debouncer, mut out) = Debouncer::channel(DELAY);
        debouncer.push("x").await;
        sleep(Duration::from_millis(299)).await;
        assert!(out.try_recv().is_err());
        sleep(Duration::from_millis(2)).await;
        assert_eq!(out.try_recv().ok(), Some("x"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_discards_pending() {
        let (debouncer, mut out) = Debouncer::channel(DELAY);
        debouncer.push("pending").await;
        drop(debouncer);
        assert_eq!(out.recv().await, None);
    }
}
