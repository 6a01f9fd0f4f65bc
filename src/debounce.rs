use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Delay between the last keystroke and the search it triggers.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Coalesces bursts of values: the callback only sees a value once no newer
/// one arrived for `delay`.
///
/// Must be created inside a tokio runtime. Values still pending when
/// [`Debouncer::finish`] is called are delivered immediately.
pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    task: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F, Fut>(delay: Duration, mut callback: F) -> Self
    where
        F: FnMut(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();

        let task = tokio::spawn(async move {
            let mut pending: Option<T> = None;
            loop {
                let Some(value) = pending.take() else {
                    match rx.recv().await {
                        Some(v) => pending = Some(v),
                        None => break,
                    }
                    continue;
                };

                tokio::select! {
                    next = rx.recv() => match next {
                        Some(v) => pending = Some(v), // restart the wait
                        None => {
                            callback(value).await;
                            break;
                        }
                    },
                    () = tokio::time::sleep(delay) => callback(value).await,
                }
            }
        });

        Self { tx, task }
    }

    /// Replace the pending value and restart the delay.
    pub fn call(&self, value: T) {
        if self.tx.send(value).is_err() {
            tracing::warn!("debouncer task is gone, dropping value");
        }
    }

    /// Stop accepting values, flush the pending one and wait for the callback.
    pub async fn finish(self) {
        drop(self.tx);
        if let Err(e) = self.task.await {
            tracing::error!(error = %e, "debouncer task failed");
        }
    }
}
