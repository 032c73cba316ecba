//! Periodic driver for the countdown loop.
//!
//! [`Ticker::spawn`] starts a tokio task that calls the tick function once
//! per period. The returned [`TickerHandle`] is the only way to stop it:
//! cancel it explicitly, or drop it. Each tick runs to completion before
//! the next one is scheduled, so cancelling never interrupts a tick.

use std::ops::ControlFlow;
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::MissedTickBehavior;
use tracing::debug;

pub struct Ticker;

impl Ticker {
    /// Spawn the loop on the current tokio runtime.
    ///
    /// The first tick happens immediately. Ticks missed while the process
    /// was suspended are skipped, not replayed. Returning
    /// `ControlFlow::Break` from `on_tick` ends the loop, and the break
    /// value is handed to whoever joins the handle.
    pub fn spawn<F, B>(period: Duration, mut on_tick: F) -> TickerHandle<B>
    where
        F: FnMut() -> ControlFlow<B> + Send + 'static,
        B: Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    biased;
                    _ = &mut cancel_rx => {
                        debug!("ticker cancelled");
                        break None;
                    }
                    _ = interval.tick() => {
                        if let ControlFlow::Break(value) = on_tick() {
                            debug!("ticker finished");
                            break Some(value);
                        }
                    }
                }
            }
        });
        TickerHandle {
            cancel: Some(cancel_tx),
            task: Some(task),
        }
    }
}

/// Owned handle to a running ticker. Dropping it cancels the loop.
pub struct TickerHandle<B = ()> {
    cancel: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<Option<B>>>,
}

impl<B> TickerHandle<B> {
    /// Request the loop to stop before its next tick.
    pub fn cancel(&mut self) {
        if let Some(tx) = self.cancel.take() {
            let _ = tx.send(());
        }
    }

    /// Wait for the loop to end, either by itself or after [`cancel`].
    /// Yields the break value, or `None` when the loop was cancelled.
    ///
    /// Safe to use in `tokio::select!`: if the wait is abandoned the loop
    /// keeps running and can be joined again.
    ///
    /// [`cancel`]: TickerHandle::cancel
    pub async fn join(&mut self) -> Result<Option<B>, JoinError> {
        let Some(task) = self.task.as_mut() else {
            return Ok(None);
        };
        let result = task.await;
        self.task = None;
        result
    }
}

impl<B> Drop for TickerHandle<B> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn ticks_until_break() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let mut handle = Ticker::spawn(Duration::from_secs(1), move || {
            if seen.fetch_add(1, Ordering::SeqCst) + 1 == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(handle.join().await.unwrap(), Some(()));
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_loop() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let mut handle: TickerHandle = Ticker::spawn(Duration::from_secs(1), move || {
            seen.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });
        tokio::time::sleep(Duration::from_millis(2500)).await;
        handle.cancel();
        assert_eq!(handle.join().await.unwrap(), None);
        let after_cancel = count.load(Ordering::SeqCst);
        assert_eq!(after_cancel, 3);
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_handle_cancels() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();
        let handle: TickerHandle = Ticker::spawn(Duration::from_secs(1), move || {
            seen.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });
        tokio::time::sleep(Duration::from_millis(1500)).await;
        drop(handle);
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(count.load(Ordering::SeqCst) <= 2);
    }
}
