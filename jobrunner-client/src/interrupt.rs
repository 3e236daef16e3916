//! Interruptible waiting between polls

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

/// Handle to abort the waits of a [`JobRunner`](crate::JobRunner)
///
/// Interruption is sticky: once raised, the current wait and every later
/// wait of the runner (and its clones) end immediately.
#[derive(Debug, Clone)]
pub struct InterruptHandle {
    sender: Arc<watch::Sender<bool>>,
}

/// Returned by [`InterruptHandle::sleep`] when the wait was interrupted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interrupted;

impl InterruptHandle {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn interrupt(&self) {
        self.sender.send_replace(true);
    }

    pub fn is_interrupted(&self) -> bool {
        *self.sender.borrow()
    }

    /// Sleeps for `duration` unless interrupted first
    pub async fn sleep(&self, duration: Duration) -> Result<(), Interrupted> {
        let mut receiver = self.sender.subscribe();
        tokio::select! {
            _ = tokio::time::sleep(duration) => Ok(()),
            Ok(_) = receiver.wait_for(|interrupted| *interrupted) => Err(Interrupted),
        }
    }
}

impl Default for InterruptHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_sleep_completes_without_interrupt() {
        let handle = InterruptHandle::new();
        assert_eq!(handle.sleep(Duration::from_secs(15)).await, Ok(()));
        assert!(!handle.is_interrupted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_ends_running_sleep() {
        let handle = InterruptHandle::new();
        let interrupter = handle.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            interrupter.interrupt();
        });

        let started = tokio::time::Instant::now();
        assert_eq!(handle.sleep(Duration::from_secs(60)).await, Err(Interrupted));
        assert!(started.elapsed() < Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupt_is_sticky() {
        let handle = InterruptHandle::new();
        handle.interrupt();
        assert!(handle.is_interrupted());
        assert_eq!(handle.sleep(Duration::from_secs(15)).await, Err(Interrupted));
        assert_eq!(handle.sleep(Duration::from_secs(15)).await, Err(Interrupted));
    }
}
