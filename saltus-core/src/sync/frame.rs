//! Frame-ready signal
//!
//! Bridges the vsync interrupt and the render loop. The signal holds at
//! most one permit: signalling while a permit is outstanding is absorbed,
//! so a render loop that falls behind skips vsyncs instead of working off
//! a backlog.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;

/// Single-slot, coalescing wake-up
pub struct FrameSignal<M: RawMutex> {
    inner: Signal<M, ()>,
}

impl<M: RawMutex> Default for FrameSignal<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex> FrameSignal<M> {
    pub const fn new() -> Self {
        Self {
            inner: Signal::new(),
        }
    }

    /// Post a permit; non-blocking, safe from interrupt context
    pub fn signal(&self) {
        self.inner.signal(());
    }

    /// Wait for a permit and consume it
    pub async fn wait(&self) {
        self.inner.wait().await
    }

    /// Check for an outstanding permit without consuming it
    pub fn is_pending(&self) -> bool {
        self.inner.signaled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_futures::{block_on, poll_once};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    #[test]
    fn test_starts_clear() {
        let signal = FrameSignal::<NoopRawMutex>::new();
        assert!(!signal.is_pending());
        assert!(poll_once(signal.wait()).is_pending());
    }

    #[test]
    fn test_signals_coalesce() {
        let signal = FrameSignal::<NoopRawMutex>::new();
        signal.signal();
        signal.signal();
        signal.signal();

        // First wait returns at once, the second has nothing to consume
        block_on(signal.wait());
        assert!(!signal.is_pending());
        assert!(poll_once(signal.wait()).is_pending());
    }
}
