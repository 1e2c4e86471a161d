//! Edge-triggered skip/stop requests for a single guild.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Notify;

/// A control request raised by a command handler for the drive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Skip,
    Stop,
}

/// Per-guild signal flags.
///
/// Handlers only ever raise a flag; the drive loop is the only reader and it
/// clears a flag in the same step that observes it.
#[derive(Debug, Default)]
pub struct ControlSignals {
    skip: AtomicBool,
    stop: AtomicBool,
    wake: Notify,
}

impl ControlSignals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise a signal and wake the drive loop if it is waiting.
    pub fn raise(&self, signal: Signal) {
        match signal {
            Signal::Skip => self.skip.store(true, Ordering::SeqCst),
            Signal::Stop => self.stop.store(true, Ordering::SeqCst),
        }
        self.wake.notify_one();
    }

    /// Observe and clear the pending signal, if any. Stop wins over skip; a
    /// skip raised alongside a stop is left pending.
    pub fn take(&self) -> Option<Signal> {
        if self.stop.swap(false, Ordering::SeqCst) {
            Some(Signal::Stop)
        } else if self.skip.swap(false, Ordering::SeqCst) {
            Some(Signal::Skip)
        } else {
            None
        }
    }

    /// Drop any stale requests left over from a previous loop.
    pub fn reset(&self) {
        self.skip.store(false, Ordering::SeqCst);
        self.stop.store(false, Ordering::SeqCst);
    }

    /// Wait until a signal is raised or `interval` has elapsed, whichever
    /// comes first.
    pub async fn wait(&self, interval: Duration) {
        tokio::select! {
            _ = self.wake.notified() => {}
            _ = tokio::time::sleep(interval) => {}
        }
    }
}
