//! Cross-screen invalidation signal.
//!
//! # Design
//! One process-wide counter shared by every mounted screen; incrementing it
//! is the only way one screen tells another "list data may be stale, reload".
//! The value itself carries no meaning beyond change detection.
//!
//! Rather than ambient global state, the signal is an explicit handle:
//! clones share the same counter, and screens receive the handle at
//! construction. Built on `tokio::sync::watch` so watchers suspend until the
//! generation actually changes. Because any await may let a bump slip in,
//! consumers should re-check [`RefreshWatcher::latest`] after resuming
//! rather than trusting a previously captured value.

use std::sync::Arc;

use tokio::sync::watch;

/// Shared invalidation counter. Clones observe and mutate the same value.
#[derive(Debug, Clone)]
pub struct RefreshSignal {
    tx: Arc<watch::Sender<u64>>,
}

impl RefreshSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0);
        Self { tx: Arc::new(tx) }
    }

    /// Current generation.
    pub fn read(&self) -> u64 {
        *self.tx.borrow()
    }

    /// Increment the generation by 1, waking every watcher.
    pub fn bump(&self) {
        self.tx.send_modify(|generation| *generation += 1);
    }

    /// Subscribe a screen to generation changes. Values current at
    /// subscription time count as already observed.
    pub fn watch(&self) -> RefreshWatcher {
        RefreshWatcher {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for RefreshSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// A single screen's subscription to the refresh signal.
#[derive(Debug)]
pub struct RefreshWatcher {
    rx: watch::Receiver<u64>,
}

impl RefreshWatcher {
    /// Wait until the generation moves past the last value this watcher
    /// observed, then return the latest generation. Returns `None` once
    /// every [`RefreshSignal`] handle has been dropped.
    pub async fn changed(&mut self) -> Option<u64> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }

    /// Latest generation, marked as observed.
    pub fn latest(&mut self) -> u64 {
        *self.rx.borrow_and_update()
    }
}
