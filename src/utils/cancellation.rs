//! # Cancellation Signal
//!
//! A caller-owned, cloneable cancellation handle with one-shot revocable
//! subscriptions.
//!
//! Every clone of a [`CancellationSignal`] shares the same state. Cancelling
//! any clone fires every live subscriber exactly once. A [`Subscription`]
//! removes its callback when dropped, so an operation that resolves before
//! the signal fires leaves nothing registered behind.

use log::trace;
use std::collections::HashMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

type Callback = Box<dyn FnOnce() + Send + 'static>;

#[derive(Default)]
struct SignalState {
    cancelled: bool,
    next_id: u64,
    subscribers: HashMap<u64, Callback>,
}

/// Shared cancellation signal.
///
/// # Examples
///
/// ```
/// use tilegrid::CancellationSignal;
///
/// let signal = CancellationSignal::new();
/// assert!(!signal.is_cancelled());
///
/// signal.cancel();
/// signal.cancel(); // idempotent
/// assert!(signal.is_cancelled());
/// ```
#[derive(Clone, Default)]
pub struct CancellationSignal {
    inner: Arc<Mutex<SignalState>>,
}

impl CancellationSignal {
    /// Creates a new, unsignalled cancellation signal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once [`cancel`](Self::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.lock().cancelled
    }

    /// Signals cancellation.
    ///
    /// The first call invokes every live subscriber once; later calls do
    /// nothing. Callbacks run after the internal lock is released, so they
    /// may freely use the signal themselves.
    ///
    /// A panicking callback does not stop the others from running; the first
    /// panic is resumed once every callback has been invoked.
    pub fn cancel(&self) {
        let callbacks: Vec<Callback> = {
            let mut state = self.lock();
            if state.cancelled {
                return;
            }
            state.cancelled = true;
            state.subscribers.drain().map(|(_, cb)| cb).collect()
        };

        trace!("cancellation signalled, notifying {} subscriber(s)", callbacks.len());
        let mut first_panic = None;
        for callback in callbacks {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(callback)) {
                if first_panic.is_none() {
                    first_panic = Some(payload);
                }
            }
        }
        if let Some(payload) = first_panic {
            panic::resume_unwind(payload);
        }
    }

    /// Registers a callback to run when the signal fires.
    ///
    /// If the signal has already fired, the callback runs immediately and
    /// the returned subscription is inert.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.lock();
        if state.cancelled {
            drop(state);
            callback();
            return Subscription::inert();
        }

        let id = state.next_id;
        state.next_id += 1;
        state.subscribers.insert(id, Box::new(callback));

        Subscription {
            signal: Arc::downgrade(&self.inner),
            id: Some(id),
        }
    }

    /// Number of subscriptions that are still registered.
    pub fn subscriber_count(&self) -> usize {
        self.lock().subscribers.len()
    }

    fn lock(&self) -> MutexGuard<'_, SignalState> {
        // The state is a flag and a map; a panicking callback never holds the lock.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl fmt::Debug for CancellationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("CancellationSignal")
            .field("cancelled", &state.cancelled)
            .field("subscribers", &state.subscribers.len())
            .finish()
    }
}

/// Handle to a registered cancellation callback.
///
/// Dropping the handle revokes the callback if it has not fired yet.
#[must_use = "dropping a Subscription immediately revokes its callback"]
#[derive(Debug)]
pub struct Subscription {
    signal: Weak<Mutex<SignalState>>,
    id: Option<u64>,
}

impl Subscription {
    fn inert() -> Self {
        Self {
            signal: Weak::new(),
            id: None,
        }
    }

    /// Revokes the callback. Safe to call after the signal fired.
    pub fn unsubscribe(&mut self) {
        let Some(id) = self.id.take() else {
            return;
        };
        if let Some(inner) = self.signal.upgrade() {
            let mut state = inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            state.subscribers.remove(&id);
        }
    }

    /// Returns true while the callback is still registered.
    pub fn is_active(&self) -> bool {
        match (self.id, self.signal.upgrade()) {
            (Some(id), Some(inner)) => inner
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .subscribers
                .contains_key(&id),
            _ => false,
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
