//! Multi-subscriber callback registry.
//!
//! [`Listeners::subscribe`] hands back a [`Subscription`] capability; dropping
//! it (or calling [`Subscription::unsubscribe`]) removes exactly that callback.
//! [`Listeners::emit`] calls every registered callback once, in no promised
//! order.
//!
//! On native targets a panicking callback is caught and logged, and the rest
//! still run. `wasm32-unknown-unknown` builds abort on panic, so there a
//! panicking callback ends the app; browser callbacks must handle their own
//! failures and never panic.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError, Weak};

type Callback<E> = Arc<dyn Fn(&E)>;

struct Slots<E> {
    next_id: u64,
    entries: Vec<(u64, Callback<E>)>,
}

/// Callback registry for events of type `E`.
pub struct Listeners<E> {
    slots: Arc<Mutex<Slots<E>>>,
}

impl<E> Clone for Listeners<E> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<E: 'static> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Listeners<E> {
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(Slots {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }

    /// Register a callback. It stays registered while the returned
    /// [`Subscription`] is alive.
    pub fn subscribe(&self, callback: impl Fn(&E) + 'static) -> Subscription {
        let id = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            let id = slots.next_id;
            slots.next_id += 1;
            slots.entries.push((id, Arc::new(callback)));
            id
        };

        let weak: Weak<Mutex<Slots<E>>> = Arc::downgrade(&self.slots);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(slots) = weak.upgrade() {
                    slots
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .entries
                        .retain(|(entry_id, _)| *entry_id != id);
                }
            })),
        }
    }

    /// Invoke every registered callback once. Returns how many ran to
    /// completion. Panics are only caught where unwinding is available.
    pub fn emit(&self, event: &E) -> usize {
        // Snapshot so callbacks may subscribe or unsubscribe while we iterate.
        let callbacks: Vec<Callback<E>> = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();

        let mut completed = 0;
        for callback in callbacks {
            match catch_unwind(AssertUnwindSafe(|| callback(event))) {
                Ok(()) => completed += 1,
                Err(_) => tracing::error!("Listener failed while handling event"),
            }
        }
        completed
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Removal capability for one registered callback.
#[must_use = "dropping a Subscription removes its callback immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Remove the callback now.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
