// Rust guideline compliant 2026-02-09

//! Change subscriptions for the content store.

use crate::store::StoreState;
use std::sync::{Arc, Mutex, PoisonError, Weak};

pub(crate) type Listener = Box<dyn FnMut(&StoreState) + Send>;

/// Registered listeners, keyed by subscription id.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(u64, Listener)>,
}

/// Shared handle to the listener registry of one store.
#[derive(Clone, Default)]
pub(crate) struct Registry(Arc<Mutex<Listeners>>);

impl Registry {
    pub(crate) fn insert(&self, listener: Listener) -> Subscription {
        let mut listeners = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.entries.push((id, listener));
        Subscription {
            id,
            registry: Arc::downgrade(&self.0),
        }
    }

    pub(crate) fn notify(&self, state: &StoreState) {
        let mut listeners = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        for (_, listener) in listeners.entries.iter_mut() {
            listener(state);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entries
            .len()
    }
}

/// Handle returned by `ChallengeStore::subscribe`.
///
/// Dropping the handle keeps the listener registered; call
/// [`Subscription::unsubscribe`] to detach it.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Listeners>>,
}

impl Subscription {
    /// Detaches the listener.
    ///
    /// # Returns
    ///
    /// `true` if the listener was still registered.
    pub fn unsubscribe(self) -> bool {
        let Some(registry) = self.registry.upgrade() else {
            return false;
        };
        let mut listeners = registry.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.entries.len();
        listeners.entries.retain(|(id, _)| *id != self.id);
        listeners.entries.len() != before
    }

    /// Returns true while the owning store is alive.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.registry.strong_count() > 0
    }
}
