//! Subscriber registry and unsubscribe handles

use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

pub(crate) type Listener = Arc<dyn Fn() + Send + Sync>;

/// Listeners in subscription order
#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener)>>,
}

impl Subscribers {
    pub(crate) fn add(&self, listener: Listener) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.listeners.lock().push((id, listener));
        id
    }

    pub(crate) fn remove(&self, id: u64) -> bool {
        let mut listeners = self.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Current listeners, cloned out so none of them runs under the lock
    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.listeners.lock().len()
    }
}

/// Handle returned by [`crate::Store::subscribe`]
///
/// Dropping the handle keeps the subscription alive; call
/// [`unsubscribe`](Subscription::unsubscribe) to remove it.
#[derive(Debug, Clone)]
pub struct Subscription {
    id: u64,
    subscribers: Weak<Subscribers>,
}

impl Subscription {
    pub(crate) fn new(id: u64, subscribers: &Arc<Subscribers>) -> Self {
        Self {
            id,
            subscribers: Arc::downgrade(subscribers),
        }
    }

    /// Remove the listener from the store
    ///
    /// Returns `false` if it was already removed or the store is gone.
    /// Takes effect from the next notification round; a round already in
    /// progress still calls every listener it started with.
    pub fn unsubscribe(&self) -> bool {
        let removed = self
            .subscribers
            .upgrade()
            .is_some_and(|subscribers| subscribers.remove(self.id));
        if removed {
            log::debug!("Subscriber {} removed", self.id);
        }
        removed
    }
}
