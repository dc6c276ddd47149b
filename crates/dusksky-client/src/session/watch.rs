//! Session-change notification.
//!
//! Decouples the session store from callers that must react to login/logout.
//! Callbacks carry no payload; subscribers re-query the session themselves.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// Handle returned by [`SessionWatchers::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback = Arc<dyn Fn() + Send + Sync>;

/// Registry of session-change callbacks.
///
/// Delivery is synchronous and in registration order. The callback list is
/// snapshotted before a delivery, so unsubscribing while a notification is in
/// flight only takes effect for subsequent notifications.
#[derive(Default)]
pub(crate) struct SessionWatchers {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(SubscriptionId, Callback)>>,
}

impl SessionWatchers {
    pub(crate) fn subscribe(&self, callback: impl Fn() + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(callback)));
        id
    }

    /// Remove a callback. Returns whether it was still registered.
    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    pub(crate) fn notify(&self) {
        let snapshot: Vec<Callback> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in snapshot {
            callback();
        }
    }
}
