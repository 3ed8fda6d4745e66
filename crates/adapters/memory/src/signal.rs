//! System signal driven by hand.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use folio_app::ports::{SignalCallback, SignalSource, Subscription};
use folio_domain::id::SubscriptionId;

type Listener = Arc<dyn Fn(bool) + Send + Sync>;
type Listeners = Arc<Mutex<HashMap<SubscriptionId, Listener>>>;

/// A "prefers dark" signal changed through [`set_prefers_dark`](Self::set_prefers_dark).
#[derive(Default)]
pub struct ManualSignalSource {
    prefers_dark: AtomicBool,
    listeners: Listeners,
}

impl ManualSignalSource {
    #[must_use]
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            prefers_dark: AtomicBool::new(prefers_dark),
            listeners: Listeners::default(),
        }
    }

    /// Change the signal, notifying every live subscriber when it differs
    /// from the current value.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        if self.prefers_dark.swap(prefers_dark, Ordering::SeqCst) == prefers_dark {
            return;
        }
        // Callbacks may cancel their own subscription, so none run under the lock.
        let listeners: Vec<Listener> = lock(&self.listeners).values().cloned().collect();
        tracing::debug!(prefers_dark, count = listeners.len(), "system signal changed");
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    /// Number of subscriptions not yet cancelled.
    #[must_use]
    pub fn active_subscriptions(&self) -> usize {
        lock(&self.listeners).len()
    }
}

impl SignalSource for ManualSignalSource {
    fn prefers_dark(&self) -> bool {
        self.prefers_dark.load(Ordering::SeqCst)
    }

    fn watch(&self, on_change: SignalCallback) -> Subscription {
        let id = SubscriptionId::new();
        lock(&self.listeners).insert(id, Arc::from(on_change));
        tracing::debug!(%id, "signal subscription registered");

        let listeners = Arc::clone(&self.listeners);
        Subscription::new(move || {
            lock(&listeners).remove(&id);
            tracing::debug!(%id, "signal subscription cancelled");
        })
    }
}

fn lock(listeners: &Listeners) -> MutexGuard<'_, HashMap<SubscriptionId, Listener>> {
    listeners.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, SignalCallback) {
        let calls = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&calls);
        let callback: SignalCallback = Box::new(move |_| {
            inner.fetch_add(1, Ordering::SeqCst);
        });
        (calls, callback)
    }

    #[test]
    fn should_report_initial_value() {
        assert!(ManualSignalSource::new(true).prefers_dark());
        assert!(!ManualSignalSource::default().prefers_dark());
    }

    #[test]
    fn should_notify_only_on_actual_change() {
        let source = ManualSignalSource::new(false);
        let (calls, callback) = counter();
        let _sub = source.watch(callback);

        source.set_prefers_dark(false);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        source.set_prefers_dark(true);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(source.prefers_dark());
    }

    #[test]
    fn should_stop_notifying_after_cancel() {
        let source = ManualSignalSource::new(false);
        let (calls, callback) = counter();
        let sub = source.watch(callback);
        assert_eq!(source.active_subscriptions(), 1);

        sub.cancel();
        source.set_prefers_dark(true);

        assert_eq!(source.active_subscriptions(), 0);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn should_allow_callback_to_drop_its_own_subscription() {
        let source = Arc::new(ManualSignalSource::new(false));
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::default();
        let inner = Arc::clone(&slot);
        let sub = source.watch(Box::new(move |_| {
            inner.lock().unwrap().take();
        }));
        *slot.lock().unwrap() = Some(sub);

        source.set_prefers_dark(true);
        assert_eq!(source.active_subscriptions(), 0);
    }
}
