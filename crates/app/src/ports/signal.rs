//! Signal port: the host's live "prefers dark color scheme" capability.

use std::fmt;
use std::sync::Arc;

/// Callback invoked with the new "prefers dark" value on every change.
pub type SignalCallback = Box<dyn Fn(bool) + Send + Sync>;

/// Live source of the system color-scheme signal.
pub trait SignalSource: Send + Sync {
    /// Read the current value. Never cached.
    fn prefers_dark(&self) -> bool;

    /// Register `on_change`, invoked on every subsequent change of the signal.
    ///
    /// Implementations must not invoke the callback from within `watch`
    /// itself; callers read the current value with
    /// [`prefers_dark`](Self::prefers_dark) first. The callback may run on
    /// any thread.
    fn watch(&self, on_change: SignalCallback) -> Subscription;
}

impl<T: SignalSource + ?Sized> SignalSource for Arc<T> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }

    fn watch(&self, on_change: SignalCallback) -> Subscription {
        (**self).watch(on_change)
    }
}

/// Handle to a live signal subscription.
///
/// Cancelling (explicitly or by dropping the handle) deregisters the
/// callback. Cancellation does not wait for a callback that is already
/// running, so owners must tolerate one late delivery.
#[must_use = "dropping a subscription cancels it"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Wrap the deregistration routine of an adapter.
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription that was never registered anywhere.
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Deregister the callback now.
    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting() -> (Arc<AtomicUsize>, Subscription) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sub = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (calls, sub)
    }

    #[test]
    fn should_run_cancel_once_when_cancelled_explicitly() {
        let (calls, sub) = counting();
        sub.cancel();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn should_run_cancel_when_dropped() {
        let (calls, sub) = counting();
        drop(sub);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn should_do_nothing_for_noop_subscription() {
        let sub = Subscription::noop();
        assert_eq!(format!("{sub:?}"), "Subscription { active: false }");
        sub.cancel();
    }
}
