//! In-process theme change bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;

use folio_domain::change::ThemeChange;

/// Default number of undelivered changes kept per subscriber.
pub const DEFAULT_CAPACITY: usize = 16;

/// Observer list for [`ThemeChange`] notifications.
///
/// Any component interested in theme changes subscribes explicitly.
/// Publishing succeeds even when there are no active subscribers
/// (the change is simply dropped).
#[derive(Debug, Clone)]
pub struct ThemeEventBus {
    sender: broadcast::Sender<ThemeChange>,
}

impl ThemeEventBus {
    /// Create a new bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to changes on this bus.
    ///
    /// Returns a receiver that will get all changes published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ThemeChange> {
        self.sender.subscribe()
    }

    /// Deliver `change` to every current subscriber.
    pub fn publish(&self, change: ThemeChange) {
        // send fails only when there are zero receivers.
        let _ = self.sender.send(change);
    }
}

impl Default for ThemeEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
