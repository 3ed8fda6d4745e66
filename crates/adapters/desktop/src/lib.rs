//! # folio-adapter-desktop
//!
//! System signal source backed by the operating system's color scheme.
//!
//! The current value is read with [`dark_light::detect`]. Changes are
//! observed by polling on a background thread, one thread per live
//! subscription, stopped when the subscription is cancelled.
//!
//! ## Dependency rule
//!
//! Depends on `folio-app` (port traits) and `folio-domain` only.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use folio_app::ports::{SignalCallback, SignalSource, Subscription};
use folio_domain::id::SubscriptionId;

/// Default delay between two OS queries while watching.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Returns whether the host currently prefers a dark color scheme.
pub type Detector = fn() -> bool;

/// [`SignalSource`] reading the OS dark/light setting.
#[derive(Debug, Clone)]
pub struct DesktopSignalSource {
    poll_interval: Duration,
    detector: Detector,
}

impl Default for DesktopSignalSource {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl DesktopSignalSource {
    #[must_use]
    pub fn new(poll_interval: Duration) -> Self {
        Self {
            poll_interval,
            detector: os_prefers_dark,
        }
    }

    /// Replace the OS query, e.g. to force a mode in tests.
    #[must_use]
    pub fn with_detector(mut self, detector: Detector) -> Self {
        self.detector = detector;
        self
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl SignalSource for DesktopSignalSource {
    fn prefers_dark(&self) -> bool {
        (self.detector)()
    }

    fn watch(&self, on_change: SignalCallback) -> Subscription {
        let id = SubscriptionId::new();
        let detector = self.detector;
        let interval = self.poll_interval;
        let (stop_tx, stop_rx) = mpsc::channel::<()>();
        // Baseline taken before returning: any later OS change is reported.
        let mut last = detector();

        let spawned = std::thread::Builder::new()
            .name(format!("folio-signal-{id}"))
            .spawn(move || {
                loop {
                    match stop_rx.recv_timeout(interval) {
                        Err(RecvTimeoutError::Timeout) => {
                            let current = detector();
                            if current != last {
                                last = current;
                                tracing::debug!(%id, prefers_dark = current, "OS color scheme changed");
                                on_change(current);
                            }
                        }
                        Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    }
                }
                tracing::debug!(%id, "OS color scheme watcher stopped");
            });

        match spawned {
            Ok(_handle) => Subscription::new(move || drop(stop_tx)),
            Err(err) => {
                tracing::warn!(%err, "failed to start OS color scheme watcher");
                Subscription::noop()
            }
        }
    }
}

/// Query the OS; an unknown or undetectable scheme counts as light.
fn os_prefers_dark() -> bool {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => true,
        Ok(_) => false,
        Err(err) => {
            tracing::debug!(error = ?err, "OS color scheme detection failed");
            false
        }
    }
}
