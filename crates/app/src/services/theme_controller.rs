//! Theme controller: observable theme state for presentation code.
//!
//! Holds the current preference and its effective theme, routes every
//! mutation through the [`ThemeStore`], and keeps a system-signal
//! subscription alive exactly while the preference is
//! [`Preference::System`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;

use folio_domain::theme::{EffectiveTheme, Preference};

use crate::ports::{PreferenceStorage, SignalSource, StyleSink, Subscription};
use crate::services::theme_store::ThemeStore;

/// Point-in-time view of the controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub preference: Preference,
    pub effective: EffectiveTheme,
}

impl ThemeSnapshot {
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.effective.is_dark()
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        self.effective.is_light()
    }
}

struct ControllerState {
    snapshot: ThemeSnapshot,
    subscription: Option<Subscription>,
    /// Bumped on every new subscription; callbacks carrying an older value
    /// are ignored.
    generation: u64,
}

struct Inner<S, K, G> {
    store: Arc<ThemeStore<S, K, G>>,
    state: Mutex<ControllerState>,
    observers: watch::Sender<ThemeSnapshot>,
}

/// Reactive wrapper around a [`ThemeStore`].
///
/// Clones share the same state. The system-signal subscription is cancelled
/// when the last clone is dropped.
pub struct ThemeController<S, K, G> {
    inner: Arc<Inner<S, K, G>>,
}

impl<S, K, G> Clone for ThemeController<S, K, G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, K, G> ThemeController<S, K, G>
where
    S: PreferenceStorage + 'static,
    K: StyleSink + 'static,
    G: SignalSource + 'static,
{
    /// Initialize the theme through `store` and start tracking it.
    ///
    /// The stored preference is read and rendered immediately; if it is
    /// [`Preference::System`], the system signal is watched from here on.
    /// The subscription is taken before the signal is read, so a change in
    /// between reaches the controller once construction completes.
    pub fn new(store: Arc<ThemeStore<S, K, G>>) -> Self {
        let preference = store.read_preference();
        // Replaced by the initialized snapshot before any observer exists.
        let pending = ThemeSnapshot {
            preference,
            effective: EffectiveTheme::Light,
        };
        let (observers, _) = watch::channel(pending);
        let inner = Arc::new(Inner {
            store,
            state: Mutex::new(ControllerState {
                snapshot: pending,
                subscription: None,
                generation: 0,
            }),
            observers,
        });
        {
            let mut state = inner.lock_state();
            Inner::sync_subscription(&inner, &mut state);
            let effective = inner.store.initialize(preference);
            inner.commit(
                &mut state,
                ThemeSnapshot {
                    preference,
                    effective,
                },
            );
        }
        Self { inner }
    }

    #[must_use]
    pub fn snapshot(&self) -> ThemeSnapshot {
        self.inner.lock_state().snapshot
    }

    #[must_use]
    pub fn preference(&self) -> Preference {
        self.snapshot().preference
    }

    #[must_use]
    pub fn effective(&self) -> EffectiveTheme {
        self.snapshot().effective
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.snapshot().is_dark()
    }

    #[must_use]
    pub fn is_light(&self) -> bool {
        self.snapshot().is_light()
    }

    /// Whether a system-signal subscription is currently live.
    #[must_use]
    pub fn is_following_system(&self) -> bool {
        self.inner.lock_state().subscription.is_some()
    }

    /// Receiver notified on every state change, for re-rendering views.
    #[must_use]
    pub fn observe(&self) -> watch::Receiver<ThemeSnapshot> {
        self.inner.observers.subscribe()
    }

    #[must_use]
    pub fn store(&self) -> &Arc<ThemeStore<S, K, G>> {
        &self.inner.store
    }

    /// Select `preference` explicitly.
    pub fn set_theme(&self, preference: Preference) {
        let mut state = self.inner.lock_state();
        state.snapshot.preference = preference;
        Inner::sync_subscription(&self.inner, &mut state);
        let effective = self.inner.store.apply(preference);
        self.inner.commit(
            &mut state,
            ThemeSnapshot {
                preference,
                effective,
            },
        );
    }

    /// Flip between light and dark, leaving system mode if needed.
    ///
    /// Returns the new, always concrete, preference.
    pub fn toggle_theme(&self) -> Preference {
        let mut state = self.inner.lock_state();
        let preference = self.inner.store.toggle(state.snapshot.preference);
        state.snapshot.preference = preference;
        Inner::sync_subscription(&self.inner, &mut state);
        let effective = self.inner.store.resolve(preference);
        self.inner.commit(
            &mut state,
            ThemeSnapshot {
                preference,
                effective,
            },
        );
        preference
    }
}

impl<S, K, G> Inner<S, K, G>
where
    S: PreferenceStorage + 'static,
    K: StyleSink + 'static,
    G: SignalSource + 'static,
{
    fn lock_state(&self) -> MutexGuard<'_, ControllerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Subscribe or unsubscribe so that a subscription exists iff the
    /// preference follows the system.
    fn sync_subscription(this: &Arc<Self>, state: &mut ControllerState) {
        let wanted = state.snapshot.preference.follows_system();
        match (wanted, state.subscription.is_some()) {
            (true, false) => {
                state.generation += 1;
                let generation = state.generation;
                let weak = Arc::downgrade(this);
                let subscription = this.store.watch_system_signal(move |is_dark| {
                    if let Some(inner) = weak.upgrade() {
                        inner.on_system_signal(generation, is_dark);
                    }
                });
                state.subscription = Some(subscription);
                tracing::info!(generation, "following system color scheme");
            }
            (false, true) => {
                if let Some(subscription) = state.subscription.take() {
                    subscription.cancel();
                }
                tracing::info!("stopped following system color scheme");
            }
            _ => {}
        }
    }

    fn on_system_signal(&self, generation: u64, is_dark: bool) {
        let mut state = self.lock_state();
        if generation != state.generation || !state.snapshot.preference.follows_system() {
            tracing::debug!(generation, is_dark, "ignoring stale system signal");
            return;
        }
        let effective = EffectiveTheme::from_signal(is_dark);
        self.store.render(effective);
        self.commit(
            &mut state,
            ThemeSnapshot {
                preference: Preference::System,
                effective,
            },
        );
    }

    fn commit(&self, state: &mut ControllerState, snapshot: ThemeSnapshot) {
        state.snapshot = snapshot;
        self.observers.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}
