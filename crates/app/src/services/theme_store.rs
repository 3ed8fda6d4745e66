//! Theme store: stateless theme operations over the capability provider.
//!
//! The store owns no theme state of its own. It reads and writes the
//! persisted preference, consults the live system signal, marks the rendering
//! surface, and broadcasts a [`ThemeChange`] on every apply. Port failures are
//! logged and degrade to defaults; no operation here fails its caller.

use tokio::sync::broadcast;

use folio_domain::change::ThemeChange;
use folio_domain::theme::{EffectiveTheme, Preference, resolve};

use crate::event_bus::ThemeEventBus;
use crate::null::{NullSignalSource, NullStorage, NullStyleSink};
use crate::ports::{PreferenceStorage, SignalCallback, SignalSource, StyleSink, Subscription};

/// Key of the persisted preference entry.
pub const STORAGE_KEY: &str = "theme";

/// Theme operations over a storage, a style sink and a signal source.
pub struct ThemeStore<S, K, G> {
    storage: S,
    sink: K,
    signal: G,
    bus: ThemeEventBus,
}

/// A store with no host environment, as during pre-render.
pub type DetachedThemeStore = ThemeStore<NullStorage, NullStyleSink, NullSignalSource>;

impl DetachedThemeStore {
    /// Build a store over the null provider.
    #[must_use]
    pub fn detached() -> Self {
        Self::new(NullStorage, NullStyleSink, NullSignalSource)
    }
}

impl<S, K, G> ThemeStore<S, K, G>
where
    S: PreferenceStorage,
    K: StyleSink,
    G: SignalSource,
{
    /// Create a store over the given ports with its own change bus.
    pub fn new(storage: S, sink: K, signal: G) -> Self {
        Self {
            storage,
            sink,
            signal,
            bus: ThemeEventBus::default(),
        }
    }

    /// Read the persisted preference.
    ///
    /// Missing, malformed or unreadable values yield [`Preference::System`].
    pub fn read_preference(&self) -> Preference {
        match self.storage.get(STORAGE_KEY) {
            Ok(None) => Preference::default(),
            Ok(Some(raw)) => raw.parse::<Preference>().unwrap_or_else(|err| {
                tracing::warn!(%err, "ignoring malformed stored theme preference");
                Preference::default()
            }),
            Err(err) => {
                tracing::warn!(%err, "failed to read theme preference, using default");
                Preference::default()
            }
        }
    }

    /// Query the live system signal. Not cached.
    pub fn read_system_signal(&self) -> bool {
        self.signal.prefers_dark()
    }

    /// Resolve `preference` against the current system signal.
    ///
    /// The signal is only consulted for [`Preference::System`].
    pub fn resolve(&self, preference: Preference) -> EffectiveTheme {
        match preference {
            Preference::System => resolve(preference, self.read_system_signal()),
            concrete => resolve(concrete, false),
        }
    }

    /// Resolve, mark the surface, persist and broadcast.
    ///
    /// Repeated calls with the same preference leave the same end state.
    #[tracing::instrument(skip(self))]
    pub fn apply(&self, preference: Preference) -> EffectiveTheme {
        let effective = self.resolve(preference);
        self.write_marker(effective);
        self.persist(preference);
        self.bus.publish(ThemeChange::new(preference, effective));
        tracing::debug!(%effective, "theme applied");
        effective
    }

    /// Flip the current effective theme and apply the flipped concrete value.
    ///
    /// Toggling from [`Preference::System`] leaves system mode; a binary
    /// toggle cannot produce it again.
    #[tracing::instrument(skip(self))]
    pub fn toggle(&self, preference: Preference) -> Preference {
        let next = Preference::from(self.resolve(preference).toggle_target());
        self.apply(next);
        next
    }

    /// Register `on_change` for system signal changes.
    ///
    /// The callback is never invoked synchronously from this call.
    pub fn watch_system_signal(
        &self,
        on_change: impl Fn(bool) + Send + Sync + 'static,
    ) -> Subscription {
        let callback: SignalCallback = Box::new(on_change);
        self.signal.watch(callback)
    }

    /// Start-up routine: mark the surface for the `preference` read with
    /// [`read_preference`](Self::read_preference) and persist it again.
    ///
    /// The system signal is read once, so the returned theme is the one the
    /// surface carries. A malformed stored value is overwritten with its
    /// normalized form. Nothing is broadcast.
    pub fn initialize(&self, preference: Preference) -> EffectiveTheme {
        let effective = self.resolve(preference);
        self.write_marker(effective);
        self.persist(preference);
        tracing::debug!(%preference, %effective, "theme initialized");
        effective
    }

    /// Mark the surface with a system-derived theme without persisting.
    ///
    /// Used while following the system signal; broadcasts the change with
    /// [`Preference::System`].
    pub fn render(&self, effective: EffectiveTheme) {
        self.write_marker(effective);
        self.bus.publish(ThemeChange::new(Preference::System, effective));
        tracing::debug!(%effective, "system theme rendered");
    }

    /// Subscribe to change notifications.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ThemeChange> {
        self.bus.subscribe()
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn sink(&self) -> &K {
        &self.sink
    }

    #[must_use]
    pub fn signal(&self) -> &G {
        &self.signal
    }

    fn write_marker(&self, effective: EffectiveTheme) {
        if let Err(err) = self.sink.apply_style(effective) {
            tracing::warn!(%err, %effective, "failed to update theme marker");
        }
    }

    fn persist(&self, preference: Preference) {
        if let Err(err) = self.storage.set(STORAGE_KEY, preference.as_str()) {
            tracing::warn!(%err, %preference, "failed to persist theme preference");
        }
    }
}
