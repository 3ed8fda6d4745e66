//! Hand-rolled port fakes shared by the service tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use folio_domain::class_list::ClassList;
use folio_domain::error::FolioError;
use folio_domain::theme::EffectiveTheme;

use crate::ports::{PreferenceStorage, SignalCallback, SignalSource, StyleSink, Subscription};

#[derive(Default)]
pub struct FakeStorage {
    values: Mutex<HashMap<String, String>>,
    broken: AtomicBool,
}

impl FakeStorage {
    pub fn with(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn break_backend(&self) {
        self.broken.store(true, Ordering::SeqCst);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn check(&self) -> Result<(), FolioError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(FolioError::Storage(Box::new(std::io::Error::other(
                "backend unavailable",
            ))));
        }
        Ok(())
    }
}

impl PreferenceStorage for FakeStorage {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        self.check()?;
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        self.check()?;
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeSink {
    classes: Mutex<ClassList>,
    writes: AtomicUsize,
}

impl FakeSink {
    pub fn classes(&self) -> ClassList {
        self.classes.lock().unwrap().clone()
    }

    pub fn marker(&self) -> Option<EffectiveTheme> {
        self.classes.lock().unwrap().theme()
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl StyleSink for FakeSink {
    fn apply_style(&self, theme: EffectiveTheme) -> Result<(), FolioError> {
        self.classes.lock().unwrap().set_theme(theme);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

type Listener = Arc<dyn Fn(bool) + Send + Sync>;

#[derive(Default)]
pub struct FakeSignal {
    dark: AtomicBool,
    listeners: Arc<Mutex<Vec<(usize, Listener)>>>,
    next_id: AtomicUsize,
    flip_on_read: AtomicBool,
    listeners_at_flip: AtomicUsize,
}

impl FakeSignal {
    pub fn new(dark: bool) -> Self {
        let signal = Self::default();
        signal.dark.store(dark, Ordering::SeqCst);
        signal
    }

    /// A signal whose value silently flips right after it is first read,
    /// as an OS change racing with start-up would.
    pub fn flipping(dark: bool) -> Self {
        let signal = Self::new(dark);
        signal.flip_on_read.store(true, Ordering::SeqCst);
        signal
    }

    /// Listeners registered when the flipping read happened.
    pub fn listeners_at_flip(&self) -> usize {
        self.listeners_at_flip.load(Ordering::SeqCst)
    }

    /// Change the signal and notify every listener registered at call time.
    pub fn emit(&self, dark: bool) {
        self.dark.store(dark, Ordering::SeqCst);
        let listeners: Vec<Listener> = self
            .listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in listeners {
            listener(dark);
        }
    }

    /// Grab the listeners without firing, to simulate an in-flight delivery.
    pub fn snapshot_listeners(&self) -> Vec<Listener> {
        self.listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect()
    }

    pub fn active(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl SignalSource for FakeSignal {
    fn prefers_dark(&self) -> bool {
        if self.flip_on_read.swap(false, Ordering::SeqCst) {
            self.listeners_at_flip.store(self.active(), Ordering::SeqCst);
            return self.dark.fetch_xor(true, Ordering::SeqCst);
        }
        self.dark.load(Ordering::SeqCst)
    }

    fn watch(&self, on_change: SignalCallback) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.listeners
            .lock()
            .unwrap()
            .push((id, Arc::from(on_change)));
        let listeners = Arc::clone(&self.listeners);
        Subscription::new(move || {
            listeners.lock().unwrap().retain(|(other, _)| *other != id);
        })
    }
}
