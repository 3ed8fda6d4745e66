//! # folio-adapter-memory
//!
//! In-process implementations of every port, for embedding and tests.
//!
//! | Port | Adapter | Behaviour |
//! |------|---------|-----------|
//! | `PreferenceStorage` | [`InMemoryStorage`] | `HashMap` behind a mutex; share it via `Arc` to simulate restarts |
//! | `StyleSink` | [`RecordingStyleSink`] | Keeps a [`ClassList`](folio_domain::class_list::ClassList) and the history of applied themes |
//! | `SignalSource` | [`ManualSignalSource`] | Signal changed by hand; counts live subscriptions |
//!
//! ## Dependency rule
//!
//! Depends on `folio-app` (port traits) and `folio-domain` only.

mod signal;
mod storage;
mod style_sink;

pub use signal::ManualSignalSource;
pub use storage::InMemoryStorage;
pub use style_sink::RecordingStyleSink;
