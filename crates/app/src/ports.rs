//! Port definitions: traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the host
//! environment. Together, one implementation of each forms the capability
//! provider a [`ThemeStore`](crate::services::theme_store::ThemeStore) is
//! built from.

pub mod signal;
pub mod storage;
pub mod style_sink;

pub use signal::{SignalCallback, SignalSource, Subscription};
pub use storage::PreferenceStorage;
pub use style_sink::StyleSink;
