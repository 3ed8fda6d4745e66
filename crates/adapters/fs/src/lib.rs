//! # folio-adapter-fs
//!
//! Filesystem-backed ports so the theme survives process restarts.
//!
//! ## Responsibilities
//! - [`FilePreferenceStorage`]: implements `PreferenceStorage` over a flat
//!   JSON object (`{"theme": "dark"}`)
//! - [`FileStyleSink`]: implements `StyleSink` over a file holding the root
//!   class list, one whitespace-separated line
//!
//! ## Dependency rule
//! Depends on `folio-app` (for port traits) and `folio-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
mod storage;
mod style_sink;

pub use error::FsError;
pub use storage::FilePreferenceStorage;
pub use style_sink::FileStyleSink;
