//! # folio-app
//!
//! Application layer: theme use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `PreferenceStorage`: persistent key/value entry for the preference
//!   - `StyleSink`: the rendering surface's theme marker
//!   - `SignalSource`: the host's live "prefers dark" signal
//! - Provide the **null provider** used when no environment is available
//!   (pre-render, headless evaluation)
//! - Provide **in-process infrastructure** (theme change bus) that doesn't need IO
//! - Define the use-cases:
//!   - `ThemeStore`: read, resolve, apply, toggle, watch
//!   - `ThemeController`: observable state with conditional system tracking
//!
//! ## Dependency rule
//! Depends on `folio-domain` only (plus `tokio::sync` for channels).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod event_bus;
pub mod null;
pub mod ports;
pub mod services;
