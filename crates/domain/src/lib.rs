//! # folio-domain
//!
//! Pure domain model for the folio theme subsystem.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define the **Preference** (what the user asked for: light, dark, system)
//! - Define the **EffectiveTheme** (what is actually rendered: light or dark)
//! - Define the **resolve** rule mapping (preference, system signal) to an
//!   effective theme
//! - Define the **ClassList** marker set held by the rendering surface
//! - Define the **ThemeChange** notification broadcast on every apply
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod change;
pub mod class_list;
pub mod theme;
