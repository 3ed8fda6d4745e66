//! Application services: use-case implementations.
//!
//! Each service accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod theme_controller;
pub mod theme_store;

#[cfg(test)]
pub(crate) mod testing;
