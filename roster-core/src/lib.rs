//! Core types for the roster activity-signup service.
//!
//! Defines the `Activity` record, the thread-safe in-memory registry that
//! owns all mutable state, and the built-in seed list loaded at startup.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod activity;
pub mod error;
pub mod registry;
pub mod seed;

pub use activity::Activity;
pub use error::RegistryError;
pub use registry::ActivityRegistry;
pub use seed::seed_activities;
