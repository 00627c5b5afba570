//! HTTP API for the roster activity-signup service.
//!
//! Exposes the activity registry over JSON: list activities, sign a
//! student up by email, and unregister them again.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod routes;
