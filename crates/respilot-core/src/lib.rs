//! Resilience Pilot core: error surface, uptime tracking, and chaos state.
//!
//! This crate holds the transport-agnostic pieces of the service — the fault
//! taxonomy, the process start-time tracker, and the degraded-mode toggle.
//! It intentionally carries no HTTP or runtime dependencies so these
//! primitives can be constructed and exercised in isolation by tests.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `PilotError`/`Result` so the serving
//! process does not crash on bad input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod chaos;
pub mod error;
pub mod uptime;

pub use chaos::ChaosState;
pub use error::{PilotError, Result};
pub use uptime::UptimeTracker;
