//! Resilience Pilot server library.
//!
//! This crate wires configuration, shared state, request instrumentation,
//! and the operational HTTP endpoints into one axum application. It is
//! intended to be consumed by the binary (`main.rs`) and by integration
//! tests.

pub mod app_state;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
