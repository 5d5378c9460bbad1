//! Top-level facade crate for the Resilience Pilot.
//!
//! Re-exports the core primitives and the server library so users can depend
//! on a single crate.

pub mod core {
    pub use respilot_core::*;
}

pub mod server {
    pub use respilot_server::*;
}
