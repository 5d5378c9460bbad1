//! Shared error type across Resilience Pilot crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, PilotError>;

/// Unified fault type used by core and server.
///
/// The display string of each variant is the client-facing `detail` message;
/// the HTTP mapping lives in [`PilotError::status_code`] so the transport
/// layer stays a thin translation.
#[derive(Debug, Error)]
pub enum PilotError {
    /// Probabilistic chaos failure on the health surface.
    #[error("Service degraded (chaos mode active)")]
    Degraded,
    /// Unconditional crash requested through the chaos control endpoint.
    #[error("Chaos injected! This is an intentional crash for testing.")]
    ChaosCrash,
    /// Unrecognized chaos mode in the control request.
    #[error("Unknown mode: {0}. Use 'immediate', 'degraded', or 'reset'")]
    UnknownMode(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl PilotError {
    /// HTTP status this fault maps to at the transport boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            PilotError::Degraded => 503,
            PilotError::ChaosCrash => 500,
            PilotError::UnknownMode(_) => 400,
            PilotError::BadRequest(_) => 400,
            PilotError::Internal(_) => 500,
        }
    }
}
