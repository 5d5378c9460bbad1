//! Process-wide chaos toggle.
//!
//! A single `{enabled, probability}` pair shared by all request handlers:
//! written by the chaos control endpoint, read by health checks. One mutex
//! serializes every access; the critical sections are O(1).

use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Clone, Copy, Default)]
struct Toggle {
    enabled: bool,
    probability: f64,
}

/// Shared degraded-mode state. Each write fully replaces the prior state;
/// no history is kept.
#[derive(Debug, Default)]
pub struct ChaosState {
    toggle: Mutex<Toggle>,
}

impl ChaosState {
    pub fn new() -> Self {
        Self::default()
    }

    // The toggle holds no invariant a panicking writer could break, so a
    // poisoned lock is recovered rather than propagated.
    fn lock(&self) -> MutexGuard<'_, Toggle> {
        self.toggle.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Enable degraded mode. Probability is clamped into `[0.0, 1.0]`.
    pub fn enable_degraded(&self, probability: f64) {
        let probability = probability.clamp(0.0, 1.0);
        {
            let mut t = self.lock();
            t.enabled = true;
            t.probability = probability;
        }
        tracing::info!(probability, "chaos degraded mode enabled");
    }

    /// Restore the healthy state.
    pub fn reset(&self) {
        {
            let mut t = self.lock();
            t.enabled = false;
            t.probability = 0.0;
        }
        tracing::info!("chaos mode reset");
    }

    pub fn is_enabled(&self) -> bool {
        self.lock().enabled
    }

    pub fn probability(&self) -> f64 {
        self.lock().probability
    }

    /// Draw a fresh uniform sample in `[0, 1)` and compare it against the
    /// stored probability. Always false while disabled. Intentionally
    /// non-deterministic: this simulates real-world intermittent failure.
    pub fn should_fail(&self) -> bool {
        let t = *self.lock();
        t.enabled && rand::random::<f64>() < t.probability
    }
}
