//! Shared application state for the Resilience Pilot server.
//!
//! The metrics registry, chaos toggle, and uptime tracker are owned here
//! and injected into handlers through axum's `State` extractor, so tests
//! can construct fresh instances instead of relying on process globals.

use std::sync::Arc;

use respilot_core::{ChaosState, UptimeTracker};

use crate::config::PilotConfig;
use crate::obs::metrics::ServiceMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: PilotConfig,
    metrics: ServiceMetrics,
    chaos: ChaosState,
    uptime: UptimeTracker,
}

impl AppState {
    pub fn new(cfg: PilotConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                metrics: ServiceMetrics::new(),
                chaos: ChaosState::new(),
                uptime: UptimeTracker::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &PilotConfig {
        &self.inner.cfg
    }

    pub fn metrics(&self) -> &ServiceMetrics {
        &self.inner.metrics
    }

    pub fn chaos(&self) -> &ChaosState {
        &self.inner.chaos
    }

    pub fn uptime(&self) -> &UptimeTracker {
        &self.inner.uptime
    }
}
