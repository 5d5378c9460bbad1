//! Lightweight in-process observability (dependency-free).
//!
//! Metrics are stored as atomics and rendered by the `/metrics` handler;
//! [`track_requests`] is the instrumentation layer wrapped around every
//! route.

pub mod metrics;

use std::time::Instant;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::app_state::AppState;

/// Middleware instrumenting all requests.
///
/// Runs exactly once per request: the handler's typed faults are already
/// translated into responses by the time `next` returns, so the final
/// status is recorded here on every exit path without per-handler
/// recording logic.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let endpoint = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let elapsed = start.elapsed();
    let status = response.status().as_u16();
    state.metrics().record_request(&method, &endpoint, status);
    state.metrics().observe_latency(&method, &endpoint, elapsed);

    response
}
