//! Operational HTTP endpoints.
//!
//! - `GET /`                : service info
//! - `GET /health`          : liveness/readiness probe (503 when chaos triggers)
//! - `GET /metrics`         : Prometheus text format
//! - `POST /simulate-crash` : chaos control (immediate / degraded / reset)

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use respilot_core::{error::PilotError, uptime};

use crate::app_state::AppState;

/// Transport-boundary wrapper turning a typed fault into an HTTP response
/// with the conventional `{"detail": "<message>"}` envelope.
pub struct ApiError(PilotError);

impl From<PilotError> for ApiError {
    fn from(err: PilotError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(json!({ "detail": self.0.to_string() }))).into_response()
    }
}

/// Root endpoint with service information.
pub async fn root() -> Json<Value> {
    Json(json!({
        "application": "The Resilience Pilot",
        "version": "1.0.0",
        "endpoints": {
            "health": "/health",
            "metrics": "/metrics",
            "chaos": "/simulate-crash"
        }
    }))
}

/// Health check for liveness/readiness probes.
///
/// Reports uptime for monitoring dashboards; fails with 503 when the chaos
/// toggle draws a failure.
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let elapsed = state.uptime().elapsed();
    let secs = elapsed.as_secs_f64();
    state.metrics().set_uptime(secs);

    if state.chaos().should_fail() {
        return Err(PilotError::Degraded.into());
    }

    Ok(Json(json!({
        "status": "healthy",
        "uptime": (secs * 100.0).round() / 100.0,
        "uptime_formatted": uptime::format_uptime(elapsed),
        "chaos_mode": state.chaos().is_enabled(),
    })))
}

/// Prometheus scrape endpoint.
pub async fn metrics(State(state): State<AppState>) -> Response {
    state
        .metrics()
        .set_uptime(state.uptime().elapsed().as_secs_f64());

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        state.metrics().render(),
    )
        .into_response()
}

#[derive(Debug, Deserialize)]
pub struct CrashQuery {
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Failure probability for degraded mode, clamped into [0.0, 1.0].
    #[serde(default = "default_probability")]
    pub probability: f64,
}

fn default_mode() -> String {
    "immediate".into()
}

fn default_probability() -> f64 {
    1.0
}

/// Chaos control endpoint.
///
/// `immediate` crashes this request with a 500; `degraded` arms
/// probabilistic failures on `/health`; `reset` restores the healthy state.
pub async fn simulate_crash(
    State(state): State<AppState>,
    Query(q): Query<CrashQuery>,
) -> Result<Json<Value>, ApiError> {
    match q.mode.as_str() {
        "immediate" => Err(PilotError::ChaosCrash.into()),
        "degraded" => {
            state.chaos().enable_degraded(q.probability);
            let probability = state.chaos().probability();
            Ok(Json(json!({
                "status": "chaos_enabled",
                "mode": "degraded",
                "failure_probability": probability,
                "message": format!(
                    "Health endpoint will fail {}% of the time",
                    probability * 100.0
                ),
            })))
        }
        "reset" => {
            state.chaos().reset();
            Ok(Json(json!({
                "status": "chaos_disabled",
                "message": "Service restored to healthy state",
            })))
        }
        other => Err(PilotError::UnknownMode(other.to_string()).into()),
    }
}
