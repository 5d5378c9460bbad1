//! The Resilience Pilot
//!
//! A lightweight HTTP service for SRE demonstrations:
//! - Health checks for liveness/readiness probes (uptime tracking)
//! - Prometheus RED metrics for observability
//! - Chaos injection endpoint for testing self-healing

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use respilot_server::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_or_default("respilot.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .server
        .listen
        .parse()
        .expect("server.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "respilot starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
