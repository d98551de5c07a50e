//! Liveness endpoint for load balancers and uptime checks.
//!
//! Always answers 200. An unreachable store is reported in the body as
//! `"degraded"`.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::handlers;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: &'static str,
    pub version: &'static str,
    /// Whether the reservation store answered its ping.
    pub db_healthy: bool,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Reservation store ping failed");
            false
        }
    };

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// `GET /health`, mounted beside `/api/v1` rather than under it.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/health",
        get(health_check).fallback(handlers::method_not_allowed),
    )
}
