use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use enroll_core::uptime::format_uptime;
use serde::Serialize;

use crate::state::AppState;

/// Liveness response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    pub uptime_seconds: u64,
    /// Uptime as `"2d 3h 4m 5s"`.
    pub uptime: String,
}

/// Readiness response payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessResponse {
    pub status: &'static str,
    /// Whether the database is reachable.
    pub db_healthy: bool,
}

/// GET /health -- process liveness and uptime. Never touches the database.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let uptime_seconds = state.started_at.elapsed().as_secs();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds,
        uptime: format_uptime(uptime_seconds),
    })
}

/// GET /health/ready -- 200 when the database answers, 503 otherwise.
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    match enroll_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ReadinessResponse {
                status: "ok",
                db_healthy: true,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "degraded",
                    db_healthy: false,
                }),
            )
        }
    }
}

/// Mount health check routes (root level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness))
}
