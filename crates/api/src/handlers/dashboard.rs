//! Handlers for the dashboard.

use axum::extract::State;
use axum::Json;
use enroll_core::stats::StatsSnapshot;
use enroll_db::repositories::StatsRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
///
/// Any failing query aborts the whole computation; no partial snapshot is
/// returned.
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DataResponse<StatsSnapshot>>> {
    let snapshot = StatsRepo::compute(&state.pool)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to compute dashboard stats: {e}")))?;
    Ok(Json(DataResponse { data: snapshot }))
}
