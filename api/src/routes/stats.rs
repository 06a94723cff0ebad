//! Aggregate statistics endpoint.
//!
//! Stats are recomputed from the live store on every call and never pass
//! through the snapshot cache.

use crate::routes::ErrorBody;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use shared::models::DashboardStats;

/// Creates the stats routes.
pub fn stats_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/stats", get(get_stats))
        .with_state(state)
}

async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<DashboardStats>, (StatusCode, Json<ErrorBody>)> {
    let records = state.store().list().map_err(|error| {
        tracing::error!(%error, "Store operation failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(error.to_string())),
        )
    })?;

    Ok(Json(DashboardStats::from_records(&records)))
}
