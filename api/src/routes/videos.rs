//! Stream listing, lookup, and creation endpoints.
//!
//! The list-all read sits behind the snapshot cache: a fresh entry is served
//! verbatim, a miss pays the simulated database latency before reading the
//! store and refilling the cache. Creation requires a bearer token, eagerly
//! invalidates the cache, and pushes a `NEW_STREAM` message.

use crate::auth::{self, Claims};
use crate::routes::ErrorBody;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use serde::Deserialize;
use shared::models::{PushMessage, StreamRecord};

/// Request body for creating a stream.
///
/// No field validation is performed; malformed input is stored as-is.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStreamRequest {
    /// Title of the new stream.
    pub title: String,
    /// Ingest key for the new stream.
    pub stream_key: String,
}

/// Creates the video routes. Only stream creation requires a token.
pub fn video_routes(state: AppState) -> Router {
    let create = post(create_video).layer(middleware::from_fn_with_state(
        state.clone(),
        auth::require_auth,
    ));

    Router::new()
        .route("/api/videos", get(list_videos).merge(create))
        .route("/api/videos/{id}", get(get_video))
        .with_state(state)
}

fn internal_error(error: impl std::fmt::Display) -> (StatusCode, Json<ErrorBody>) {
    tracing::error!(%error, "Store operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(error.to_string())),
    )
}

fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody::new("Video not found")),
    )
}

async fn list_videos(
    State(state): State<AppState>,
) -> Result<Json<Vec<StreamRecord>>, (StatusCode, Json<ErrorBody>)> {
    if let Some(snapshot) = state.cache().get().map_err(internal_error)? {
        tracing::debug!("Serving stream list from cache");
        return Ok(Json(snapshot));
    }

    // Simulated database latency, as in the original demo
    tokio::time::sleep(state.list_delay()).await;

    let snapshot = state.store().list().map_err(internal_error)?;
    state
        .cache()
        .set(snapshot.clone())
        .map_err(internal_error)?;

    Ok(Json(snapshot))
}

async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StreamRecord>, (StatusCode, Json<ErrorBody>)> {
    // A non-numeric id is indistinguishable from an unknown one
    let Ok(id) = id.parse::<u64>() else {
        return Err(not_found());
    };

    state
        .store()
        .get(id)
        .map_err(internal_error)?
        .map(Json)
        .ok_or_else(not_found)
}

async fn create_video(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateStreamRequest>,
) -> Result<(StatusCode, Json<StreamRecord>), (StatusCode, Json<ErrorBody>)> {
    let record = state
        .store()
        .create(&request.title, &request.stream_key)
        .map_err(internal_error)?;

    state.cache().invalidate().map_err(internal_error)?;

    state.broadcaster().send(PushMessage::NewStream {
        video: record.clone(),
    });

    tracing::info!(id = record.id, created_by = %claims.username, "New stream created");
    Ok((StatusCode::CREATED, Json(record)))
}
