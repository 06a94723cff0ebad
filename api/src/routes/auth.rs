//! Login endpoint.
//!
//! Validates the fixed demo credential pair and issues a bearer token.
//! There is no credential store and no password hashing; this is a demo
//! artifact, not a security contract.

use crate::auth::{DEMO_PASSWORD, DEMO_ROLE, DEMO_USERNAME};
use crate::routes::ErrorBody;
use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Username to authenticate.
    pub username: String,
    /// Plain-text password.
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed bearer token, valid for 24 hours.
    pub token: String,
    /// Echo of the authenticated username.
    pub username: String,
}

/// Creates the auth routes.
pub fn auth_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(login))
        .with_state(state)
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorBody>)> {
    if request.username != DEMO_USERNAME || request.password != DEMO_PASSWORD {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody::new("Invalid credentials")),
        ));
    }

    let token = state
        .auth_keys()
        .issue(&request.username, DEMO_ROLE)
        .map_err(|error| {
            tracing::error!(%error, "Token issuance failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody::new(error.to_string())),
            )
        })?;

    tracing::info!(username = %request.username, "Login succeeded");
    Ok(Json(LoginResponse {
        token,
        username: request.username,
    }))
}
