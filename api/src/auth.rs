//! Credential check, token issuance, and verification middleware.
//!
//! The demo validates a single fixed username/password pair and issues an
//! HS256 bearer token carrying the username and a role claim with a 24 hour
//! expiry. Only the create-stream route sits behind the middleware.

use crate::routes::ErrorBody;
use crate::state::AppState;
use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only username the demo accepts.
pub const DEMO_USERNAME: &str = "admin";

/// The only password the demo accepts. No hashing, no credential store.
pub const DEMO_PASSWORD: &str = "admin123";

/// Role claim carried by issued tokens.
pub const DEMO_ROLE: &str = "admin";

/// Fixed token lifetime: 24 hours.
const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// Errors that can occur while issuing or verifying tokens.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Signing the token failed.
    #[error("Failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// The presented token is malformed, mis-signed, or expired.
    #[error("Invalid or expired token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

/// Claims carried by a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Authenticated username.
    pub username: String,
    /// Role granted at login.
    pub role: String,
    /// Expiry as a unix timestamp, validated on decode.
    pub exp: u64,
}

/// HS256 key pair derived from the configured secret.
pub struct AuthKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl AuthKeys {
    /// Derives the signing and verification keys from a shared secret.
    #[must_use]
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a signed bearer token for the given identity.
    ///
    /// # Errors
    ///
    /// Returns an error if signing fails.
    pub fn issue(&self, username: &str, role: &str) -> Result<String, AuthError> {
        let claims = Claims {
            username: username.to_string(),
            role: role.to_string(),
            exp: jsonwebtoken::get_current_timestamp() + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(AuthError::Signing)
    }

    /// Verifies a bearer token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is malformed, mis-signed, or expired.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(AuthError::InvalidToken)
    }
}

/// Middleware guarding routes that require a valid bearer token.
///
/// A missing or blank token yields 401; a present but invalid or expired
/// token yields 403. On success the decoded [`Claims`] are attached to the
/// request extensions for the handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty());

    let Some(token) = token else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ErrorBody::new("Token missing")),
        )
            .into_response();
    };

    match state.auth_keys().verify(token) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(error) => {
            tracing::debug!(%error, "Rejected bearer token");
            (StatusCode::FORBIDDEN, Json(ErrorBody::new("Invalid token"))).into_response()
        }
    }
}
