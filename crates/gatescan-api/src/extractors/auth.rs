//! Authentication extractor
//!
//! Extracts and validates scanner session tokens from the Authorization
//! header. The token only establishes identity; per-event authorization is
//! re-checked by the services on every call.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use uuid::Uuid;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated scanner extracted from the session token
#[derive(Debug, Clone)]
pub struct AuthScanner {
    /// Scanner ID from the JWT token
    pub scanner_id: Uuid,
}

impl AuthScanner {
    /// Create a new AuthScanner
    pub fn new(scanner_id: Uuid) -> Self {
        Self { scanner_id }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthScanner
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access the JWT service
        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract the scanner ID from the claims
        let scanner_id = claims.scanner_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid scanner ID in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthScanner::new(scanner_id))
    }
}
