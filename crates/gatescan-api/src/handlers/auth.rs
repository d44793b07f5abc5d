//! Authentication handlers
//!
//! Endpoints for scanner login and session token refresh.

use axum::{extract::State, Json};
use gatescan_service::{
    AuthService, RefreshTokenRequest, ScannerAuthResponse, ScannerLoginRequest,
    TokenRefreshResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Scanner login against an event
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ScannerLoginRequest>,
) -> ApiResult<Json<ScannerAuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Refresh session tokens
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<TokenRefreshResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_tokens(request).await?;
    Ok(Json(response))
}
