//! Code-space handlers
//!
//! Endpoints for generating a code-space pattern from a participant count
//! and validating a candidate pattern before it is stored.

use axum::{extract::State, Json};

use gatescan_service::{
    CodeSpaceResponse, CodeSpaceService, GenerateCodeSpaceRequest, PatternValidResponse,
    ValidatePatternRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

/// Generate a code-space pattern
///
/// POST /code-spaces/generate
pub async fn generate_code_space(
    State(_state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GenerateCodeSpaceRequest>,
) -> ApiResult<Json<CodeSpaceResponse>> {
    let service = CodeSpaceService::new();
    let response = service.generate(&request)?;
    Ok(Json(response))
}

/// Validate a candidate pattern
///
/// POST /code-spaces/validate
pub async fn validate_pattern(
    State(_state): State<AppState>,
    Json(request): Json<ValidatePatternRequest>,
) -> ApiResult<Json<PatternValidResponse>> {
    let service = CodeSpaceService::new();
    let response = service.validate(&request.pattern)?;
    Ok(Json(response))
}
