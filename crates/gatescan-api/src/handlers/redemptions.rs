//! Redemption handlers
//!
//! The scan endpoint: a presented code either becomes a permanent
//! redemption record or is rejected with a typed error.

use axum::{
    extract::{Path, State},
    Json,
};
use gatescan_service::{RedeemCodeRequest, RedemptionResponse, RedemptionService};

use crate::extractors::{AuthScanner, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Redeem a code for an event
///
/// POST /events/{slug}/redemptions
pub async fn redeem_code(
    State(state): State<AppState>,
    auth: AuthScanner,
    Path(slug): Path<String>,
    ValidatedJson(request): ValidatedJson<RedeemCodeRequest>,
) -> ApiResult<Created<Json<RedemptionResponse>>> {
    let service = RedemptionService::new(state.service_context());
    let response = service
        .attempt_redemption(&request.code, &slug, auth.scanner_id)
        .await?;
    Ok(Created(Json(response)))
}
