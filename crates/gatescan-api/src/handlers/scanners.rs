//! Scanner handlers
//!
//! Endpoints for scanner administration and event assignment.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use gatescan_service::{
    AssignScannerRequest, CreateScannerRequest, CreatedScannerResponse, EventSummaryResponse,
    ScannerResponse, ScannerService, UpdateScannerRequest,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for deleting a scanner
#[derive(Debug, Default, Deserialize)]
pub struct DeleteScannerQuery {
    #[serde(default)]
    pub permanent: bool,
}

fn parse_scanner_id(id: &str) -> Result<Uuid, ApiError> {
    id.parse()
        .map_err(|_| ApiError::invalid_path("Invalid scanner_id format"))
}

/// List all scanners
///
/// GET /scanners
pub async fn list_scanners(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ScannerResponse>>> {
    let service = ScannerService::new(state.service_context());
    let scanners = service.list_scanners().await?;
    Ok(Json(scanners))
}

/// Create scanner
///
/// POST /scanners
pub async fn create_scanner(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateScannerRequest>,
) -> ApiResult<Created<Json<CreatedScannerResponse>>> {
    let service = ScannerService::new(state.service_context());
    let response = service.create_scanner(request).await?;
    Ok(Created(Json(response)))
}

/// Get scanner by ID
///
/// GET /scanners/{scanner_id}
pub async fn get_scanner(
    State(state): State<AppState>,
    Path(scanner_id): Path<String>,
) -> ApiResult<Json<ScannerResponse>> {
    let scanner_id = parse_scanner_id(&scanner_id)?;

    let service = ScannerService::new(state.service_context());
    let response = service.get_scanner(scanner_id).await?;
    Ok(Json(response))
}

/// Update scanner
///
/// PATCH /scanners/{scanner_id}
pub async fn update_scanner(
    State(state): State<AppState>,
    Path(scanner_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateScannerRequest>,
) -> ApiResult<Json<ScannerResponse>> {
    let scanner_id = parse_scanner_id(&scanner_id)?;

    let service = ScannerService::new(state.service_context());
    let response = service.update_scanner(scanner_id, request).await?;
    Ok(Json(response))
}

/// Delete scanner (soft delete by default, hard delete with ?permanent=true)
///
/// DELETE /scanners/{scanner_id}
pub async fn delete_scanner(
    State(state): State<AppState>,
    Path(scanner_id): Path<String>,
    Query(query): Query<DeleteScannerQuery>,
) -> ApiResult<NoContent> {
    let scanner_id = parse_scanner_id(&scanner_id)?;

    let service = ScannerService::new(state.service_context());
    service.delete_scanner(scanner_id, query.permanent).await?;
    Ok(NoContent)
}

/// Assign a scanner to events
///
/// POST /scanners/{scanner_id}/assignments
pub async fn assign_scanner(
    State(state): State<AppState>,
    Path(scanner_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AssignScannerRequest>,
) -> ApiResult<Json<Vec<EventSummaryResponse>>> {
    let scanner_id = parse_scanner_id(&scanner_id)?;

    let service = ScannerService::new(state.service_context());
    let response = service.assign_to_events(scanner_id, request).await?;
    Ok(Json(response))
}

/// Unassign a scanner from events
///
/// DELETE /scanners/{scanner_id}/assignments
pub async fn unassign_scanner(
    State(state): State<AppState>,
    Path(scanner_id): Path<String>,
    ValidatedJson(request): ValidatedJson<AssignScannerRequest>,
) -> ApiResult<NoContent> {
    let scanner_id = parse_scanner_id(&scanner_id)?;

    let service = ScannerService::new(state.service_context());
    service.unassign_from_events(scanner_id, request).await?;
    Ok(NoContent)
}
