//! Event handlers
//!
//! Endpoints for event configuration and statistics.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use gatescan_service::{
    AssignedScannerResponse, CreateEventRequest, EventResponse, EventService,
    EventStatsResponse, ScannerService, UpdateEventRequest,
};

use crate::extractors::{OptionalValidatedJson, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for listing events
#[derive(Debug, Default, Deserialize)]
pub struct ListEventsQuery {
    #[serde(default)]
    pub active_only: bool,
}

/// Query parameters for deleting an event
#[derive(Debug, Default, Deserialize)]
pub struct DeleteEventQuery {
    #[serde(default)]
    pub permanent: bool,
}

/// List events
///
/// GET /events?active_only=true
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListEventsQuery>,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let events = service.list_events(query.active_only).await?;
    Ok(Json(events))
}

/// Create event
///
/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Created<Json<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let response = service.create_event(request).await?;
    Ok(Created(Json(response)))
}

/// Get event by slug
///
/// GET /events/{slug}
pub async fn get_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let response = service.get_event(&slug).await?;
    Ok(Json(response))
}

/// Update event
///
/// PATCH /events/{slug}
pub async fn update_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    OptionalValidatedJson(request): OptionalValidatedJson<UpdateEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let response = service
        .update_event(&slug, request.unwrap_or_default())
        .await?;
    Ok(Json(response))
}

/// Delete event (soft delete by default, hard delete with ?permanent=true)
///
/// DELETE /events/{slug}
pub async fn delete_event(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<DeleteEventQuery>,
) -> ApiResult<NoContent> {
    let service = EventService::new(state.service_context());
    service.delete_event(&slug, query.permanent).await?;
    Ok(NoContent)
}

/// Get event statistics
///
/// GET /events/{slug}/stats
pub async fn event_stats(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<EventStatsResponse>> {
    let service = EventService::new(state.service_context());
    let response = service.event_stats(&slug).await?;
    Ok(Json(response))
}

/// List the scanners assigned to an event
///
/// GET /events/{slug}/scanners
pub async fn event_scanners(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<Vec<AssignedScannerResponse>>> {
    let service = ScannerService::new(state.service_context());
    let response = service.list_scanners_for_event(&slug).await?;
    Ok(Json(response))
}
