//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{auth, code_spaces, events, health, redemptions, scanners};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(event_routes())
        .merge(scanner_routes())
        .merge(code_space_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        // Event CRUD
        .route("/events", get(events::list_events))
        .route("/events", post(events::create_event))
        .route("/events/:slug", get(events::get_event))
        .route("/events/:slug", patch(events::update_event))
        .route("/events/:slug", delete(events::delete_event))
        // Event statistics
        .route("/events/:slug/stats", get(events::event_stats))
        // Assigned scanners
        .route("/events/:slug/scanners", get(events::event_scanners))
        // Redemption (the scan endpoint)
        .route("/events/:slug/redemptions", post(redemptions::redeem_code))
}

/// Scanner routes
fn scanner_routes() -> Router<AppState> {
    Router::new()
        // Scanner CRUD
        .route("/scanners", get(scanners::list_scanners))
        .route("/scanners", post(scanners::create_scanner))
        .route("/scanners/:scanner_id", get(scanners::get_scanner))
        .route("/scanners/:scanner_id", patch(scanners::update_scanner))
        .route("/scanners/:scanner_id", delete(scanners::delete_scanner))
        // Event assignments
        .route(
            "/scanners/:scanner_id/assignments",
            post(scanners::assign_scanner),
        )
        .route(
            "/scanners/:scanner_id/assignments",
            delete(scanners::unassign_scanner),
        )
}

/// Code-space routes
fn code_space_routes() -> Router<AppState> {
    Router::new()
        .route("/code-spaces/generate", post(code_spaces::generate_code_space))
        .route("/code-spaces/validate", post(code_spaces::validate_pattern))
}
