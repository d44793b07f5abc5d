//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. UUIDs are
//! serialized as strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Scanner login response with session tokens
#[derive(Debug, Serialize)]
pub struct ScannerAuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub scanner: ScannerResponse,
    pub event: EventSummaryResponse,
}

/// Token refresh response
#[derive(Debug, Serialize)]
pub struct TokenRefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

// ============================================================================
// Redemption Responses
// ============================================================================

/// Acceptance receipt for a successful redemption
#[derive(Debug, Clone, Serialize)]
pub struct RedemptionResponse {
    pub message: String,
    pub event_name: String,
    pub total_scanned: i64,
}

impl RedemptionResponse {
    pub fn accepted(event_name: impl Into<String>, total_scanned: i64) -> Self {
        Self {
            message: "Welcome to the Event".to_string(),
            event_name: event_name.into(),
            total_scanned,
        }
    }
}

// ============================================================================
// Event Responses
// ============================================================================

/// Minimal event identity (for login responses and assignment listings)
#[derive(Debug, Clone, Serialize)]
pub struct EventSummaryResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Full event response with its redemption count
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub code_prefix: String,
    pub attendant_code_pattern: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_code_pattern: Option<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    pub total_scanned: i64,
    pub created_at: DateTime<Utc>,
}

/// A recent redemption entry
#[derive(Debug, Clone, Serialize)]
pub struct RecentScanResponse {
    pub code: String,
    pub created_at: DateTime<Utc>,
}

/// Per-hour redemption count
#[derive(Debug, Clone, Serialize)]
pub struct HourlyCountResponse {
    pub hour: DateTime<Utc>,
    pub count: i64,
}

/// Event statistics response
#[derive(Debug, Serialize)]
pub struct EventStatsResponse {
    pub total_scanned: i64,
    pub recent_scans: Vec<RecentScanResponse>,
    pub scans_by_hour: Vec<HourlyCountResponse>,
}

// ============================================================================
// Scanner Responses
// ============================================================================

/// Scanner response
#[derive(Debug, Clone, Serialize)]
pub struct ScannerResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Scanner creation response
///
/// `pin` is only present when the PIN was generated server-side; it is
/// never returned again.
#[derive(Debug, Serialize)]
pub struct CreatedScannerResponse {
    #[serde(flatten)]
    pub scanner: ScannerResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
}

/// Scanner with its assignment timestamp for one event
#[derive(Debug, Clone, Serialize)]
pub struct AssignedScannerResponse {
    #[serde(flatten)]
    pub scanner: ScannerResponse,
    pub assigned_at: DateTime<Utc>,
}

// ============================================================================
// Code-Space Responses
// ============================================================================

/// Generated code-space pattern with its literal bounds
#[derive(Debug, Clone, Serialize)]
pub struct CodeSpaceResponse {
    pub pattern: String,
    pub first_code: String,
    pub last_code: String,
}

/// Pattern validation confirmation
#[derive(Debug, Clone, Serialize)]
pub struct PatternValidResponse {
    pub pattern: String,
    pub valid: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
