//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}{n}", uuid::Uuid::new_v4().simple())
}

// ============================================================================
// Event Fixtures
// ============================================================================

/// Create event request
#[derive(Debug, Serialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub slug: String,
    pub code_prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendant_code_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver_code_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_attendants: Option<u32>,
}

impl CreateEventRequest {
    /// An event accepting codes FS25-1000 through FS25-1999
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Food Summit {suffix}"),
            slug: format!("food-summit-{suffix}"),
            code_prefix: "FS25".to_string(),
            attendant_code_pattern: Some("^FS25-(1[0-9]{3})$".to_string()),
            driver_code_pattern: None,
            expected_attendants: None,
        }
    }

    /// An event with patterns derived from a participant count
    pub fn unique_with_count(count: u32) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Derived Event {suffix}"),
            slug: format!("derived-event-{suffix}"),
            code_prefix: "FS25".to_string(),
            attendant_code_pattern: None,
            driver_code_pattern: None,
            expected_attendants: Some(count),
        }
    }
}

/// Event response
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub name: String,
    pub slug: String,
    pub code_prefix: String,
    pub attendant_code_pattern: String,
    pub is_active: bool,
    pub total_scanned: i64,
}

/// Event statistics response
#[derive(Debug, Deserialize)]
pub struct EventStatsResponse {
    pub total_scanned: i64,
    pub recent_scans: Vec<RecentScan>,
    pub scans_by_hour: Vec<HourlyCount>,
}

/// A recent redemption entry
#[derive(Debug, Deserialize)]
pub struct RecentScan {
    pub code: String,
    pub created_at: String,
}

/// Per-hour redemption count
#[derive(Debug, Deserialize)]
pub struct HourlyCount {
    pub hour: String,
    pub count: i64,
}

// ============================================================================
// Scanner Fixtures
// ============================================================================

/// Create scanner request
#[derive(Debug, Serialize)]
pub struct CreateScannerRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<String>,
    pub event_slugs: Vec<String>,
}

impl CreateScannerRequest {
    /// A scanner with a fixed PIN, assigned to the given events
    pub fn unique(event_slugs: Vec<String>) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Gate {suffix}"),
            phone_number: Some(format!("+1555{suffix}")),
            email: None,
            pin: Some("123456".to_string()),
            event_slugs,
        }
    }
}

/// Scanner creation response (PIN present only when generated)
#[derive(Debug, Deserialize)]
pub struct CreatedScannerResponse {
    pub id: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub is_active: bool,
    pub pin: Option<String>,
}

// ============================================================================
// Auth Fixtures
// ============================================================================

/// Scanner login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub pin: String,
    pub event_slug: String,
}

impl LoginRequest {
    pub fn from_scanner(request: &CreateScannerRequest, event_slug: &str) -> Self {
        Self {
            phone_number: request.phone_number.clone(),
            email: request.email.clone(),
            pin: request.pin.clone().expect("fixture scanner has a PIN"),
            event_slug: event_slug.to_string(),
        }
    }
}

/// Scanner login response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub scanner: ScannerInfo,
    pub event: EventInfo,
}

/// Scanner identity in the login response
#[derive(Debug, Deserialize)]
pub struct ScannerInfo {
    pub id: String,
    pub name: String,
}

/// Event identity in the login response
#[derive(Debug, Deserialize)]
pub struct EventInfo {
    pub id: String,
    pub name: String,
    pub slug: String,
}

// ============================================================================
// Redemption Fixtures
// ============================================================================

/// Code redemption request
#[derive(Debug, Serialize)]
pub struct RedeemRequest {
    pub code: String,
}

/// Acceptance receipt
#[derive(Debug, Deserialize)]
pub struct RedemptionResponse {
    pub message: String,
    pub event_name: String,
    pub total_scanned: i64,
}

// ============================================================================
// Code-Space Fixtures
// ============================================================================

/// Code-space generation request
#[derive(Debug, Serialize)]
pub struct GenerateCodeSpaceRequest {
    pub prefix: String,
    pub count: u32,
}

/// Code-space generation response
#[derive(Debug, Deserialize)]
pub struct CodeSpaceResponse {
    pub pattern: String,
    pub first_code: String,
    pub last_code: String,
}

// ============================================================================
// Error Fixtures
// ============================================================================

/// Error body returned by the API
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}
