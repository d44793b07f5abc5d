//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; the ones taking free-form user
//! input also implement `Validate`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Scanner login request
///
/// A scanner logs in against one event with its phone number or email plus
/// its PIN.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScannerLoginRequest {
    pub phone_number: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 4, max = 8, message = "PIN must be 4-8 digits"))]
    pub pin: String,

    #[validate(length(min = 1, max = 100, message = "Event slug is required"))]
    pub event_slug: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Redemption Requests
// ============================================================================

/// Code redemption request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RedeemCodeRequest {
    #[validate(length(min = 1, max = 64, message = "Code must be 1-64 characters"))]
    pub code: String,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
///
/// Patterns can be given explicitly or derived from the expected participant
/// counts (codes start at 1000).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 100, message = "Event name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 100, message = "Slug must be 1-100 characters"))]
    pub slug: String,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 16, message = "Code prefix must be 1-16 characters"))]
    pub code_prefix: String,

    pub attendant_code_pattern: Option<String>,

    pub driver_code_pattern: Option<String>,

    /// Auto-generate the attendant pattern for this many participants
    pub expected_attendants: Option<u32>,

    /// Auto-generate the driver pattern for this many participants
    pub expected_drivers: Option<u32>,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,
}

/// Update event request (the slug is immutable)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 100, message = "Event name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,

    #[validate(length(min = 1, max = 16, message = "Code prefix must be 1-16 characters"))]
    pub code_prefix: Option<String>,

    pub attendant_code_pattern: Option<String>,

    pub driver_code_pattern: Option<String>,

    pub is_active: Option<bool>,

    pub start_date: Option<DateTime<Utc>>,

    pub end_date: Option<DateTime<Utc>>,
}

// ============================================================================
// Scanner Requests
// ============================================================================

/// Create scanner request
///
/// When no PIN is supplied one is generated and returned exactly once in
/// the response.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateScannerRequest {
    #[validate(length(min = 1, max = 100, message = "Scanner name must be 1-100 characters"))]
    pub name: String,

    pub phone_number: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    pub pin: Option<String>,

    /// Events to assign the scanner to on creation
    #[serde(default)]
    pub event_slugs: Vec<String>,
}

/// Update scanner request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateScannerRequest {
    #[validate(length(min = 1, max = 100, message = "Scanner name must be 1-100 characters"))]
    pub name: Option<String>,

    pub phone_number: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// New PIN (re-hashed on update)
    pub pin: Option<String>,

    pub is_active: Option<bool>,
}

/// Assign or unassign a scanner to/from events
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssignScannerRequest {
    #[validate(length(min = 1, message = "At least one event slug is required"))]
    pub event_slugs: Vec<String>,
}

// ============================================================================
// Code-Space Requests
// ============================================================================

/// Generate a code-space pattern from a prefix and participant count
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateCodeSpaceRequest {
    #[validate(length(min = 1, max = 16, message = "Code prefix must be 1-16 characters"))]
    pub prefix: String,

    #[validate(range(min = 1, message = "Count must be at least 1"))]
    pub count: u32,
}

/// Validate a candidate pattern string
#[derive(Debug, Clone, Deserialize)]
pub struct ValidatePatternRequest {
    pub pattern: String,
}
