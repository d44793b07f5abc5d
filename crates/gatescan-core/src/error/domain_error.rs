//! Domain errors - error types for the domain layer

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Scanner not found: {0}")]
    ScannerNotFound(Uuid),

    #[error("Assignment not found")]
    AssignmentNotFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid code pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid invite code format")]
    InvalidCodeFormat,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Event is not active: {0}")]
    EventInactive(String),

    #[error("Scanner is not assigned to this event")]
    NotAuthorizedForEvent,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Invite code already redeemed: {0}")]
    AlreadyRedeemed(String),

    #[error("Event slug already in use: {0}")]
    SlugExists(String),

    #[error("Phone number already in use")]
    PhoneNumberExists,

    #[error("Email already in use")]
    EmailExists,

    #[error("Event has {0} recorded redemptions")]
    EventHasRedemptions(i64),

    #[error("Scanner has {0} recorded redemptions")]
    ScannerHasRedemptions(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::EventNotFound(_) => "EVENT_NOT_FOUND",
            Self::ScannerNotFound(_) => "SCANNER_NOT_FOUND",
            Self::AssignmentNotFound => "ASSIGNMENT_NOT_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidPattern(_) => "INVALID_PATTERN",
            Self::InvalidCodeFormat => "INVALID_CODE_FORMAT",

            // Authorization
            Self::EventInactive(_) => "EVENT_INACTIVE",
            Self::NotAuthorizedForEvent => "NOT_AUTHORIZED_FOR_EVENT",

            // Conflict
            Self::AlreadyRedeemed(_) => "ALREADY_REDEEMED",
            Self::SlugExists(_) => "SLUG_EXISTS",
            Self::PhoneNumberExists => "PHONE_NUMBER_EXISTS",
            Self::EmailExists => "EMAIL_EXISTS",
            Self::EventHasRedemptions(_) => "EVENT_HAS_REDEMPTIONS",
            Self::ScannerHasRedemptions(_) => "SCANNER_HAS_REDEMPTIONS",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EventNotFound(_) | Self::ScannerNotFound(_) | Self::AssignmentNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidPattern(_) | Self::InvalidCodeFormat
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::EventInactive(_) | Self::NotAuthorizedForEvent)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyRedeemed(_)
                | Self::SlugExists(_)
                | Self::PhoneNumberExists
                | Self::EmailExists
                | Self::EventHasRedemptions(_)
                | Self::ScannerHasRedemptions(_)
        )
    }
}
