//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use chrono::{DateTime, Utc};
use gatescan_core::entities::{Event, Invite, Scanner};
use gatescan_core::traits::HourlyCount;

use super::responses::{
    AssignedScannerResponse, EventResponse, EventSummaryResponse, HourlyCountResponse,
    RecentScanResponse, ScannerResponse,
};

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&Event> for EventSummaryResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            name: event.name.clone(),
            slug: event.slug.clone(),
        }
    }
}

impl From<Event> for EventSummaryResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

/// Event paired with its redemption count
#[derive(Debug, Clone)]
pub struct EventWithCount {
    pub event: Event,
    pub total_scanned: i64,
}

impl From<EventWithCount> for EventResponse {
    fn from(value: EventWithCount) -> Self {
        let EventWithCount {
            event,
            total_scanned,
        } = value;
        Self {
            id: event.id.to_string(),
            name: event.name,
            slug: event.slug,
            description: event.description,
            code_prefix: event.code_prefix,
            attendant_code_pattern: event.attendant_code_pattern,
            driver_code_pattern: event.driver_code_pattern,
            is_active: event.is_active,
            start_date: event.start_date,
            end_date: event.end_date,
            total_scanned,
            created_at: event.created_at,
        }
    }
}

// ============================================================================
// Scanner Mappers
// ============================================================================

impl From<&Scanner> for ScannerResponse {
    fn from(scanner: &Scanner) -> Self {
        Self {
            id: scanner.id.to_string(),
            name: scanner.name.clone(),
            phone_number: scanner.phone_number.clone(),
            email: scanner.email.clone(),
            is_active: scanner.is_active,
            created_at: scanner.created_at,
        }
    }
}

impl From<Scanner> for ScannerResponse {
    fn from(scanner: Scanner) -> Self {
        Self::from(&scanner)
    }
}

impl From<(Scanner, DateTime<Utc>)> for AssignedScannerResponse {
    fn from((scanner, assigned_at): (Scanner, DateTime<Utc>)) -> Self {
        Self {
            scanner: ScannerResponse::from(scanner),
            assigned_at,
        }
    }
}

// ============================================================================
// Redemption Mappers
// ============================================================================

impl From<&Invite> for RecentScanResponse {
    fn from(invite: &Invite) -> Self {
        Self {
            code: invite.code.clone(),
            created_at: invite.created_at,
        }
    }
}

impl From<Invite> for RecentScanResponse {
    fn from(invite: Invite) -> Self {
        Self::from(&invite)
    }
}

impl From<HourlyCount> for HourlyCountResponse {
    fn from(bucket: HourlyCount) -> Self {
        Self {
            hour: bucket.hour,
            count: bucket.count,
        }
    }
}
