//! Scanner assignment - the authorization link between a scanner and an event

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Assignment granting a scanner permission to redeem codes for an event.
///
/// The (scanner_id, event_id) pair is unique; assigning twice is an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScannerAssignment {
    pub scanner_id: Uuid,
    pub event_id: Uuid,
    pub assigned_at: DateTime<Utc>,
}

impl ScannerAssignment {
    /// Create a new assignment
    pub fn new(scanner_id: Uuid, event_id: Uuid) -> Self {
        Self {
            scanner_id,
            event_id,
            assigned_at: Utc::now(),
        }
    }
}
