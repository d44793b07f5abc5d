//! Scanner assignment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the scanner_assignments table
#[derive(Debug, Clone, Copy, FromRow)]
pub struct AssignmentModel {
    pub scanner_id: Uuid,
    pub event_id: Uuid,
    pub assigned_at: DateTime<Utc>,
}
