//! Invite (redemption record) database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the invites table
#[derive(Debug, Clone, FromRow)]
pub struct InviteModel {
    pub id: Uuid,
    pub code: String,
    pub event_id: Uuid,
    pub scanner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Per-hour redemption count row
#[derive(Debug, Clone, Copy, FromRow)]
pub struct HourlyCountRow {
    pub hour: DateTime<Utc>,
    pub count: i64,
}
