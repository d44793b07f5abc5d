//! Scanner database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the scanners table
///
/// The PIN hash is deliberately not part of this model; it is only ever
/// fetched through `ScannerRepository::get_pin_hash`.
#[derive(Debug, Clone, FromRow)]
pub struct ScannerModel {
    pub id: Uuid,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Scanner row joined with its assignment timestamp for one event
#[derive(Debug, Clone, FromRow)]
pub struct AssignedScannerModel {
    pub id: Uuid,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub assigned_at: DateTime<Utc>,
}
