//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{Event, Invite, Scanner, ScannerAssignment};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Event>>;

    /// Find event by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Event>>;

    /// Check if a slug is already taken
    async fn slug_exists(&self, slug: &str) -> RepoResult<bool>;

    /// List events, newest first, optionally restricted to active ones
    async fn list(&self, active_only: bool) -> RepoResult<Vec<Event>>;

    /// Create a new event
    async fn create(&self, event: &Event) -> RepoResult<()>;

    /// Update an existing event (the slug is immutable)
    async fn update(&self, event: &Event) -> RepoResult<()>;

    /// Flip the activation flag
    async fn set_active(&self, id: Uuid, active: bool) -> RepoResult<()>;

    /// Hard delete an event together with its assignment rows
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Scanner Repository
// ============================================================================

#[async_trait]
pub trait ScannerRepository: Send + Sync {
    /// Find scanner by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Scanner>>;

    /// Find scanner by phone number
    async fn find_by_phone(&self, phone_number: &str) -> RepoResult<Option<Scanner>>;

    /// Find scanner by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Scanner>>;

    /// Check if a phone number is already taken
    async fn phone_exists(&self, phone_number: &str) -> RepoResult<bool>;

    /// Check if an email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// List all scanners, newest first
    async fn list(&self) -> RepoResult<Vec<Scanner>>;

    /// List scanners assigned to an event, with the assignment timestamp
    async fn list_by_event(&self, event_id: Uuid) -> RepoResult<Vec<(Scanner, DateTime<Utc>)>>;

    /// Create a new scanner with its PIN hash
    async fn create(&self, scanner: &Scanner, pin_hash: &str) -> RepoResult<()>;

    /// Update an existing scanner
    async fn update(&self, scanner: &Scanner) -> RepoResult<()>;

    /// Get the PIN hash for authentication
    async fn get_pin_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Update the PIN hash
    async fn update_pin(&self, id: Uuid, pin_hash: &str) -> RepoResult<()>;

    /// Flip the activation flag
    async fn set_active(&self, id: Uuid, active: bool) -> RepoResult<()>;

    /// Hard delete a scanner together with its assignment rows
    async fn delete(&self, id: Uuid) -> RepoResult<()>;
}

// ============================================================================
// Assignment Repository
// ============================================================================

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Check whether an assignment links the scanner to the event
    async fn exists(&self, scanner_id: Uuid, event_id: Uuid) -> RepoResult<bool>;

    /// Create an assignment; assigning twice is a no-op
    async fn assign(&self, scanner_id: Uuid, event_id: Uuid) -> RepoResult<()>;

    /// Remove an assignment
    async fn unassign(&self, scanner_id: Uuid, event_id: Uuid) -> RepoResult<()>;

    /// List all assignments for a scanner
    async fn find_by_scanner(&self, scanner_id: Uuid) -> RepoResult<Vec<ScannerAssignment>>;
}

// ============================================================================
// Invite Repository (redemption ledger)
// ============================================================================

/// Per-hour redemption count bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourlyCount {
    pub hour: DateTime<Utc>,
    pub count: i64,
}

#[async_trait]
pub trait InviteRepository: Send + Sync {
    /// Atomically record a redemption for (code, event).
    ///
    /// Behaves as serialized relative to concurrent calls for the same
    /// pair: exactly one caller succeeds, every other observes
    /// `AlreadyRedeemed`. Returns the event's total redemption count as of
    /// after the insert.
    async fn redeem(&self, code: &str, event_id: Uuid, scanner_id: Uuid) -> RepoResult<i64>;

    /// Check whether a code has been redeemed for an event
    async fn exists(&self, code: &str, event_id: Uuid) -> RepoResult<bool>;

    /// Count redemptions for an event
    async fn count_by_event(&self, event_id: Uuid) -> RepoResult<i64>;

    /// Count redemptions recorded by a scanner
    async fn count_by_scanner(&self, scanner_id: Uuid) -> RepoResult<i64>;

    /// Most recent redemptions for an event
    async fn recent_by_event(&self, event_id: Uuid, limit: i64) -> RepoResult<Vec<Invite>>;

    /// Redemption counts bucketed by hour since the given instant
    async fn counts_by_hour(
        &self,
        event_id: Uuid,
        since: DateTime<Utc>,
    ) -> RepoResult<Vec<HourlyCount>>;
}
