//! Invite entity - a permanent redemption record

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A redeemed invite code.
///
/// Created exactly once at the moment of successful redemption and never
/// updated. The (code, event_id) pair is unique: a code is redeemable at
/// most once per event, while the same literal string may be redeemed
/// independently in a different event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    pub id: Uuid,
    pub code: String,
    pub event_id: Uuid,
    pub scanner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Invite {
    /// Create a new redemption record
    pub fn new(code: impl Into<String>, event_id: Uuid, scanner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            code: code.into(),
            event_id,
            scanner_id,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_creation() {
        let event_id = Uuid::new_v4();
        let scanner_id = Uuid::new_v4();
        let invite = Invite::new("FS25-1500", event_id, scanner_id);

        assert_eq!(invite.code, "FS25-1500");
        assert_eq!(invite.event_id, event_id);
        assert_eq!(invite.scanner_id, scanner_id);
    }
}
