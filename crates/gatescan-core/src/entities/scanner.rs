//! Scanner entity - a check-in device operator

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::DomainError;

/// Scanner entity
///
/// A scanner authenticates with a PIN (stored hashed, outside this struct)
/// and must carry at least one of phone number or email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scanner {
    pub id: Uuid,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Scanner {
    /// Create a new active Scanner
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phone_number: None,
            email: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the phone number
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Set the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Check the at-least-one-contact invariant
    pub fn validate_contact(&self) -> Result<(), DomainError> {
        if self.phone_number.is_none() && self.email.is_none() {
            return Err(DomainError::ValidationError(
                "Either phone number or email is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scanner_creation() {
        let scanner = Scanner::new("Gate A").with_phone_number("+254700000001");
        assert_eq!(scanner.name, "Gate A");
        assert!(scanner.is_active);
        assert!(scanner.validate_contact().is_ok());
    }

    #[test]
    fn test_scanner_requires_contact() {
        let scanner = Scanner::new("Gate B");
        assert!(matches!(
            scanner.validate_contact(),
            Err(DomainError::ValidationError(_))
        ));

        let scanner = Scanner::new("Gate B").with_email("gate-b@example.com");
        assert!(scanner.validate_contact().is_ok());
    }
}
