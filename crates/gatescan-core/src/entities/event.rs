//! Event entity - a check-in event and its code-space configuration

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::code_space;
use crate::error::DomainError;

/// Event entity
///
/// The slug is globally unique and immutable after creation. Both pattern
/// fields must compile as regular expressions at all times; writes are gated
/// by `validate_patterns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub code_prefix: String,
    pub attendant_code_pattern: String,
    pub driver_code_pattern: Option<String>,
    pub is_active: bool,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new active Event
    pub fn new(
        name: impl Into<String>,
        slug: impl Into<String>,
        code_prefix: impl Into<String>,
        attendant_code_pattern: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            slug: slug.into(),
            description: None,
            code_prefix: code_prefix.into(),
            attendant_code_pattern: attendant_code_pattern.into(),
            driver_code_pattern: None,
            is_active: true,
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set a driver code pattern
    pub fn with_driver_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.driver_code_pattern = Some(pattern.into());
        self
    }

    /// Set the start/end schedule
    pub fn with_schedule(
        mut self,
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
    ) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Check that both pattern fields compile as regular expressions
    pub fn validate_patterns(&self) -> Result<(), DomainError> {
        code_space::validate_pattern(&self.attendant_code_pattern)?;
        if let Some(pattern) = &self.driver_code_pattern {
            code_space::validate_pattern(pattern)?;
        }
        Ok(())
    }

    /// Check a presented code against the event's active pattern set.
    ///
    /// A code is accepted when it matches the attendant pattern or, if one
    /// is configured, the driver pattern.
    pub fn accepts_code(&self, code: &str) -> Result<bool, DomainError> {
        if code_space::compile_pattern(&self.attendant_code_pattern)?.is_match(code) {
            return Ok(true);
        }
        if let Some(pattern) = &self.driver_code_pattern {
            return Ok(code_space::compile_pattern(pattern)?.is_match(code));
        }
        Ok(false)
    }
}
