//! Redemption service
//!
//! The single entry point deciding whether a presented code becomes a
//! permanent redemption record: authorization gate, then code-space check,
//! then the atomic ledger insert.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use gatescan_common::AppError;
use gatescan_core::entities::Event;
use gatescan_core::DomainError;

use crate::dto::RedemptionResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Redemption service
pub struct RedemptionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RedemptionService<'a> {
    /// Create a new RedemptionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Attempt to redeem a code for an event on behalf of a scanner.
    ///
    /// A retry after a successful redemption deterministically yields
    /// `AlreadyRedeemed`; the stored total never moves twice for one code.
    #[instrument(skip(self), fields(event_slug = %event_slug, scanner_id = %scanner_id))]
    pub async fn attempt_redemption(
        &self,
        code: &str,
        event_slug: &str,
        scanner_id: Uuid,
    ) -> ServiceResult<RedemptionResponse> {
        let event = self.authorize(scanner_id, event_slug).await?;

        // Reject before touching the ledger; nothing is written for a
        // malformed code
        if !event.accepts_code(code)? {
            return Err(DomainError::InvalidCodeFormat.into());
        }

        let total_scanned = self
            .ctx
            .invite_repo()
            .redeem(code, event.id, scanner_id)
            .await?;

        info!(
            code = %code,
            event_id = %event.id,
            total_scanned,
            "Code redeemed"
        );

        Ok(RedemptionResponse::accepted(event.name, total_scanned))
    }

    /// Authorization gate: stateless, re-run on every attempt.
    ///
    /// The event must exist and be active; the scanner must exist and be
    /// active (reported as invalid credentials either way); an assignment
    /// row must link the two.
    async fn authorize(&self, scanner_id: Uuid, event_slug: &str) -> ServiceResult<Event> {
        let event = self
            .ctx
            .event_repo()
            .find_by_slug(event_slug)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_slug.to_string()))?;

        if !event.is_active {
            return Err(DomainError::EventInactive(event_slug.to_string()).into());
        }

        let scanner = self
            .ctx
            .scanner_repo()
            .find_by_id(scanner_id)
            .await?
            .ok_or_else(|| {
                warn!(scanner_id = %scanner_id, "Redemption by unknown scanner");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !scanner.is_active {
            warn!(scanner_id = %scanner_id, "Redemption by deactivated scanner");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        if !self
            .ctx
            .assignment_repo()
            .exists(scanner.id, event.id)
            .await?
        {
            return Err(DomainError::NotAuthorizedForEvent.into());
        }

        Ok(event)
    }
}
